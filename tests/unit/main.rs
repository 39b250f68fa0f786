//! Unit tests mirroring the `src` layout

mod geometry;
mod io;
