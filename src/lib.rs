//! Decorative Voronoi-style border tiling for manufacturable metal layers
//!
//! Seeds are sampled inside a rectangle, a tile grid approximates their
//! Voronoi cells, and the boundaries between cells become thin border lines
//! that are merged with an outer frame into a non-overlapping polygon set
//! respecting a minimum line width and spacing.

#![forbid(unsafe_code)]

/// Pipeline stages composing the final pattern
pub mod algorithm;
/// Points, rectangles, polygons and boolean operations
pub mod geometry;
/// Input/output operations and error handling
pub mod io;
/// Seed sampling
pub mod sampling;
/// Axis partitioning, tile grid and border extraction
pub mod spatial;

pub use algorithm::compositor::{LayerTag, RegionSet};
pub use algorithm::pipeline::{
    Pattern, PatternConfig, PatternStats, Stage, generate, generate_observed, generate_with_rng,
};
pub use io::error::{PatternError, Result};
