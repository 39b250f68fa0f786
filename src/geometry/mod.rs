//! Planar geometry primitives and the boolean polygon engine

/// Rectilinear boolean operations (union, difference, intersection)
pub mod boolean;
/// Points and axis-aligned rectangles
pub mod point;
/// Polygons with holes and ring utilities
pub mod polygon;

pub use point::{Point, Rect};
pub use polygon::Polygon;
