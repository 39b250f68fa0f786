//! Spatial discretisation of the bounding rectangle
//!
//! This module contains the grid side of the pipeline:
//! - Axis partitioning into tile boundaries
//! - Tile grid construction with nearest-seed assignment
//! - Border segment extraction between differently assigned tiles

/// Border segment extraction between tiles of different seeds
pub mod borders;
/// Tile grid with nearest-seed assignment
pub mod grid;
/// Adaptive axis partitioning
pub mod partition;

pub use grid::TileGrid;
pub use partition::AxisPartition;
