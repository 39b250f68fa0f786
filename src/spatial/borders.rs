//! Border segments between tiles assigned to different seeds
//!
//! Every shared tile edge whose two sides belong to different seeds becomes a
//! rectangle of the line width centred on that edge, clipped to the grid.

use crate::geometry::{Polygon, Rect};
use crate::io::configuration::{LINE_WIDTH_FACTOR, LINE_WIDTH_PAD};
use crate::spatial::grid::TileGrid;

/// Which grid line a segment follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Along a shared x boundary, separating left and right tiles
    Vertical,
    /// Along a shared y boundary, separating lower and upper tiles
    Horizontal,
}

/// A fixed-width rectangle marking a seed boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderSegment {
    /// Segment rectangle, already clipped to the grid
    pub bounds: Rect,
    /// Grid line direction
    pub orientation: Orientation,
    /// Seeds on either side, lower/left first
    pub seeds: (usize, usize),
}

impl From<&BorderSegment> for Polygon {
    fn from(segment: &BorderSegment) -> Self {
        Self::from(segment.bounds)
    }
}

/// Border line width for a minimum feature width
///
/// The larger of 120% of the minimum and the minimum plus 0.2.
pub const fn line_width(min_feature: f64) -> f64 {
    (min_feature * LINE_WIDTH_FACTOR).max(min_feature + LINE_WIDTH_PAD)
}

/// Emit a segment for every adjacent tile pair with different seeds
///
/// Vertical segments come first (scanning columns), then horizontal ones.
pub fn extract_borders(grid: &TileGrid, line_width: f64) -> Vec<BorderSegment> {
    let half = line_width / 2.0;
    let width = grid.x_partition().length();
    let height = grid.y_partition().length();
    let (columns, rows) = grid.dimensions();
    let mut segments = Vec::new();

    for xi in 1..columns {
        let Some(&x) = grid.x_partition().steps().get(xi) else {
            continue;
        };
        for (yi, (y0, y1)) in grid.y_partition().intervals().enumerate() {
            let left = grid.assignment(xi - 1, yi);
            let right = grid.assignment(xi, yi);
            if let (Some(left), Some(right)) = (left, right)
                && left != right
            {
                segments.push(BorderSegment {
                    bounds: Rect::new((x - half).max(0.0), y0, (x + half).min(width), y1),
                    orientation: Orientation::Vertical,
                    seeds: (left, right),
                });
            }
        }
    }

    for yi in 1..rows {
        let Some(&y) = grid.y_partition().steps().get(yi) else {
            continue;
        };
        for (xi, (x0, x1)) in grid.x_partition().intervals().enumerate() {
            let bottom = grid.assignment(xi, yi - 1);
            let top = grid.assignment(xi, yi);
            if let (Some(bottom), Some(top)) = (bottom, top)
                && bottom != top
            {
                segments.push(BorderSegment {
                    bounds: Rect::new(x0, (y - half).max(0.0), x1, (y + half).min(height)),
                    orientation: Orientation::Horizontal,
                    seeds: (bottom, top),
                });
            }
        }
    }

    segments
}
