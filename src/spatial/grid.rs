//! Tile grid crossing two axis partitions, with nearest-seed assignment
//!
//! Each tile is the product of one x-interval and one y-interval. Tiles are
//! assigned once, at construction, to the seed closest to their centre and
//! are read-only afterwards.

use ndarray::Array2;

use crate::geometry::{Point, Rect};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::partition::AxisPartition;

/// One rectangular grid cell and the seed it belongs to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    /// Column index along x
    pub xi: usize,
    /// Row index along y
    pub yi: usize,
    /// Tile rectangle
    pub bounds: Rect,
    /// Index of the nearest seed
    pub seed: usize,
}

/// Grid of tiles with their seed assignments
#[derive(Debug, Clone)]
pub struct TileGrid {
    x_partition: AxisPartition,
    y_partition: AxisPartition,
    /// Seed index per tile, indexed by `[xi, yi]`
    assignments: Array2<usize>,
}

impl TileGrid {
    /// Build the grid and assign every tile to its nearest seed
    ///
    /// Distances are squared Euclidean from the tile centre; among equally
    /// near seeds the one listed first wins.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `seeds` is empty
    pub fn build(
        x_partition: AxisPartition,
        y_partition: AxisPartition,
        seeds: &[Point],
    ) -> Result<Self> {
        if seeds.is_empty() {
            return Err(invalid_parameter(
                "seeds",
                &0,
                &"at least one seed is required to assign tiles",
            ));
        }

        let shape = (x_partition.interval_count(), y_partition.interval_count());
        let assignments = Array2::from_shape_fn(shape, |(xi, yi)| {
            let center = tile_rect(&x_partition, &y_partition, xi, yi)
                .map_or(Point::new(0.0, 0.0), |rect| rect.center());
            nearest_seed(center, seeds).unwrap_or(0)
        });

        Ok(Self {
            x_partition,
            y_partition,
            assignments,
        })
    }

    /// Grid size as (columns along x, rows along y)
    pub fn dimensions(&self) -> (usize, usize) {
        self.assignments.dim()
    }

    /// Total number of tiles
    pub fn tile_count(&self) -> usize {
        self.assignments.len()
    }

    /// Partition of the x axis
    pub const fn x_partition(&self) -> &AxisPartition {
        &self.x_partition
    }

    /// Partition of the y axis
    pub const fn y_partition(&self) -> &AxisPartition {
        &self.y_partition
    }

    /// Seed index per tile, indexed by `[xi, yi]`
    pub const fn assignments(&self) -> &Array2<usize> {
        &self.assignments
    }

    /// Seed assigned to tile `(xi, yi)`
    pub fn assignment(&self, xi: usize, yi: usize) -> Option<usize> {
        self.assignments.get([xi, yi]).copied()
    }

    /// Full description of tile `(xi, yi)`
    pub fn tile(&self, xi: usize, yi: usize) -> Option<Tile> {
        Some(Tile {
            xi,
            yi,
            bounds: tile_rect(&self.x_partition, &self.y_partition, xi, yi)?,
            seed: self.assignment(xi, yi)?,
        })
    }

    /// Every tile, column by column
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        let (columns, rows) = self.dimensions();
        (0..columns).flat_map(move |xi| (0..rows).filter_map(move |yi| self.tile(xi, yi)))
    }

    /// Bounding rectangle covered by the grid
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.x_partition.length(), self.y_partition.length())
    }
}

fn tile_rect(x: &AxisPartition, y: &AxisPartition, xi: usize, yi: usize) -> Option<Rect> {
    let (x0, x1) = x.interval(xi)?;
    let (y0, y1) = y.interval(yi)?;
    Some(Rect::new(x0, y0, x1, y1))
}

/// Index of the seed closest to `point`, first one on ties
///
/// Linear scan; the grids built here hold tens of tiles and seeds.
pub fn nearest_seed(point: Point, seeds: &[Point]) -> Option<usize> {
    seeds
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (index, seed)| {
            let distance = seed.distance_squared(point);
            match best {
                Some((_, best_distance)) if best_distance <= distance => best,
                _ => Some((index, distance)),
            }
        })
        .map(|(index, _)| index)
}
