//! Polygons with holes, as produced by the boolean engine
//!
//! Rings are stored open (the closing vertex is implied). Exteriors wind
//! counter-clockwise and holes clockwise, so the signed shoelace area of all
//! rings sums to the covered area.

use crate::geometry::point::{Point, Rect};

/// A polygon with an outer ring and zero or more hole rings
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    exterior: Vec<Point>,
    holes: Vec<Vec<Point>>,
}

impl Polygon {
    /// Create a polygon from its exterior ring and hole rings
    pub const fn new(exterior: Vec<Point>, holes: Vec<Vec<Point>>) -> Self {
        Self { exterior, holes }
    }

    /// Outer boundary ring
    pub fn exterior(&self) -> &[Point] {
        &self.exterior
    }

    /// Hole rings
    pub fn holes(&self) -> &[Vec<Point>] {
        &self.holes
    }

    /// All rings, exterior first
    pub fn rings(&self) -> impl Iterator<Item = &[Point]> + '_ {
        std::iter::once(self.exterior.as_slice()).chain(self.holes.iter().map(Vec::as_slice))
    }

    /// Total number of vertices over all rings
    pub fn vertex_count(&self) -> usize {
        self.rings().map(<[Point]>::len).sum()
    }

    /// Covered area: exterior area minus hole areas
    pub fn area(&self) -> f64 {
        let hole_area: f64 = self.holes.iter().map(|hole| signed_area(hole).abs()).sum();
        signed_area(&self.exterior).abs() - hole_area
    }

    /// Even-odd containment test over every ring
    ///
    /// Points exactly on an edge may land on either side.
    pub fn contains(&self, point: Point) -> bool {
        ring_contains(&self.exterior, point)
            && !self.holes.iter().any(|hole| ring_contains(hole, point))
    }

    /// Bounding rectangle of the exterior ring, `None` for an empty ring
    pub fn bounds(&self) -> Option<Rect> {
        ring_bounds(&self.exterior)
    }

    /// Intervals of the horizontal line at `y` lying inside the polygon
    ///
    /// Even-odd over every ring, sorted by `x`. A line through a vertex may
    /// land on either side of it.
    pub fn spans_at(&self, y: f64) -> Vec<(f64, f64)> {
        let mut crossings: Vec<f64> = self
            .rings()
            .flat_map(ring_edges)
            .filter(|(a, b)| (a.y > y) != (b.y > y))
            .map(|(a, b)| (b.x - a.x) * (y - a.y) / (b.y - a.y) + a.x)
            .collect();
        crossings.sort_by(f64::total_cmp);

        crossings
            .chunks_exact(2)
            .filter_map(|pair| match pair {
                [start, end] => Some((*start, *end)),
                _ => None,
            })
            .collect()
    }

    /// Cover a rectilinear polygon with non-overlapping rectangles
    ///
    /// The polygon is cut into horizontal slabs at every vertex height and
    /// slabs with identical spans are stacked into one rectangle.
    pub fn rectangles(&self) -> Vec<Rect> {
        let mut levels: Vec<f64> = self.rings().flatten().map(|p| p.y).collect();
        levels.sort_by(f64::total_cmp);
        levels.dedup();

        let mut finished = Vec::new();
        let mut growing: Vec<Rect> = Vec::new();

        for (&y0, &y1) in levels.iter().zip(levels.iter().skip(1)) {
            let mut next = Vec::new();
            for (x0, x1) in self.spans_at((y0 + y1) * 0.5) {
                let same_span = growing.iter().position(|rect| {
                    rect.min.x.total_cmp(&x0).is_eq() && rect.max.x.total_cmp(&x1).is_eq()
                });
                let bottom = same_span.map_or(y0, |index| growing.swap_remove(index).min.y);
                next.push(Rect::new(x0, bottom, x1, y1));
            }
            finished.append(&mut growing);
            growing = next;
        }
        finished.append(&mut growing);

        finished
    }

    /// True when every edge is horizontal or vertical
    pub fn is_rectilinear(&self) -> bool {
        self.rings().all(|ring| {
            ring_edges(ring)
                .all(|(a, b)| a.x.total_cmp(&b.x).is_eq() || a.y.total_cmp(&b.y).is_eq())
        })
    }
}

impl From<Rect> for Polygon {
    fn from(rect: Rect) -> Self {
        Self::new(rect.corners().to_vec(), Vec::new())
    }
}

/// Iterate over the closed edges of a ring as `(start, end)` pairs
pub fn ring_edges(ring: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    ring.iter()
        .copied()
        .zip(ring.iter().copied().cycle().skip(1))
}

/// Signed shoelace area, positive for counter-clockwise rings
pub fn signed_area(ring: &[Point]) -> f64 {
    0.5 * ring_edges(ring)
        .map(|(a, b)| a.x.mul_add(b.y, -(b.x * a.y)))
        .sum::<f64>()
}

/// Crossing-number containment test for a single ring
pub fn ring_contains(ring: &[Point], point: Point) -> bool {
    ring_edges(ring).fold(false, |inside, (a, b)| {
        if (a.y > point.y) != (b.y > point.y) {
            let crossing = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
            if point.x < crossing {
                return !inside;
            }
        }
        inside
    })
}

/// Bounding rectangle of a ring, `None` for an empty ring
pub fn ring_bounds(ring: &[Point]) -> Option<Rect> {
    let first = ring.first()?;
    Some(ring.iter().fold(Rect::new(first.x, first.y, first.x, first.y), |acc, p| {
        acc.union(&Rect::new(p.x, p.y, p.x, p.y))
    }))
}
