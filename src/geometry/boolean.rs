//! Rectilinear boolean engine over compressed coverage grids
//!
//! Every edge coordinate of the inputs is collected per axis, sorted and
//! snapped (values closer than [`GEOMETRY_EPSILON`] collapse to the first
//! one). The resulting lines cut the plane into a grid of cells on which each
//! operand is rasterised by testing cell centres, so coincident edges from
//! different operands land on the same grid line and can never leave
//! slivers. Cells are combined with the requested operator and the filled
//! region is traced back into polygons.
//!
//! The engine is exact for axis-aligned input. Non-rectilinear input is
//! accepted but only resolved to the grid spanned by its vertices.

use std::collections::HashMap;

use ndarray::Array2;

use crate::geometry::point::Point;
use crate::geometry::polygon::{Polygon, ring_contains, signed_area};
use crate::io::configuration::GEOMETRY_EPSILON;
use crate::io::error::{Result, computation_error};

/// Boolean set operator applied cell-wise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    /// Covered by the subject or the clip
    Union,
    /// Covered by the subject but not the clip
    Difference,
    /// Covered by both the subject and the clip
    Intersection,
}

impl BooleanOp {
    const fn apply(self, subject: bool, clip: bool) -> bool {
        match self {
            Self::Union => subject || clip,
            Self::Difference => subject && !clip,
            Self::Intersection => subject && clip,
        }
    }
}

/// Union of every polygon in the set
///
/// Overlapping and touching inputs merge into single polygons; the output
/// never overlaps itself.
///
/// # Errors
///
/// Returns a `Computation` error if an input coordinate is not finite or a
/// traced boundary fails to close
pub fn union(polygons: &[Polygon]) -> Result<Vec<Polygon>> {
    boolean(polygons, &[], BooleanOp::Union)
}

/// Area covered by `subject` and not by `clip`
///
/// # Errors
///
/// Returns a `Computation` error if an input coordinate is not finite or a
/// traced boundary fails to close
pub fn difference(subject: &[Polygon], clip: &[Polygon]) -> Result<Vec<Polygon>> {
    boolean(subject, clip, BooleanOp::Difference)
}

/// Area covered by both `subject` and `clip`
///
/// # Errors
///
/// Returns a `Computation` error if an input coordinate is not finite or a
/// traced boundary fails to close
pub fn intersection(subject: &[Polygon], clip: &[Polygon]) -> Result<Vec<Polygon>> {
    boolean(subject, clip, BooleanOp::Intersection)
}

/// Apply a boolean operator to two polygon sets
///
/// Each operand is interpreted as the union of its polygons. An empty result
/// is a valid outcome and is returned as an empty vector.
///
/// # Errors
///
/// Returns a `Computation` error if an input coordinate is not finite or a
/// traced boundary fails to close
pub fn boolean(subject: &[Polygon], clip: &[Polygon], op: BooleanOp) -> Result<Vec<Polygon>> {
    let points = || subject.iter().chain(clip).flat_map(Polygon::rings).flatten();

    if let Some(bad) = points().find(|p| !p.is_finite()) {
        return Err(computation_error(
            "boolean",
            &format!("non-finite vertex ({}, {})", bad.x, bad.y),
        ));
    }

    let xs = snap_axis(points().map(|p| p.x));
    let ys = snap_axis(points().map(|p| p.y));
    if xs.len() < 2 || ys.len() < 2 {
        return Ok(Vec::new());
    }

    let subject_cells = rasterize(subject, &xs, &ys);
    let clip_cells = rasterize(clip, &xs, &ys);
    let cells = ndarray::Zip::from(&subject_cells)
        .and(&clip_cells)
        .map_collect(|&s, &c| op.apply(s, c));

    CoverageGrid { xs, ys, cells }.trace()
}

/// Sorted grid lines with coincident values collapsed
fn snap_axis(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut axis: Vec<f64> = values.collect();
    axis.sort_by(f64::total_cmp);
    axis.dedup_by(|current, kept| (*current - *kept).abs() <= GEOMETRY_EPSILON);
    axis
}

fn midpoint(axis: &[f64], index: usize) -> Option<f64> {
    Some((axis.get(index)? + axis.get(index + 1)?) * 0.5)
}

/// Mark every cell whose centre lies inside any of the polygons
///
/// Filled row by row from the polygon's spans at each cell-row centre.
fn rasterize(polygons: &[Polygon], xs: &[f64], ys: &[f64]) -> Array2<bool> {
    let mut cells = Array2::from_elem((xs.len() - 1, ys.len() - 1), false);
    let x_centres = centres(xs);
    let y_centres = centres(ys);

    for polygon in polygons {
        let Some(bounds) = polygon.bounds() else {
            continue;
        };
        let first_row = y_centres.partition_point(|&cy| cy < bounds.min.y);
        let last_row = y_centres.partition_point(|&cy| cy < bounds.max.y);

        for (yi, &cy) in y_centres
            .iter()
            .enumerate()
            .take(last_row)
            .skip(first_row)
        {
            for (start, end) in polygon.spans_at(cy) {
                let first = x_centres.partition_point(|&cx| cx < start);
                let last = x_centres.partition_point(|&cx| cx < end);
                for xi in first..last {
                    if let Some(cell) = cells.get_mut([xi, yi]) {
                        *cell = true;
                    }
                }
            }
        }
    }

    cells
}

/// Midpoints between consecutive grid lines
fn centres(axis: &[f64]) -> Vec<f64> {
    axis.iter()
        .zip(axis.iter().skip(1))
        .map(|(low, high)| (low + high) * 0.5)
        .collect()
}

/// Travel direction along a grid line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    East,
    North,
    West,
    South,
}

impl Direction {
    const fn index(self) -> usize {
        match self {
            Self::East => 0,
            Self::North => 1,
            Self::West => 2,
            Self::South => 3,
        }
    }

    const fn left(self) -> Self {
        match self {
            Self::East => Self::North,
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
        }
    }

    const fn right(self) -> Self {
        match self {
            Self::East => Self::South,
            Self::North => Self::East,
            Self::West => Self::North,
            Self::South => Self::West,
        }
    }

    /// Lattice vertex reached by one step from `from`
    const fn step(self, from: [usize; 2]) -> Option<[usize; 2]> {
        let [x, y] = from;
        match self {
            Self::East => Some([x + 1, y]),
            Self::North => Some([x, y + 1]),
            Self::West => match x.checked_sub(1) {
                Some(x) => Some([x, y]),
                None => None,
            },
            Self::South => match y.checked_sub(1) {
                Some(y) => Some([x, y]),
                None => None,
            },
        }
    }

    /// Cell on the right-hand side of a unit edge starting at `from`
    const fn right_cell(self, from: [usize; 2]) -> Option<[usize; 2]> {
        let [x, y] = from;
        match self {
            Self::East => match y.checked_sub(1) {
                Some(y) => Some([x, y]),
                None => None,
            },
            Self::North => Some([x, y]),
            Self::West => match x.checked_sub(1) {
                Some(x) => Some([x, y]),
                None => None,
            },
            Self::South => match (x.checked_sub(1), y.checked_sub(1)) {
                (Some(x), Some(y)) => Some([x, y]),
                _ => None,
            },
        }
    }
}

/// Unit boundary edge with filled cells on its left
#[derive(Debug, Clone, Copy)]
struct BoundaryEdge {
    start: [usize; 2],
    direction: Direction,
}

/// A traced closed ring before grouping into polygons
struct TracedRing {
    ring: Vec<Point>,
    area: f64,
    // Centre of an empty cell just outside a hole ring
    sample: Option<Point>,
}

struct CoverageGrid {
    xs: Vec<f64>,
    ys: Vec<f64>,
    cells: Array2<bool>,
}

impl CoverageGrid {
    fn filled(&self, x: Option<usize>, y: Option<usize>) -> bool {
        match (x, y) {
            (Some(x), Some(y)) => self.cells.get([x, y]).copied().unwrap_or(false),
            _ => false,
        }
    }

    fn vertex(&self, at: [usize; 2]) -> Option<Point> {
        let [x, y] = at;
        Some(Point::new(*self.xs.get(x)?, *self.ys.get(y)?))
    }

    fn cell_center(&self, at: [usize; 2]) -> Option<Point> {
        let [x, y] = at;
        Some(Point::new(midpoint(&self.xs, x)?, midpoint(&self.ys, y)?))
    }

    /// Counter-clockwise unit edges around every filled cell side facing empty space
    fn boundary_edges(&self) -> Vec<BoundaryEdge> {
        let (nx, ny) = self.cells.dim();
        let mut edges = Vec::new();

        for x in 0..nx {
            for y in 0..ny {
                if !self.filled(Some(x), Some(y)) {
                    continue;
                }
                if !self.filled(Some(x), y.checked_sub(1)) {
                    edges.push(BoundaryEdge {
                        start: [x, y],
                        direction: Direction::East,
                    });
                }
                if !self.filled(Some(x + 1), Some(y)) {
                    edges.push(BoundaryEdge {
                        start: [x + 1, y],
                        direction: Direction::North,
                    });
                }
                if !self.filled(Some(x), Some(y + 1)) {
                    edges.push(BoundaryEdge {
                        start: [x + 1, y + 1],
                        direction: Direction::West,
                    });
                }
                if !self.filled(x.checked_sub(1), Some(y)) {
                    edges.push(BoundaryEdge {
                        start: [x, y + 1],
                        direction: Direction::South,
                    });
                }
            }
        }

        edges
    }

    /// Trace the filled region into polygons with holes
    fn trace(&self) -> Result<Vec<Polygon>> {
        let edges = self.boundary_edges();
        let (nx, ny) = self.cells.dim();

        // Outgoing edge per lattice vertex and direction
        let mut outgoing: Array2<[Option<usize>; 4]> =
            Array2::from_elem((nx + 1, ny + 1), [None; 4]);
        for (id, edge) in edges.iter().enumerate() {
            if let Some(slot) = outgoing
                .get_mut(edge.start)
                .and_then(|slots| slots.get_mut(edge.direction.index()))
            {
                *slot = Some(id);
            }
        }

        let mut used = vec![false; edges.len()];
        let mut rings = Vec::new();

        for start_id in 0..edges.len() {
            if used.get(start_id).copied().unwrap_or(true) {
                continue;
            }
            rings.extend(self.trace_ring(start_id, &edges, &outgoing, &mut used)?);
        }

        assemble_polygons(rings)
    }

    fn trace_ring(
        &self,
        start_id: usize,
        edges: &[BoundaryEdge],
        outgoing: &Array2<[Option<usize>; 4]>,
        used: &mut [bool],
    ) -> Result<Vec<TracedRing>> {
        let mut path: Vec<BoundaryEdge> = Vec::new();
        let mut current = start_id;

        for _ in 0..=edges.len() {
            let edge = *edges
                .get(current)
                .ok_or_else(|| computation_error("boolean trace", &"edge index out of range"))?;
            if let Some(flag) = used.get_mut(current) {
                *flag = true;
            }
            path.push(edge);

            let end = edge.direction.step(edge.start).ok_or_else(|| {
                computation_error("boolean trace", &"boundary left the lattice")
            })?;
            let slots = outgoing.get(end).copied().unwrap_or([None; 4]);

            // Prefer the left turn so diagonally touching cells stay separate
            let next = [
                edge.direction.left(),
                edge.direction,
                edge.direction.right(),
            ]
            .into_iter()
            .filter_map(|direction| slots.get(direction.index()).copied().flatten())
            .find(|&id| id == start_id || !used.get(id).copied().unwrap_or(true));

            match next {
                Some(id) if id == start_id => {
                    return split_loops(&path)
                        .iter()
                        .map(|edges| self.finish_ring(edges))
                        .collect();
                }
                Some(id) => current = id,
                None => {
                    return Err(computation_error(
                        "boolean trace",
                        &format!("open boundary at lattice vertex {end:?}"),
                    ));
                }
            }
        }

        Err(computation_error("boolean trace", &"boundary did not close"))
    }

    /// Keep only the corner vertices of a traced edge path
    fn finish_ring(&self, path: &[BoundaryEdge]) -> Result<TracedRing> {
        let previous = path.iter().cycle().skip(path.len().saturating_sub(1));
        let mut ring = Vec::new();

        for (edge, before) in path.iter().zip(previous) {
            if edge.direction != before.direction {
                let vertex = self.vertex(edge.start).ok_or_else(|| {
                    computation_error("boolean trace", &"vertex outside grid")
                })?;
                ring.push(vertex);
            }
        }

        // Canonical start: lowest-leftmost corner
        if let Some(first) = ring
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| corner_order(**a, **b))
            .map(|(index, _)| index)
        {
            ring.rotate_left(first);
        }

        let area = signed_area(&ring);
        let sample = path
            .first()
            .and_then(|edge| edge.direction.right_cell(edge.start))
            .and_then(|cell| self.cell_center(cell));

        Ok(TracedRing { ring, area, sample })
    }
}

/// Cut a closed edge path into simple loops wherever it revisits a lattice vertex
///
/// A hole pinched between two diagonally touching cells passes through the
/// shared vertex twice; each pass closes one of the resulting loops.
fn split_loops(path: &[BoundaryEdge]) -> Vec<Vec<BoundaryEdge>> {
    let mut loops = Vec::new();
    let mut open: Vec<BoundaryEdge> = Vec::with_capacity(path.len());
    let mut visited: HashMap<[usize; 2], usize> = HashMap::new();

    for &edge in path {
        if let Some(position) = visited.get(&edge.start).copied() {
            let closed = open.split_off(position);
            for removed in &closed {
                visited.remove(&removed.start);
            }
            loops.push(closed);
        }
        visited.insert(edge.start, open.len());
        open.push(edge);
    }
    if !open.is_empty() {
        loops.push(open);
    }

    loops
}

/// Group counter-clockwise exteriors with the clockwise holes they enclose
fn assemble_polygons(rings: Vec<TracedRing>) -> Result<Vec<Polygon>> {
    let (exteriors, holes): (Vec<TracedRing>, Vec<TracedRing>) =
        rings.into_iter().partition(|ring| ring.area > 0.0);

    let mut hole_lists: Vec<Vec<Vec<Point>>> = vec![Vec::new(); exteriors.len()];

    for hole in holes {
        let sample = hole
            .sample
            .ok_or_else(|| computation_error("boolean assemble", &"hole without interior"))?;

        // Innermost enclosing exterior owns the hole
        let owner = exteriors
            .iter()
            .enumerate()
            .filter(|(_, exterior)| ring_contains(&exterior.ring, sample))
            .min_by(|(_, a), (_, b)| a.area.total_cmp(&b.area))
            .map(|(index, _)| index)
            .ok_or_else(|| {
                computation_error(
                    "boolean assemble",
                    &format!("hole near ({}, {}) has no enclosing boundary", sample.x, sample.y),
                )
            })?;

        if let Some(list) = hole_lists.get_mut(owner) {
            list.push(hole.ring);
        }
    }

    let mut polygons: Vec<Polygon> = exteriors
        .into_iter()
        .zip(hole_lists)
        .map(|(exterior, mut holes)| {
            holes.sort_by(|a, b| ring_order(a, b));
            Polygon::new(exterior.ring, holes)
        })
        .collect();
    polygons.sort_by(|a, b| ring_order(a.exterior(), b.exterior()));

    Ok(polygons)
}

fn corner_order(a: Point, b: Point) -> std::cmp::Ordering {
    a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x))
}

fn ring_order(a: &[Point], b: &[Point]) -> std::cmp::Ordering {
    match (a.first(), b.first()) {
        (Some(a), Some(b)) => corner_order(*a, *b),
        (a, b) => a.is_some().cmp(&b.is_some()),
    }
}
