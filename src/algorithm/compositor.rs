//! Composition of border segments and the outer frame into the final region set

use crate::geometry::{Polygon, Rect, boolean};
use crate::io::configuration::{BORDER_DATATYPE, BORDER_LAYER};
use crate::io::error::{Result, invalid_parameter, require_positive};
use crate::spatial::borders::BorderSegment;

/// Layout layer/purpose pair attached to generated geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerTag {
    /// Layer number
    pub layer: u16,
    /// Datatype (purpose) number
    pub datatype: u16,
}

impl Default for LayerTag {
    fn default() -> Self {
        Self {
            layer: BORDER_LAYER,
            datatype: BORDER_DATATYPE,
        }
    }
}

/// Final non-overlapping polygon set handed to the writers
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSet {
    polygons: Vec<Polygon>,
    extent: Rect,
    layer: LayerTag,
}

impl RegionSet {
    /// Polygons of the set
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Consume the set, keeping only its polygons
    pub fn into_polygons(self) -> Vec<Polygon> {
        self.polygons
    }

    /// The bounding rectangle the pattern was generated for
    pub const fn extent(&self) -> Rect {
        self.extent
    }

    /// Layer/purpose tag shared by every polygon
    pub const fn layer(&self) -> LayerTag {
        self.layer
    }

    /// Number of polygons
    pub const fn len(&self) -> usize {
        self.polygons.len()
    }

    /// True when the set holds no polygons
    pub const fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Total covered area
    pub fn area(&self) -> f64 {
        self.polygons.iter().map(Polygon::area).sum()
    }

    /// Bounding rectangle of the actual geometry, `None` when empty
    pub fn bounds(&self) -> Option<Rect> {
        self.polygons
            .iter()
            .filter_map(Polygon::bounds)
            .reduce(|acc, rect| acc.union(&rect))
    }
}

/// Fixed-width ring around a `width` × `height` rectangle
///
/// # Errors
///
/// Returns `InvalidParameter` if a dimension or the line width is not a
/// positive finite number, or the ring would close up
/// (`2 × line_width ≥ min(width, height)`)
pub fn frame_ring(width: f64, height: f64, line_width: f64) -> Result<Vec<Polygon>> {
    require_positive("width", width)?;
    require_positive("height", height)?;
    require_positive("line_width", line_width)?;
    if 2.0 * line_width >= width.min(height) {
        return Err(invalid_parameter(
            "line_width",
            &line_width,
            &format!("frame ring does not fit inside {width} x {height}"),
        ));
    }

    let outer = Polygon::from(Rect::from_size(width, height));
    let inner = Polygon::from(Rect::new(
        line_width,
        line_width,
        width - line_width,
        height - line_width,
    ));
    boolean::difference(&[outer], &[inner])
}

/// Union all border segments with the frame ring
///
/// Segments are merged first, then the frame is added. No segments is a
/// valid input and yields the frame alone.
///
/// # Errors
///
/// Returns `InvalidParameter` for an invalid frame (see [`frame_ring`]) and
/// `Computation` if the boolean engine rejects the geometry
pub fn compose(
    segments: &[BorderSegment],
    width: f64,
    height: f64,
    line_width: f64,
) -> Result<RegionSet> {
    let pieces: Vec<Polygon> = segments.iter().map(Polygon::from).collect();
    let mut merged = boolean::union(&pieces)?;
    merged.extend(frame_ring(width, height, line_width)?);

    Ok(RegionSet {
        polygons: boolean::union(&merged)?,
        extent: Rect::from_size(width, height),
        layer: LayerTag::default(),
    })
}
