//! PNG preview of a region set with transparent background

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::algorithm::compositor::RegionSet;
use crate::io::error::{PatternError, Result, require_positive};

/// Rasterise the region set at `scale` pixels per unit
///
/// Pixels are painted when their centre lies inside the geometry (even-odd
/// over every ring, so holes stay clear). The image is flipped vertically so
/// the layout origin sits at the bottom-left corner.
///
/// # Errors
///
/// Returns `InvalidParameter` if `scale` is not a positive finite number
pub fn render_preview(regions: &RegionSet, scale: f64, color: [u8; 4]) -> Result<RgbaImage> {
    require_positive("scale", scale)?;

    let extent = regions.extent();
    let width = (extent.width() * scale).ceil().max(1.0) as u32;
    let height = (extent.height() * scale).ceil().max(1.0) as u32;
    let mut img = RgbaImage::new(width, height);

    for row in 0..height {
        let y = extent.max.y - (f64::from(row) + 0.5) / scale;

        for (start, end) in regions.polygons().iter().flat_map(|polygon| polygon.spans_at(y)) {
            // Pixel columns whose centre falls inside [start, end)
            let first = ((start - extent.min.x) * scale - 0.5).ceil().max(0.0) as u32;
            let last = ((end - extent.min.x) * scale - 0.5).ceil().max(0.0) as u32;
            for column in first..last.min(width) {
                img.put_pixel(column, row, Rgba(color));
            }
        }
    }

    Ok(img)
}

/// Render the preview and save it as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - `scale` is invalid
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_preview_png(
    regions: &RegionSet,
    scale: f64,
    color: [u8; 4],
    output_path: &Path,
) -> Result<()> {
    let img = render_preview(regions, scale, color)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PatternError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| PatternError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
