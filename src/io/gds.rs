//! GDSII stream writer for the generated cell
//!
//! The library holds one structure named after the cell. Every region
//! polygon becomes a boundary on the region set's layer tag, followed by a
//! place-and-route boundary box at the origin. Boundaries cannot carry
//! holes, so polygons with holes (or too many vertices for one record) are
//! written as a rectangle cover instead.

use std::path::Path;

use crate::algorithm::compositor::{LayerTag, RegionSet};
use crate::geometry::{Point, Rect};
use crate::io::configuration::{
    GDS_DATABASE_UNIT_METERS, GDS_DATABASE_UNITS_PER_MICRON, GDS_LIBRARY_NAME,
    GDS_MAX_BOUNDARY_VERTICES, GDS_USER_UNITS_PER_DATABASE_UNIT, PR_BOUNDARY_DATATYPE,
    PR_BOUNDARY_LAYER, PR_BOUNDARY_SIZE,
};
use crate::io::error::{PatternError, Result, computation_error, require_cell_name};

// Record type in the high byte, data type in the low byte
const HEADER: u16 = 0x0002;
const BGNLIB: u16 = 0x0102;
const LIBNAME: u16 = 0x0206;
const UNITS: u16 = 0x0305;
const ENDLIB: u16 = 0x0400;
const BGNSTR: u16 = 0x0502;
const STRNAME: u16 = 0x0606;
const ENDSTR: u16 = 0x0700;
const BOUNDARY: u16 = 0x0800;
const LAYER: u16 = 0x0D02;
const DATATYPE: u16 = 0x0E02;
const XY: u16 = 0x1003;
const ENDEL: u16 = 0x1100;

const STREAM_VERSION: i16 = 600;

// Modification then access time; fixed so output only depends on the geometry
const TIMESTAMP: [i16; 12] = [1970, 1, 1, 0, 0, 0, 1970, 1, 1, 0, 0, 0];

/// Encode `value` as an 8-byte excess-64 base-16 real
///
/// Zero, non-finite values and magnitudes outside the format's exponent
/// range encode as zero.
pub fn gds_real(value: f64) -> [u8; 8] {
    if !value.is_finite() || value == 0.0 {
        return [0; 8];
    }

    let mut mantissa = value.abs();
    let mut exponent: i64 = 64;
    while mantissa >= 1.0 {
        mantissa /= 16.0;
        exponent += 1;
    }
    while mantissa < 0.0625 {
        mantissa *= 16.0;
        exponent -= 1;
    }
    if !(0..=127).contains(&exponent) {
        return [0; 8];
    }

    // 56-bit fraction, 7-bit exponent, sign in the top bit
    let fraction = (mantissa * 2f64.powi(56)).round() as u64;
    let sign: u64 = if value.is_sign_negative() { 0x80 } else { 0 };
    let head = sign | exponent as u64;

    ((head << 56) | fraction).to_be_bytes()
}

/// Render the GDSII stream for `regions` as a single structure
///
/// # Errors
///
/// Returns `InvalidParameter` for an invalid cell name, and `Computation`
/// if a coordinate does not fit a 32-bit database unit
pub fn render_gds(regions: &RegionSet, cell_name: &str) -> Result<Vec<u8>> {
    require_cell_name(cell_name)?;

    let mut stream = StreamWriter::default();
    stream.int16s(HEADER, &[STREAM_VERSION])?;
    stream.int16s(BGNLIB, &TIMESTAMP)?;
    stream.string(LIBNAME, GDS_LIBRARY_NAME)?;
    stream.reals(
        UNITS,
        &[GDS_USER_UNITS_PER_DATABASE_UNIT, GDS_DATABASE_UNIT_METERS],
    )?;
    stream.int16s(BGNSTR, &TIMESTAMP)?;
    stream.string(STRNAME, cell_name)?;

    for polygon in regions.polygons() {
        let exterior = polygon.exterior();
        if polygon.holes().is_empty() && exterior.len() <= GDS_MAX_BOUNDARY_VERTICES {
            if exterior.len() >= 3 {
                stream.boundary(exterior, regions.layer())?;
            }
        } else {
            for rect in polygon.rectangles() {
                stream.boundary(&rect.corners(), regions.layer())?;
            }
        }
    }

    let pr_boundary = Rect::from_size(PR_BOUNDARY_SIZE, PR_BOUNDARY_SIZE);
    stream.boundary(
        &pr_boundary.corners(),
        LayerTag {
            layer: PR_BOUNDARY_LAYER,
            datatype: PR_BOUNDARY_DATATYPE,
        },
    )?;

    stream.empty(ENDSTR)?;
    stream.empty(ENDLIB)?;

    Ok(stream.bytes)
}

/// Write the GDSII stream for `regions` to `path`, creating parent directories
///
/// # Errors
///
/// Returns the errors of [`render_gds`], and `FileSystem` if the directory
/// or file cannot be written
pub fn write_gds(path: &Path, regions: &RegionSet, cell_name: &str) -> Result<()> {
    let contents = render_gds(regions, cell_name)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PatternError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(path, contents).map_err(|e| PatternError::FileSystem {
        path: path.to_path_buf(),
        operation: "write layout stream",
        source: e,
    })
}

#[derive(Default)]
struct StreamWriter {
    bytes: Vec<u8>,
}

impl StreamWriter {
    fn record(&mut self, kind: u16, payload: &[u8]) -> Result<()> {
        let length = u16::try_from(payload.len() + 4)
            .map_err(|e| computation_error("encode stream record", &e))?;
        self.bytes.extend_from_slice(&length.to_be_bytes());
        self.bytes.extend_from_slice(&kind.to_be_bytes());
        self.bytes.extend_from_slice(payload);
        Ok(())
    }

    fn empty(&mut self, kind: u16) -> Result<()> {
        self.record(kind, &[])
    }

    fn int16s(&mut self, kind: u16, values: &[i16]) -> Result<()> {
        let payload: Vec<u8> = values.iter().flat_map(|v| v.to_be_bytes()).collect();
        self.record(kind, &payload)
    }

    fn int32s(&mut self, kind: u16, values: &[i32]) -> Result<()> {
        let payload: Vec<u8> = values.iter().flat_map(|v| v.to_be_bytes()).collect();
        self.record(kind, &payload)
    }

    fn reals(&mut self, kind: u16, values: &[f64]) -> Result<()> {
        let payload: Vec<u8> = values.iter().flat_map(|&v| gds_real(v)).collect();
        self.record(kind, &payload)
    }

    fn string(&mut self, kind: u16, text: &str) -> Result<()> {
        let mut payload = text.as_bytes().to_vec();
        if !payload.len().is_multiple_of(2) {
            payload.push(0);
        }
        self.record(kind, &payload)
    }

    fn boundary(&mut self, ring: &[Point], tag: LayerTag) -> Result<()> {
        self.empty(BOUNDARY)?;
        self.int16s(LAYER, &[layer_number("layer", tag.layer)?])?;
        self.int16s(DATATYPE, &[layer_number("datatype", tag.datatype)?])?;

        let mut xy = Vec::with_capacity(2 * (ring.len() + 1));
        for point in ring.iter().chain(ring.first()) {
            xy.push(database_units(point.x)?);
            xy.push(database_units(point.y)?);
        }
        self.int32s(XY, &xy)?;

        self.empty(ENDEL)
    }
}

fn layer_number(field: &'static str, value: u16) -> Result<i16> {
    i16::try_from(value).map_err(|e| computation_error(field, &e))
}

fn database_units(micron: f64) -> Result<i32> {
    let scaled = (micron * GDS_DATABASE_UNITS_PER_MICRON).round();
    if scaled.is_finite() && scaled.abs() <= f64::from(i32::MAX) {
        Ok(scaled as i32)
    } else {
        Err(computation_error(
            "convert to database units",
            &format!("{micron} um does not fit a 32-bit coordinate"),
        ))
    }
}
