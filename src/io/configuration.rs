//! Tuning constants and runtime configuration defaults

// Default pattern geometry, matching the reference logo macro
/// Default width of the bounding rectangle in microns
pub const DEFAULT_WIDTH: f64 = 104.0;
/// Default height of the bounding rectangle in microns
pub const DEFAULT_HEIGHT: f64 = 68.0;
/// Default minimum metal line width in microns
pub const DEFAULT_MIN_FEATURE_WIDTH: f64 = 1.7;
/// Default minimum metal spacing in microns
pub const DEFAULT_MIN_FEATURE_SPACING: f64 = 1.7;
/// Default number of Voronoi seeds
pub const DEFAULT_SEED_COUNT: usize = 32;
/// Default bias exponent concentrating seeds towards the low-x edge
pub const DEFAULT_SKEW_EXPONENT: f64 = 4.5;
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default cell name used by the writers
pub const DEFAULT_CELL_NAME: &str = "my_logo";

// Point where strict sampling gives up
/// Sampling attempts allowed per requested seed before relaxing
pub const SAMPLING_ATTEMPTS_PER_SEED: usize = 40;

/// Line width as a multiple of the minimum feature width
pub const LINE_WIDTH_FACTOR: f64 = 1.2;
/// Line width as an absolute pad over the minimum feature width
pub const LINE_WIDTH_PAD: f64 = 0.2;

/// Tolerance under which two coordinates are treated as coincident
pub const GEOMETRY_EPSILON: f64 = 1e-9;

// Layer/purpose pair shared by every border and frame polygon
/// Layout layer number of the generated metal
pub const BORDER_LAYER: u16 = 71;
/// Layout datatype (purpose) of the generated metal
pub const BORDER_DATATYPE: u16 = 20;

// Output settings
/// Preview resolution in pixels per micron
pub const PREVIEW_PIXELS_PER_UNIT: f64 = 8.0;
/// Fill colour of metal in the preview
pub const PREVIEW_METAL_COLOR: [u8; 4] = [196, 154, 62, 255];
/// Database units per micron declared in the block descriptor
pub const LEF_DATABASE_UNITS: u32 = 1000;
/// Block descriptor file extension
pub const LEF_EXTENSION: &str = "lef";
/// Preview file extension
pub const PREVIEW_EXTENSION: &str = "png";
/// Layout stream file extension
pub const GDS_EXTENSION: &str = "gds";

// Layout stream settings
/// Library name written to the stream header
pub const GDS_LIBRARY_NAME: &str = "library";
/// Database units per micron used for stream coordinates
pub const GDS_DATABASE_UNITS_PER_MICRON: f64 = 1000.0;
/// Size of one database unit in user units (microns)
pub const GDS_USER_UNITS_PER_DATABASE_UNIT: f64 = 1e-3;
/// Size of one database unit in meters
pub const GDS_DATABASE_UNIT_METERS: f64 = 1e-9;
/// Vertices allowed in one boundary record, excluding the closing vertex
pub const GDS_MAX_BOUNDARY_VERTICES: usize = 8190;

// Place-and-route boundary box at the cell origin
/// Layer number of the place-and-route boundary
pub const PR_BOUNDARY_LAYER: u16 = 235;
/// Datatype of the place-and-route boundary
pub const PR_BOUNDARY_DATATYPE: u16 = 4;
/// Edge length of the square place-and-route boundary in microns
pub const PR_BOUNDARY_SIZE: f64 = 4.0;
