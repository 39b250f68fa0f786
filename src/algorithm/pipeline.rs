//! End-to-end pattern generation
//!
//! Stages run strictly in order, each consuming the previous stage's
//! immutable output: seeds are sampled, both axes are partitioned into a tile
//! grid whose tiles take their nearest seed, tile boundaries between
//! different seeds become border segments, and the segments are merged with
//! the outer frame into the final region set.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::compositor::{RegionSet, compose};
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_MIN_FEATURE_SPACING, DEFAULT_MIN_FEATURE_WIDTH, DEFAULT_SEED,
    DEFAULT_SEED_COUNT, DEFAULT_SKEW_EXPONENT, DEFAULT_WIDTH,
};
use crate::io::error::{Result, invalid_parameter, require_positive};
use crate::sampling::seeds::{SeedSampler, SeedSet};
use crate::spatial::borders::{BorderSegment, extract_borders, line_width};
use crate::spatial::grid::TileGrid;
use crate::spatial::partition::AxisPartition;

/// Pattern parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatternConfig {
    /// Width of the bounding rectangle
    pub width: f64,
    /// Height of the bounding rectangle
    pub height: f64,
    /// Minimum manufacturable line width
    pub min_feature_width: f64,
    /// Minimum manufacturable spacing between shapes
    pub min_feature_spacing: f64,
    /// Number of seeds to place
    pub target_seed_count: usize,
    /// Bias exponent for seed x positions (1 is uniform)
    pub skew_exponent: f64,
    /// Random generator seed
    pub random_seed: u64,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            min_feature_width: DEFAULT_MIN_FEATURE_WIDTH,
            min_feature_spacing: DEFAULT_MIN_FEATURE_SPACING,
            target_seed_count: DEFAULT_SEED_COUNT,
            skew_exponent: DEFAULT_SKEW_EXPONENT,
            random_seed: DEFAULT_SEED,
        }
    }
}

impl PatternConfig {
    /// Width of every border line and of the frame ring
    pub const fn line_width(&self) -> f64 {
        line_width(self.min_feature_width)
    }

    /// Distance kept between seeds and the rectangle edges
    pub const fn margin(&self) -> f64 {
        self.min_feature_width
    }

    /// Preferred tile edge length
    pub const fn tile_size(&self) -> f64 {
        self.min_feature_width.max(self.min_feature_spacing) * 2.0
    }

    /// Check every parameter before any geometry is produced
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - a dimension or feature size is not a positive finite number
    /// - `target_seed_count` is zero
    /// - `skew_exponent` is below 1 or not finite
    /// - the sampling margin or the frame ring does not fit the rectangle
    pub fn validate(&self) -> Result<()> {
        require_positive("width", self.width)?;
        require_positive("height", self.height)?;
        require_positive("min_feature_width", self.min_feature_width)?;
        require_positive("min_feature_spacing", self.min_feature_spacing)?;

        if self.target_seed_count == 0 {
            return Err(invalid_parameter(
                "target_seed_count",
                &self.target_seed_count,
                &"must be at least 1",
            ));
        }
        if !self.skew_exponent.is_finite() || self.skew_exponent < 1.0 {
            return Err(invalid_parameter(
                "skew_exponent",
                &self.skew_exponent,
                &"must be a finite number of at least 1",
            ));
        }

        let short_side = self.width.min(self.height);
        if 2.0 * self.line_width() >= short_side {
            return Err(invalid_parameter(
                "min_feature_width",
                &self.min_feature_width,
                &format!(
                    "line width {} leaves no interior in {} x {}",
                    self.line_width(),
                    self.width,
                    self.height
                ),
            ));
        }

        Ok(())
    }
}

/// Pipeline stage, reported to observers before it runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Seed sampling
    Sampling,
    /// Axis partitioning and nearest-seed tile assignment
    Partitioning,
    /// Border segment extraction
    Borders,
    /// Union of the segments with the frame ring
    Merging,
}

impl Stage {
    /// Every stage in execution order
    pub const ALL: [Self; 4] = [Self::Sampling, Self::Partitioning, Self::Borders, Self::Merging];

    /// Position of the stage in execution order
    pub const fn index(self) -> usize {
        match self {
            Self::Sampling => 0,
            Self::Partitioning => 1,
            Self::Borders => 2,
            Self::Merging => 3,
        }
    }

    /// Short human-readable name
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sampling => "sampling seeds",
            Self::Partitioning => "assigning tiles",
            Self::Borders => "extracting borders",
            Self::Merging => "merging regions",
        }
    }
}

/// Summary figures of a generated pattern
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatternStats {
    /// Number of seeds placed
    pub seed_count: usize,
    /// Seeds placed without the minimum-distance check
    pub relaxed_seeds: usize,
    /// Tile grid size as (columns, rows)
    pub grid_dimensions: (usize, usize),
    /// Border segments before merging
    pub segment_count: usize,
    /// Polygons in the final region set
    pub polygon_count: usize,
    /// Area covered by metal
    pub metal_area: f64,
}

/// Every stage's output for one generation run
#[derive(Debug, Clone)]
pub struct Pattern {
    /// Parameters the pattern was built from
    pub config: PatternConfig,
    /// Sampled seeds
    pub seeds: SeedSet,
    /// Tile grid with nearest-seed assignments
    pub grid: TileGrid,
    /// Border segments before merging
    pub segments: Vec<BorderSegment>,
    /// Final merged geometry
    pub regions: RegionSet,
}

impl Pattern {
    /// Summary figures for reporting
    pub fn stats(&self) -> PatternStats {
        PatternStats {
            seed_count: self.seeds.len(),
            relaxed_seeds: self.seeds.relaxed_count(),
            grid_dimensions: self.grid.dimensions(),
            segment_count: self.segments.len(),
            polygon_count: self.regions.len(),
            metal_area: self.regions.area(),
        }
    }
}

/// Generate a pattern using a generator seeded from `config.random_seed`
///
/// # Errors
///
/// Returns `InvalidParameter` if the configuration is invalid and
/// `Computation` if the boolean engine fails
pub fn generate(config: &PatternConfig) -> Result<Pattern> {
    generate_observed(config, |_| {})
}

/// Generate a seeded pattern, calling `on_stage` before each stage starts
///
/// # Errors
///
/// Returns `InvalidParameter` if the configuration is invalid and
/// `Computation` if the boolean engine fails
pub fn generate_observed(
    config: &PatternConfig,
    mut on_stage: impl FnMut(Stage),
) -> Result<Pattern> {
    let mut rng = StdRng::seed_from_u64(config.random_seed);
    run_stages(config, &mut rng, &mut on_stage)
}

/// Generate a pattern drawing randomness from `rng`
///
/// `config.random_seed` is ignored; the caller owns the generator state.
///
/// # Errors
///
/// Returns `InvalidParameter` if the configuration is invalid and
/// `Computation` if the boolean engine fails
pub fn generate_with_rng<R: Rng + ?Sized>(config: &PatternConfig, rng: &mut R) -> Result<Pattern> {
    run_stages(config, rng, &mut |_| {})
}

fn run_stages<R: Rng + ?Sized>(
    config: &PatternConfig,
    rng: &mut R,
    on_stage: &mut dyn FnMut(Stage),
) -> Result<Pattern> {
    config.validate()?;

    on_stage(Stage::Sampling);
    let sampler = SeedSampler::new(
        config.width,
        config.height,
        config.margin(),
        config.min_feature_spacing,
        config.skew_exponent,
    )?;
    let seeds = sampler.sample(config.target_seed_count, rng)?;

    on_stage(Stage::Partitioning);
    let x_partition =
        AxisPartition::new(config.width, config.tile_size(), config.min_feature_width)?;
    let y_partition =
        AxisPartition::new(config.height, config.tile_size(), config.min_feature_width)?;
    let grid = TileGrid::build(x_partition, y_partition, seeds.seeds())?;

    on_stage(Stage::Borders);
    let line_width = config.line_width();
    let segments = extract_borders(&grid, line_width);

    on_stage(Stage::Merging);
    let regions = compose(&segments, config.width, config.height, line_width)?;

    Ok(Pattern {
        config: *config,
        seeds,
        grid,
        segments,
        regions,
    })
}
