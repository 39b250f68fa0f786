//! Command-line interface generating a pattern and writing its outputs

use crate::algorithm::pipeline::{Pattern, PatternConfig, generate_observed};
use crate::io::configuration::{
    DEFAULT_CELL_NAME, DEFAULT_HEIGHT, DEFAULT_MIN_FEATURE_SPACING, DEFAULT_MIN_FEATURE_WIDTH,
    DEFAULT_SEED, DEFAULT_SEED_COUNT, DEFAULT_SKEW_EXPONENT, DEFAULT_WIDTH, GDS_EXTENSION,
    LEF_EXTENSION, PREVIEW_EXTENSION, PREVIEW_METAL_COLOR, PREVIEW_PIXELS_PER_UNIT,
};
use crate::io::error::Result;
use crate::io::gds::write_gds;
use crate::io::image::export_preview_png;
use crate::io::lef::write_lef;
use crate::io::progress::StageProgress;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "metaltile")]
#[command(
    author,
    version,
    about = "Generate a Voronoi-style border tiling for a metal layer"
)]
/// Command-line arguments for the pattern generation tool
pub struct Cli {
    /// Directory receiving the generated files
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Cell name used for file names, the layout structure and the block descriptor
    #[arg(short, long, default_value = DEFAULT_CELL_NAME)]
    pub name: String,

    /// Width of the pattern in microns
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: f64,

    /// Height of the pattern in microns
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: f64,

    /// Minimum metal line width in microns
    #[arg(long, default_value_t = DEFAULT_MIN_FEATURE_WIDTH)]
    pub min_width: f64,

    /// Minimum metal spacing in microns
    #[arg(long, default_value_t = DEFAULT_MIN_FEATURE_SPACING)]
    pub min_spacing: f64,

    /// Number of Voronoi seeds
    #[arg(short = 'c', long = "seeds", default_value_t = DEFAULT_SEED_COUNT)]
    pub seed_count: usize,

    /// Bias exponent pushing seeds towards the left edge (1 is uniform)
    #[arg(short = 'k', long, default_value_t = DEFAULT_SKEW_EXPONENT)]
    pub skew: f64,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Skip writing the PNG preview
    #[arg(long)]
    pub no_preview: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Pattern parameters collected from the arguments
    pub const fn pattern_config(&self) -> PatternConfig {
        PatternConfig {
            width: self.width,
            height: self.height,
            min_feature_width: self.min_width,
            min_feature_spacing: self.min_spacing,
            target_seed_count: self.seed_count,
            skew_exponent: self.skew,
            random_seed: self.seed,
        }
    }

    /// Check if the preview should be written
    pub const fn should_write_preview(&self) -> bool {
        !self.no_preview
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Files written by one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    /// Layout stream path
    pub gds: PathBuf,
    /// Block descriptor path
    pub lef: PathBuf,
    /// Preview image path, if written
    pub preview: Option<PathBuf>,
}

/// Orchestrates generation and output writing
pub struct PatternWriter {
    cli: Cli,
}

impl PatternWriter {
    /// Create a writer for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate the pattern and write every requested output
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, generation fails, or
    /// an output file cannot be written
    pub fn process(&self) -> Result<WrittenFiles> {
        let start_time = Instant::now();
        let progress = if self.cli.should_show_progress() {
            StageProgress::new()
        } else {
            StageProgress::hidden()
        };

        let outcome = generate_observed(&self.cli.pattern_config(), |stage| {
            progress.start_stage(stage);
        })
        .and_then(|pattern| {
            progress.start_writing();
            let written = self.write_outputs(&pattern)?;
            Ok((pattern, written))
        });
        progress.finish();
        let (pattern, written) = outcome?;

        if self.cli.should_show_progress() {
            self.report(&pattern, &written, start_time);
        }

        Ok(written)
    }

    /// Write the layout stream, the block descriptor and the optional preview
    /// for `pattern`
    ///
    /// # Errors
    ///
    /// Returns an error if an output file cannot be written
    pub fn write_outputs(&self, pattern: &Pattern) -> Result<WrittenFiles> {
        let gds = self.output_path(GDS_EXTENSION);
        write_gds(&gds, &pattern.regions, &self.cli.name)?;

        let lef = self.output_path(LEF_EXTENSION);
        write_lef(&lef, &self.cli.name, pattern.config.width, pattern.config.height)?;

        let preview = if self.cli.should_write_preview() {
            let path = self.output_path(PREVIEW_EXTENSION);
            export_preview_png(
                &pattern.regions,
                PREVIEW_PIXELS_PER_UNIT,
                PREVIEW_METAL_COLOR,
                &path,
            )?;
            Some(path)
        } else {
            None
        };

        Ok(WrittenFiles { gds, lef, preview })
    }

    /// Output file path for the given extension
    pub fn output_path(&self, extension: &str) -> PathBuf {
        Self::file_path(&self.cli.output_dir, &self.cli.name, extension)
    }

    fn file_path(dir: &Path, name: &str, extension: &str) -> PathBuf {
        dir.join(format!("{name}.{extension}"))
    }

    // Allow print for user feedback on the finished run
    #[allow(clippy::print_stderr)]
    fn report(&self, pattern: &Pattern, written: &WrittenFiles, start_time: Instant) {
        let stats = pattern.stats();
        let (columns, rows) = stats.grid_dimensions;

        eprintln!(
            "Generated '{}': {} seeds, {columns}x{rows} tiles, {} segments -> {} polygons ({:.2} um^2 metal) in {:.1?}",
            self.cli.name,
            stats.seed_count,
            stats.segment_count,
            stats.polygon_count,
            stats.metal_area,
            start_time.elapsed()
        );
        if stats.relaxed_seeds > 0 {
            eprintln!(
                "Warning: {} of {} seeds were placed without the spacing check (area too dense)",
                stats.relaxed_seeds, stats.seed_count
            );
        }
        eprintln!("Wrote: {}", written.gds.display());
        eprintln!("Wrote: {}", written.lef.display());
        if let Some(preview) = &written.preview {
            eprintln!("Wrote: {}", preview.display());
        }
    }
}
