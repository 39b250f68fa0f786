//! Stage-by-stage progress display for a generation run

use crate::algorithm::pipeline::Stage;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Progress bar advancing once per pipeline stage and once for the outputs
pub struct StageProgress {
    bar: ProgressBar,
}

impl Default for StageProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl StageProgress {
    /// Visible bar drawn to stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new(Self::total_steps());
        bar.set_style(STAGE_STYLE.clone());
        Self { bar }
    }

    /// Bar that tracks state but draws nothing
    pub fn hidden() -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(Self::total_steps());
        Self { bar }
    }

    /// Show `stage` as running
    pub fn start_stage(&self, stage: Stage) {
        self.bar.set_position(stage.index() as u64);
        self.bar.set_message(stage.label());
    }

    /// Show the output files as being written
    pub fn start_writing(&self) {
        self.bar.set_position(Stage::ALL.len() as u64);
        self.bar.set_message("writing outputs");
    }

    /// Number of completed steps
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Complete the bar and remove it from the terminal
    pub fn finish(&self) {
        self.bar.set_position(Self::total_steps());
        self.bar.finish_and_clear();
    }

    const fn total_steps() -> u64 {
        Stage::ALL.len() as u64 + 1
    }
}
