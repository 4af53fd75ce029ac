//! Batch progress display
//!
//! One bar tracks the whole batch; the message shows the seed currently
//! being generated so long runs stay observable.

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Dungeons: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display for batch generation
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no active bar
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Initialize the batch bar for the given dungeon count
    pub fn initialize(&mut self, count: u64) {
        let bar = ProgressBar::new(count);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Record that generation for a seed has started
    pub fn start_dungeon(&self, seed: u64) {
        if let Some(bar) = &self.bar {
            bar.set_message(format!("seed {seed}"));
        }
    }

    /// Record that one dungeon finished
    pub fn complete_dungeon(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// Finish and clear the batch bar
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_with_message("done");
        }
    }
}
