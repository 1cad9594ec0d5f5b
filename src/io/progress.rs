//! Progress display for fractal generation runs

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>10} [{bar:40.cyan/blue}] {pos}/{len} points")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates one progress bar per rendered variant
pub struct ProgressManager {
    multi_progress: MultiProgress,
    bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            bars: Vec::new(),
        }
    }

    /// Add a bar for a variant expected to produce `total` points
    ///
    /// Returns the index used to address the bar
    pub fn start_variant(&mut self, label: &str, total: usize) -> usize {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_prefix(label.to_string());
        self.bars.push(self.multi_progress.add(bar));
        self.bars.len() - 1
    }

    /// Report the number of points produced so far
    pub fn update(&self, index: usize, produced: usize) {
        if let Some(bar) = self.bars.get(index) {
            bar.set_position(produced as u64);
        }
    }

    /// Mark a variant as done, snapping the bar to the final point count
    pub fn complete_variant(&self, index: usize, produced: usize) {
        if let Some(bar) = self.bars.get(index) {
            bar.set_length(produced as u64);
            bar.set_position(produced as u64);
            bar.finish();
        }
    }

    /// Number of bars created so far
    pub const fn bar_count(&self) -> usize {
        self.bars.len()
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Err(e) = self.multi_progress.clear() {
            log::debug!("Failed to clear progress bars: {e}");
        }
    }
}
