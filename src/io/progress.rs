//! Per-rectangle progress tracking while seeds are searched

use crate::board::rectangle::RectangleSize;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SEED_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>6}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} seeds {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates one progress bar per rectangle size
///
/// Bars advance as seeds finish, so they can be shared with the rayon pool.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    bars: Vec<(RectangleSize, ProgressBar)>,
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

    /// Add a bar for a rectangle with the given number of seeds
    pub fn add_rectangle(&mut self, size: RectangleSize, seeds: usize) {
        let bar = ProgressBar::new(seeds as u64);
        bar.set_style(SEED_STYLE.clone());
        bar.set_prefix(size.to_string());
        self.bars.push((size, self.multi_progress.add(bar)));
    }

    /// Record a finished seed and the running solution total
    pub fn seed_finished(&self, size: RectangleSize, solutions_so_far: usize) {
        if let Some(bar) = self.bar(size) {
            bar.inc(1);
            bar.set_message(format!("{solutions_so_far} solutions"));
        }
    }

    /// Mark a rectangle as completed
    pub fn complete_rectangle(&self, size: RectangleSize, solutions: usize, elapsed: Duration) {
        if let Some(bar) = self.bar(size) {
            bar.finish_with_message(format!(
                "✓ {solutions} solutions in {:.1}s",
                elapsed.as_secs_f64()
            ));
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        let _ = self.multi_progress.clear();
    }

    fn bar(&self, size: RectangleSize) -> Option<&ProgressBar> {
        self.bars
            .iter()
            .find(|(bar_size, _)| *bar_size == size)
            .map(|(_, bar)| bar)
    }
}
