//! Progress display for the rendering pass
//!
//! Block painting dominates render time, so the bar tracks blocks and
//! the line pass rides on the final tick.

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BLOCK_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display for one rendering run
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a manager; a disabled manager renders nothing
    pub fn new(enabled: bool) -> Self {
        Self {
            bar: enabled.then(ProgressBar::no_length),
        }
    }

    /// Start the block-painting phase
    pub fn start_blocks(&self, total: usize) {
        if let Some(bar) = &self.bar {
            bar.set_style(BLOCK_STYLE.clone());
            bar.set_length(total as u64);
            bar.set_message("Painting blocks");
        }
    }

    /// Report one painted block
    pub fn block_done(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// Switch the message to the line-drawing phase
    pub fn start_lines(&self, total: usize) {
        if let Some(bar) = &self.bar {
            bar.set_message(format!("Drawing {total} lines"));
        }
    }

    /// Clear the display
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
