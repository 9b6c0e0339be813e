//! Stage progress bars for the mosaic pipeline

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{prefix:>10}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Hands out one progress bar per pipeline stage
///
/// When disabled every bar is hidden, so callers can tick unconditionally.
pub struct ProgressManager {
    multi_progress: Option<MultiProgress>,
}

impl ProgressManager {
    /// Create a manager that renders bars only when `enabled`
    pub fn new(enabled: bool) -> Self {
        Self {
            multi_progress: enabled.then(MultiProgress::new),
        }
    }

    /// Create a manager whose bars are never drawn
    pub const fn hidden() -> Self {
        Self {
            multi_progress: None,
        }
    }

    /// Whether bars are drawn
    pub const fn is_enabled(&self) -> bool {
        self.multi_progress.is_some()
    }

    /// Start a bar for a stage of `length` units
    pub fn stage(&self, name: &'static str, length: usize) -> ProgressBar {
        match &self.multi_progress {
            Some(multi) => {
                let bar = multi.add(ProgressBar::new(length as u64));
                bar.set_style(STAGE_STYLE.clone());
                bar.set_prefix(name);
                bar
            }
            None => ProgressBar::hidden(),
        }
    }

    /// Clear all bars from the terminal
    pub fn finish(&self) {
        if let Some(multi) = &self.multi_progress {
            let _ = multi.clear();
        }
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::hidden()
    }
}
