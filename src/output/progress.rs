use std::io::IsTerminal;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for counting and fixture runs.
///
/// Disabled in quiet mode or when stderr is not a TTY.
#[derive(Clone)]
pub struct ScanProgress {
    progress_bar: ProgressBar,
    counter: Arc<AtomicU64>,
}

impl ScanProgress {
    /// Creates a progress bar labelled "Counting".
    ///
    /// The bar draws on stderr so stdout stays clean for reports.
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        Self::with_label(total, quiet, "Counting")
    }

    #[must_use]
    pub fn with_label(total: u64, quiet: bool, label: &str) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, quiet, is_tty, label)
    }

    fn new_with_visibility(total: u64, quiet: bool, is_tty: bool, label: &str) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_progress_bar(total, label)
        };

        Self {
            progress_bar,
            counter: Arc::new(AtomicU64::new(0)),
        }
    }

    fn create_visible_progress_bar(total: u64, label: &str) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} {prefix} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)",
                )
                // SAFETY: Template is a static string with valid format specifiers
                .expect("valid template")
                .progress_chars("█▓░"),
        );
        pb.set_prefix(label.to_string());
        pb
    }

    /// Increments the progress counter by 1.
    ///
    /// Thread-safe for use with rayon parallel iterators.
    pub fn inc(&self) {
        let count = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        self.progress_bar.set_position(count);
    }

    #[must_use]
    pub fn position(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }

    /// Finishes the progress bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
