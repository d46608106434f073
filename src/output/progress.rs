use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner counting entries as the tree is walked.
///
/// Hidden in quiet mode or when stderr is not a TTY, so piped reports stay
/// clean.
#[derive(Clone)]
pub struct ScanProgress {
    progress_bar: ProgressBar,
}

impl ScanProgress {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(quiet, is_tty)
    }

    fn new_with_visibility(quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_spinner()
        };
        Self { progress_bar }
    }

    fn create_visible_spinner() -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} Validating {pos} entries ({elapsed})")
                // SAFETY: Template is a static string with valid format specifiers
                .expect("valid template"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    pub fn inc(&self) {
        self.progress_bar.inc(1);
    }

    #[must_use]
    pub fn position(&self) -> u64 {
        self.progress_bar.position()
    }

    /// Finishes the spinner and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
