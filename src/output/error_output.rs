//! Colored stderr reporting for errors that end a run.
//!
//! Format: `✖ <type>: <message>` / `  × <cause>` / `  help: <suggestion>`

use std::error::Error as _;
use std::io::Write;

use crate::error::DarkGuardError;

use super::{ColorMode, ansi};

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_colors(mode.use_colors_on_stderr())
    }

    #[must_use]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn styled(&self, codes: &[&str], text: &str) -> String {
        if self.use_colors {
            format!("{}{text}{}", codes.concat(), ansi::RESET)
        } else {
            text.to_string()
        }
    }

    /// Print a crate error with its underlying cause and suggestion, if any.
    pub fn print_error(&self, err: &DarkGuardError) {
        self.write_crate_error(&mut std::io::stderr().lock(), err);
    }

    pub fn print_warning(&self, message: &str, suggestion: Option<&str>) {
        self.write_warning(&mut std::io::stderr().lock(), message, suggestion);
    }

    pub fn write_crate_error<W: Write>(&self, w: &mut W, err: &DarkGuardError) {
        let cause = err.source().map(ToString::to_string);
        self.write_error(
            w,
            err.error_type(),
            &err.to_string(),
            cause.as_deref(),
            err.suggestion(),
        );
    }

    // Write failures are dropped: stderr is the last place to report them.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let heading = self.styled(&[ansi::BOLD, ansi::RED], &format!("✖ {error_type}:"));
        let _ = writeln!(w, "{heading} {message}");
        if let Some(detail) = detail {
            let _ = writeln!(w, "  {}", self.styled(&[ansi::DIM], &format!("× {detail}")));
        }
        self.write_help(w, suggestion);
    }

    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str, suggestion: Option<&str>) {
        let heading = self.styled(&[ansi::BOLD, ansi::YELLOW], "⚠ Warning:");
        let _ = writeln!(w, "{heading} {message}");
        self.write_help(w, suggestion);
    }

    fn write_help<W: Write>(&self, w: &mut W, suggestion: Option<&str>) {
        if let Some(suggestion) = suggestion {
            let _ = writeln!(w, "  {} {suggestion}", self.styled(&[ansi::CYAN], "help:"));
        }
    }
}

/// Prints a crate error using the given color mode.
pub fn print_error(err: &DarkGuardError, mode: ColorMode) {
    ErrorOutput::new(mode).print_error(err);
}

/// Prints a warning using the given color mode.
pub fn print_warning(message: &str, suggestion: Option<&str>, mode: ColorMode) {
    ErrorOutput::new(mode).print_warning(message, suggestion);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
