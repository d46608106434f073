mod error_output;
mod json;
mod manifest;
mod progress;
mod text;
mod tsv;

pub use error_output::{ErrorOutput, print_error, print_warning};
pub use json::JsonFormatter;
pub use manifest::write_manifest;
pub use progress::ScanProgress;
pub use text::TextFormatter;
pub use tsv::TsvFormatter;

use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rules::{Failure, RuleSpec};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Colors when the stream is a TTY and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Whether to emit ANSI codes on a stream with the given TTY status.
    #[must_use]
    pub fn use_colors(self, is_tty: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            // https://no-color.org: presence of the variable disables color
            Self::Auto => std::env::var_os("NO_COLOR").is_none() && is_tty,
        }
    }

    #[must_use]
    pub fn use_colors_on_stdout(self) -> bool {
        self.use_colors(std::io::stdout().is_terminal())
    }

    #[must_use]
    pub fn use_colors_on_stderr(self) -> bool {
        self.use_colors(std::io::stderr().is_terminal())
    }
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Trait for rendering an audit into one of the report formats.
pub trait OutputFormatter {
    /// Format the audit report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &AuditReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Tsv,
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tsv" => Ok(Self::Tsv),
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Every failure the engine reported for one entry, in chain order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailures {
    pub path: String,
    pub failures: Vec<Failure>,
}

/// Everything a report writer needs from one audit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    rules: Vec<RuleSpec>,
    columns: Vec<RuleSpec>,
    files: Vec<FileFailures>,
    entries: usize,
}

impl AuditReport {
    /// `rules` are the rules that ran, in chain order. They double as the
    /// report columns until [`Self::with_columns`] says otherwise.
    #[must_use]
    pub fn new(rules: Vec<RuleSpec>) -> Self {
        Self {
            columns: rules.clone(),
            rules,
            files: Vec::new(),
            entries: 0,
        }
    }

    /// Fix the column set, normally every registered rule, so tabular
    /// reports keep the same shape whatever was skipped.
    #[must_use]
    pub fn with_columns(mut self, columns: Vec<RuleSpec>) -> Self {
        self.columns = columns;
        self
    }

    /// Append one failing entry; call in the order the engine reports them.
    pub fn record(&mut self, path: &str, failures: Vec<Failure>) {
        self.files.push(FileFailures {
            path: path.to_string(),
            failures,
        });
    }

    /// Total entries judged, failing or not.
    pub const fn set_entries(&mut self, entries: usize) {
        self.entries = entries;
    }

    #[must_use]
    pub fn rules(&self) -> &[RuleSpec] {
        &self.rules
    }

    #[must_use]
    pub fn columns(&self) -> &[RuleSpec] {
        &self.columns
    }

    #[must_use]
    pub fn files(&self) -> &[FileFailures] {
        &self.files
    }

    #[must_use]
    pub const fn entries(&self) -> usize {
        self.entries
    }

    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.files.iter().map(|f| f.failures.len()).sum()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.files.is_empty()
    }
}

/// Pick the formatter for `format`.
#[must_use]
pub fn formatter_for(format: OutputFormat, color_mode: ColorMode) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Tsv => Box::new(TsvFormatter),
        OutputFormat::Text => Box::new(TextFormatter::new(color_mode)),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
