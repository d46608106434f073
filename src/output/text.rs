use std::fmt::Write;

use crate::error::Result;

use super::{AuditReport, ColorMode, OutputFormatter, ansi};

/// Human-readable report grouped by entry.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors_on_stdout(),
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        let mut output = String::new();

        for file in report.files() {
            let _ = writeln!(output, "{} {}", self.paint(ansi::RED, "✗"), file.path);
            for failure in &file.failures {
                let _ = writeln!(
                    output,
                    "  {} ({}): {}",
                    self.paint(ansi::CYAN, failure.rule_name()),
                    failure.rule.criticality(),
                    failure.message()
                );
            }
        }

        if !report.files().is_empty() {
            output.push('\n');
        }

        let summary = format!(
            "Summary: {} entries checked, {} with failures, {} failures total",
            report.entries(),
            report.files().len(),
            report.failure_count()
        );
        let color = if report.has_failures() {
            ansi::YELLOW
        } else {
            ansi::GREEN
        };
        let _ = writeln!(output, "{}", self.paint(color, &summary));

        Ok(output)
    }
}

#[cfg(test)]
impl TextFormatter {
    pub(crate) const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
