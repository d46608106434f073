use std::borrow::Cow;
use std::collections::HashMap;

use crate::error::Result;

use super::{AuditReport, OutputFormatter};

/// Tab-separated report: one column per registered rule, one row per failing
/// entry, each failure message in its rule's column.
#[derive(Debug, Default, Clone, Copy)]
pub struct TsvFormatter;

impl OutputFormatter for TsvFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        let columns: HashMap<&str, usize> = report
            .columns()
            .iter()
            .enumerate()
            .map(|(i, rule)| (rule.name(), i + 1))
            .collect();

        let mut header = Vec::with_capacity(report.columns().len() + 1);
        header.push("Filename");
        header.extend(report.columns().iter().map(|rule| rule.name()));

        let mut output = header.join("\t");
        output.push('\n');

        for file in report.files() {
            let mut row = vec![Cow::Borrowed(""); header.len()];
            row[0] = escape_field(&file.path);
            for failure in &file.failures {
                if let Some(&column) = columns.get(failure.rule_name()) {
                    row[column] = escape_field(failure.message());
                }
            }
            output.push_str(&row.join("\t"));
            output.push('\n');
        }

        Ok(output)
    }
}

/// Backslash-escape the characters that would break the row layout.
fn escape_field(field: &str) -> Cow<'_, str> {
    if !field.contains(['\\', '\t', '\n', '\r']) {
        return Cow::Borrowed(field);
    }
    let mut escaped = String::with_capacity(field.len() + 4);
    for c in field.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
#[path = "tsv_tests.rs"]
mod tests;
