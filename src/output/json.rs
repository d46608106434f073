use serde::Serialize;

use crate::error::Result;
use crate::rules::Criticality;

use super::{AuditReport, OutputFormatter};

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    rules: Vec<JsonRule<'a>>,
    results: Vec<JsonResult<'a>>,
}

#[derive(Serialize)]
struct Summary {
    entries: usize,
    failed_entries: usize,
    failures: usize,
}

#[derive(Serialize)]
struct JsonRule<'a> {
    name: &'a str,
    criticality: Criticality,
    priority: i8,
}

#[derive(Serialize)]
struct JsonResult<'a> {
    path: &'a str,
    failures: Vec<JsonFailure<'a>>,
}

#[derive(Serialize)]
struct JsonFailure<'a> {
    rule: &'a str,
    criticality: Criticality,
    message: &'a str,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                entries: report.entries(),
                failed_entries: report.files().len(),
                failures: report.failure_count(),
            },
            rules: report
                .rules()
                .iter()
                .map(|rule| JsonRule {
                    name: rule.name(),
                    criticality: rule.criticality(),
                    priority: rule.priority(),
                })
                .collect(),
            results: report
                .files()
                .iter()
                .map(|file| JsonResult {
                    path: &file.path,
                    failures: file
                        .failures
                        .iter()
                        .map(|failure| JsonFailure {
                            rule: failure.rule_name(),
                            criticality: failure.rule.criticality(),
                            message: failure.message(),
                        })
                        .collect(),
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
