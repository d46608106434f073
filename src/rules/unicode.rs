use crate::scanner::EntryInfo;

use super::{Rule, Violation};

/// Names are decoded lossily, so undecodable bytes arrive as this character.
const REPLACEMENT: char = char::REPLACEMENT_CHARACTER;

#[derive(Debug, Default, Clone, Copy)]
pub struct NoUtf8;

impl Rule for NoUtf8 {
    fn check(&mut self, _path: &str, entry: &EntryInfo) -> Result<(), Violation> {
        let multibyte: Vec<String> = entry
            .name()
            .chars()
            .filter(|c| *c != REPLACEMENT && c.len_utf8() > 1)
            .map(|c| format!("\"{c}\""))
            .collect();

        if multibyte.is_empty() {
            return Ok(());
        }
        Err(Violation::new(format!(
            "contains unicode characters ({})",
            multibyte.join(", ")
        )))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct InvalidUtf8;

impl Rule for InvalidUtf8 {
    fn check(&mut self, _path: &str, entry: &EntryInfo) -> Result<(), Violation> {
        if entry.name().contains(REPLACEMENT) {
            return Err(Violation::new("contains invalid unicode"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "unicode_tests.rs"]
mod tests;
