use crate::scanner::EntryInfo;

use super::naming::join_chars;
use super::{Rule, Violation};

const RESERVED_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Names Windows (and therefore the archive share) cannot store.
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidWindowsFilename;

impl ValidWindowsFilename {
    fn is_reserved(upper: &str) -> bool {
        RESERVED_NAMES.iter().any(|reserved| {
            upper == *reserved
                || upper
                    .strip_prefix(reserved)
                    .is_some_and(|rest| rest.starts_with('.'))
        })
    }
}

impl Rule for ValidWindowsFilename {
    fn check(&mut self, _path: &str, entry: &EntryInfo) -> Result<(), Violation> {
        let upper = entry.name().to_uppercase();

        let bad: Vec<char> = RESERVED_CHARS
            .iter()
            .copied()
            .filter(|c| upper.contains(*c))
            .collect();
        if !bad.is_empty() {
            return Err(Violation::new(format!(
                "contains invalid characters: {}",
                join_chars(&bad)
            )));
        }
        if Self::is_reserved(&upper) {
            return Err(Violation::new("uses a reserved file name"));
        }
        if upper.ends_with(' ') {
            return Err(Violation::new("has a trailing space"));
        }
        if upper.ends_with('.') {
            return Err(Violation::new("has a trailing period"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "windows_tests.rs"]
mod tests;
