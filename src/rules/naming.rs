use regex::Regex;

use crate::scanner::EntryInfo;

use super::{Rule, Violation};

const DSC_INVALID_CHARS: &[char] = &[
    '&', ',', '*', '%', '#', ';', '(', ')', '!', '@', '$', '^', '~', '\'', '{', '}', '[', ']',
    '\\', '?', '<', '>',
];

const EXTRANEOUS_NAMES: &[&str] = &[".DS_STORE", "THUMBS.DB", "DESKTOP.INI"];

const FILENAME_PATTERN: &str = r"\A[A-Za-z][A-Za-z0-9_-]*\.[A-Za-z0-9_-]+\z";
const DIRNAME_PATTERN: &str = r"\A[A-Za-z][A-Za-z0-9_-]*(\.[A-Za-z0-9_-]+)?\z";

/// Space-separated list of the characters in `chars`, in table order.
pub(super) fn join_chars(chars: &[char]) -> String {
    chars
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoSpaces;

impl Rule for NoSpaces {
    fn check(&mut self, _path: &str, entry: &EntryInfo) -> Result<(), Violation> {
        let name = entry.name();
        if name.chars().last().is_some_and(char::is_whitespace) {
            return Err(Violation::new("ends with a space"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(Violation::new("has a space in the filename"));
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StartsWithAlpha;

impl Rule for StartsWithAlpha {
    fn check(&mut self, _path: &str, entry: &EntryInfo) -> Result<(), Violation> {
        match entry.name().chars().next() {
            Some(c) if c.is_ascii_alphabetic() => Ok(()),
            _ => Err(Violation::new("starts with a non-alphabetic character")),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HasOnlyOnePeriod;

impl Rule for HasOnlyOnePeriod {
    fn check(&mut self, _path: &str, entry: &EntryInfo) -> Result<(), Violation> {
        let periods = entry.name().matches('.').count();
        if periods > 1 {
            return Err(Violation::new(format!(
                "has {periods} periods (maximum is 1)"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoHiddenFiles;

impl Rule for NoHiddenFiles {
    fn check(&mut self, _path: &str, entry: &EntryInfo) -> Result<(), Violation> {
        if entry.name().starts_with('.') {
            return Err(Violation::new("is hidden (starts with a period)"));
        }
        Ok(())
    }
}

/// Regular files only.
#[derive(Debug, Default, Clone, Copy)]
pub struct HasExtension;

impl Rule for HasExtension {
    fn check(&mut self, _path: &str, entry: &EntryInfo) -> Result<(), Violation> {
        if !entry.is_regular() {
            return Ok(());
        }
        // Anything after the last period counts, so `.profile` has one.
        if entry.name().contains('.') {
            Ok(())
        } else {
            Err(Violation::new("doesn't have an extension"))
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoControlChars;

impl Rule for NoControlChars {
    fn check(&mut self, _path: &str, entry: &EntryInfo) -> Result<(), Violation> {
        if entry.name().chars().any(|c| c < ' ' || c == '\u{7f}') {
            return Err(Violation::new("contains one or more control characters"));
        }
        Ok(())
    }
}

/// Characters the DSC ingest tooling refuses in file names.
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidDscFilename;

impl Rule for ValidDscFilename {
    fn check(&mut self, _path: &str, entry: &EntryInfo) -> Result<(), Violation> {
        let name = entry.name();
        let bad: Vec<char> = DSC_INVALID_CHARS
            .iter()
            .copied()
            .filter(|c| name.contains(*c))
            .collect();
        if bad.is_empty() {
            return Ok(());
        }
        Err(Violation::new(format!(
            "contains invalid characters: {}",
            join_chars(&bad)
        )))
    }
}

/// OS metadata droppings: Finder, Explorer, and AppleDouble `._` files.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoExtraneousFiles;

impl Rule for NoExtraneousFiles {
    fn check(&mut self, _path: &str, entry: &EntryInfo) -> Result<(), Violation> {
        let upper = entry.name().to_uppercase();
        if EXTRANEOUS_NAMES.contains(&upper.as_str()) || upper.starts_with("._") {
            return Err(Violation::new(
                "is an extraneous file and should be deleted",
            ));
        }
        Ok(())
    }
}

/// Catch-all for names none of the narrower rules explained.
///
/// Files need `name.ext`, directories may omit the extension, and every
/// other kind of entry is left to `no-special-files`.
#[derive(Debug, Clone)]
pub struct RestrictiveNaming {
    filename: Regex,
    dirname: Regex,
}

impl RestrictiveNaming {
    #[must_use]
    #[allow(clippy::missing_panics_doc)]
    pub fn new() -> Self {
        // SAFETY: both patterns are compile-time constants covered by tests
        Self {
            filename: Regex::new(FILENAME_PATTERN).expect("valid filename pattern"),
            dirname: Regex::new(DIRNAME_PATTERN).expect("valid directory pattern"),
        }
    }
}

impl Default for RestrictiveNaming {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for RestrictiveNaming {
    fn check(&mut self, _path: &str, entry: &EntryInfo) -> Result<(), Violation> {
        let (pattern, kind) = if entry.is_dir() {
            (&self.dirname, "directory")
        } else if entry.is_regular() {
            (&self.filename, "filename")
        } else {
            return Ok(());
        };

        if pattern.is_match(entry.name()) {
            return Ok(());
        }
        Err(Violation::new(format!(
            "doesn't match required {kind} pattern"
        )))
    }
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
