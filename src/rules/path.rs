use std::collections::HashMap;
use std::path::Path;

use crate::scanner::EntryInfo;

use super::{Rule, Violation};

/// Flags relative paths that only differ by case from one seen earlier in
/// the run, since the archive filesystem is case-insensitive.
///
/// Paths are compared byte-exact: undecodable bytes are kept as they are and
/// only the valid UTF-8 runs between them are uppercased.
#[derive(Debug, Default, Clone)]
pub struct NoDupedNames {
    seen: HashMap<Vec<u8>, String>,
}

impl NoDupedNames {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Rule for NoDupedNames {
    fn check(&mut self, path: &str, entry: &EntryInfo) -> Result<(), Violation> {
        let key = entry
            .relative_path()
            .map_or_else(|| path.to_uppercase().into_bytes(), uppercase_key);
        if let Some(original) = self.seen.get(&key) {
            return Err(Violation::new(format!("is a duplicate of {original:?}")));
        }
        self.seen.insert(key, path.to_string());
        Ok(())
    }
}

fn uppercase_key(path: &Path) -> Vec<u8> {
    let mut key = Vec::new();
    for chunk in path.as_os_str().as_encoded_bytes().utf8_chunks() {
        key.extend_from_slice(chunk.valid().to_uppercase().as_bytes());
        key.extend_from_slice(chunk.invalid());
    }
    key
}

/// Maximum length, in bytes, of an entry's path relative to the root.
#[derive(Debug, Clone, Copy)]
pub struct PathLimit {
    max: usize,
}

impl PathLimit {
    #[must_use]
    pub const fn new(max: usize) -> Self {
        Self { max }
    }

    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }
}

impl Rule for PathLimit {
    fn check(&mut self, path: &str, _entry: &EntryInfo) -> Result<(), Violation> {
        if path.len() > self.max {
            return Err(Violation::new(format!(
                "exceeds the maximum path length of {} characters",
                self.max
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
