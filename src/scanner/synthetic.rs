use std::io;
use std::path::{Path, PathBuf};

use crate::error::{DarkGuardError, Result};

use super::{EntryInfo, TreeTraverser, VisitFn};

#[derive(Debug, Clone)]
enum SyntheticEntry {
    Info(EntryInfo),
    Broken(io::ErrorKind, String),
}

/// A fixed, fabricated tree that replays its entries in insertion order.
///
/// Nothing is read from disk, so any absolute root is accepted. The root
/// itself is visited first, as a real walk would.
#[derive(Debug, Clone, Default)]
pub struct SyntheticTree {
    entries: Vec<(PathBuf, SyntheticEntry)>,
}

impl SyntheticTree {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add `info` inside `dir` (relative to the root; `""` for the root itself).
    #[must_use]
    pub fn with_entry(mut self, dir: &str, info: EntryInfo) -> Self {
        let path = Path::new(dir).join(info.name());
        self.entries.push((path, SyntheticEntry::Info(info)));
        self
    }

    #[must_use]
    pub fn with_file(self, dir: &str, name: &str, size: u64) -> Self {
        self.with_entry(dir, EntryInfo::file(name, size))
    }

    #[must_use]
    pub fn with_dir(self, dir: &str, name: &str) -> Self {
        self.with_entry(dir, EntryInfo::dir(name))
    }

    /// Add an entry whose metadata cannot be read.
    #[must_use]
    pub fn with_broken(mut self, relative_path: &str, message: &str) -> Self {
        self.entries.push((
            PathBuf::from(relative_path),
            SyntheticEntry::Broken(io::ErrorKind::PermissionDenied, message.to_string()),
        ));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TreeTraverser for SyntheticTree {
    fn resolve_root(&self, root: &Path) -> Result<PathBuf> {
        std::path::absolute(root).map_err(|source| DarkGuardError::InvalidRoot {
            path: root.to_path_buf(),
            source,
        })
    }

    fn traverse(&self, root: &Path, visit: &mut VisitFn<'_>) {
        let root_name = root
            .file_name()
            .map_or_else(String::new, |n| n.to_string_lossy().into_owned());
        visit(root, Ok(EntryInfo::dir(root_name)));

        for (relative, entry) in &self.entries {
            let path = root.join(relative);
            match entry {
                SyntheticEntry::Info(info) => visit(&path, Ok(info.clone())),
                SyntheticEntry::Broken(kind, message) => {
                    visit(&path, Err(io::Error::new(*kind, message.clone())));
                }
            }
        }
    }
}
