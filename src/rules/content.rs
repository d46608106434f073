use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::checksum::{FileHasher, to_hex};
use crate::scanner::EntryInfo;

use super::{Rule, Violation};

/// Digest (lowercase hex) to every relative path seen with it, first path
/// first. Digests keep the order in which they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigestIndex {
    paths: IndexMap<String, Vec<String>>,
}

impl DigestIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `path` under `digest`, returning the original path when the
    /// digest was already known.
    pub fn record(&mut self, digest: String, path: &str) -> Option<String> {
        let paths = self.paths.entry(digest).or_default();
        let original = paths.first().cloned();
        paths.push(path.to_string());
        original
    }

    #[must_use]
    pub fn paths(&self, digest: &str) -> Option<&[String]> {
        self.paths.get(digest).map(Vec::as_slice)
    }

    /// `(digest, path)` for every recorded file, grouped by digest.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.paths
            .iter()
            .flat_map(|(digest, paths)| paths.iter().map(move |p| (digest.as_str(), p.as_str())))
    }

    /// Number of distinct digests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of recorded files whose content matched an earlier file.
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.paths.values().map(|p| p.len().saturating_sub(1)).sum()
    }
}

/// Handle for reading the index after the rule has been registered.
pub type SharedDigestIndex = Rc<RefCell<DigestIndex>>;

/// `no-duped-content`: reports regular files whose bytes match a file seen
/// earlier in traversal order.
///
/// Whichever file is hashed first is the original; later copies name it.
pub struct ContentDedup {
    root: PathBuf,
    hasher: Box<dyn FileHasher>,
    index: SharedDigestIndex,
}

impl ContentDedup {
    /// `root` must be the same absolute root the engine strips from paths.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, hasher: Box<dyn FileHasher>) -> Self {
        Self {
            root: root.into(),
            hasher,
            index: SharedDigestIndex::default(),
        }
    }

    #[must_use]
    pub fn index(&self) -> SharedDigestIndex {
        Rc::clone(&self.index)
    }
}

impl std::fmt::Debug for ContentDedup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentDedup")
            .field("root", &self.root)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl Rule for ContentDedup {
    fn check(&mut self, path: &str, entry: &EntryInfo) -> Result<(), Violation> {
        if !entry.is_regular() {
            return Ok(());
        }

        let file = entry
            .relative_path()
            .map_or_else(|| self.root.join(path), |relative| self.root.join(relative));
        let digest = self
            .hasher
            .hash_file(&file)
            .map_err(|err| Violation::new(format!("isn't able to be checksummed ({err})")))?;
        let digest = to_hex(&digest);

        tracing::trace!(target: "dark_guard::rules::content", path, digest = %digest, "hashed");

        match self.index.borrow_mut().record(digest, path) {
            Some(original) => Err(Violation::new(format!(
                "duplicates the content of {original:?}"
            ))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod tests;
