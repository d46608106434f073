mod directory;
mod synthetic;
mod types;

pub use directory::WalkDirTraverser;
pub use synthetic::SyntheticTree;
pub use types::{EntryInfo, EntryKind};

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{DarkGuardError, Result};

/// Callback invoked once per visited entry, with the entry's full path.
pub type VisitFn<'a> = dyn FnMut(&Path, io::Result<EntryInfo>) + 'a;

/// Depth-first walk over every entry under a root.
pub trait TreeTraverser {
    /// Resolve `root` to the absolute path the walk will start from.
    ///
    /// # Errors
    /// Returns an error if the root is missing, unreadable, or not a directory.
    fn resolve_root(&self, root: &Path) -> Result<PathBuf> {
        resolve_directory(root)
    }

    /// Visit `root` itself and every entry reachable under it exactly once.
    ///
    /// Entries that cannot be read are still reported, with an error in
    /// place of their metadata; the walk carries on with their siblings.
    fn traverse(&self, root: &Path, visit: &mut VisitFn<'_>);
}

/// Canonicalize `root` and make sure it names a directory.
///
/// # Errors
/// Returns `InvalidRoot` if the path cannot be resolved and `NotADirectory`
/// if it resolves to anything other than a directory.
pub fn resolve_directory(root: &Path) -> Result<PathBuf> {
    let resolved = dunce::canonicalize(root).map_err(|source| DarkGuardError::InvalidRoot {
        path: root.to_path_buf(),
        source,
    })?;

    let metadata = std::fs::metadata(&resolved).map_err(|source| DarkGuardError::InvalidRoot {
        path: root.to_path_buf(),
        source,
    })?;

    if !metadata.is_dir() {
        return Err(DarkGuardError::NotADirectory(root.to_path_buf()));
    }

    Ok(resolved)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
