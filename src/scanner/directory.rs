use std::io;
use std::path::Path;

use walkdir::WalkDir;

use super::{EntryInfo, TreeTraverser, VisitFn};

/// Real filesystem traverser backed by `walkdir`.
///
/// Symlinks are reported as symlinks, never followed. Siblings are visited in
/// file-name order so that "first seen" is reproducible between runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct WalkDirTraverser;

impl WalkDirTraverser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn entry_info(entry: &walkdir::DirEntry) -> io::Result<EntryInfo> {
        let name = entry.file_name().to_string_lossy();
        let metadata = entry.metadata().map_err(io::Error::from)?;
        Ok(EntryInfo::from_metadata(name, &metadata))
    }
}

impl TreeTraverser for WalkDirTraverser {
    fn traverse(&self, root: &Path, visit: &mut VisitFn<'_>) {
        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        for entry in walker {
            match entry {
                Ok(entry) => visit(entry.path(), Self::entry_info(&entry)),
                Err(err) => {
                    let path = err.path().unwrap_or(root).to_path_buf();
                    visit(&path, Err(io::Error::from(err)));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
