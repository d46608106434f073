use crate::scanner::{EntryInfo, EntryKind};

use super::{Rule, Violation};

/// Predicate behind `broken-file`. It never fails on its own: the engine
/// reports unreadable entries directly, and the registration only puts the
/// rule on the report and out of reach of skip lists.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrokenFile;

impl Rule for BrokenFile {
    fn check(&mut self, _path: &str, _entry: &EntryInfo) -> Result<(), Violation> {
        Ok(())
    }
}

/// Regular files only.
#[derive(Debug, Default, Clone, Copy)]
pub struct NonzeroFilesize;

impl Rule for NonzeroFilesize {
    fn check(&mut self, _path: &str, entry: &EntryInfo) -> Result<(), Violation> {
        if entry.is_regular() && entry.size() == 0 {
            return Err(Violation::new("is an empty file"));
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoSpecialFiles;

impl Rule for NoSpecialFiles {
    fn check(&mut self, _path: &str, entry: &EntryInfo) -> Result<(), Violation> {
        let message = match entry.kind() {
            EntryKind::Regular | EntryKind::Directory => return Ok(()),
            EntryKind::Symlink => "is a symbolic link",
            EntryKind::Device => "is a device file",
            EntryKind::NamedPipe => "is a named pipe",
            EntryKind::Socket => "is a socket",
            EntryKind::Other => "is not a regular file or folder",
        };
        Err(Violation::new(message))
    }
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
