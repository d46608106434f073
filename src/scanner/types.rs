use std::fs::{FileType, Metadata};
use std::path::{Path, PathBuf};

/// Kind of filesystem object visited during a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Regular,
    Directory,
    Symlink,
    Device,
    NamedPipe,
    Socket,
    /// Anything the platform reports that none of the above describes.
    Other,
}

impl EntryKind {
    /// Classify a `FileType` without following symlinks.
    #[must_use]
    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            return Self::Symlink;
        }
        if file_type.is_dir() {
            return Self::Directory;
        }
        if file_type.is_file() {
            return Self::Regular;
        }
        Self::special(file_type)
    }

    #[cfg(unix)]
    fn special(file_type: FileType) -> Self {
        use std::os::unix::fs::FileTypeExt;

        if file_type.is_block_device() || file_type.is_char_device() {
            Self::Device
        } else if file_type.is_fifo() {
            Self::NamedPipe
        } else if file_type.is_socket() {
            Self::Socket
        } else {
            Self::Other
        }
    }

    #[cfg(not(unix))]
    const fn special(_file_type: FileType) -> Self {
        Self::Other
    }
}

/// Metadata for one traversal entry.
///
/// Built from real `fs::Metadata` by the walkdir traverser, or fabricated
/// directly by tests through the `file`/`dir`/`symlink`/`device` constructors.
/// The name is stored lossily: bytes that are not valid UTF-8 become
/// `U+FFFD`, which is what the `invalid-utf8` rule looks for. The engine
/// attaches the byte-exact path relative to the root before any rule runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    name: String,
    size: u64,
    kind: EntryKind,
    relative_path: Option<PathBuf>,
}

impl EntryInfo {
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            size,
            kind,
            relative_path: None,
        }
    }

    #[must_use]
    pub fn with_relative_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.relative_path = Some(path.into());
        self
    }

    /// The undecoded path relative to the audit root, when known.
    #[must_use]
    pub fn relative_path(&self) -> Option<&Path> {
        self.relative_path.as_deref()
    }

    #[must_use]
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self::new(name, size, EntryKind::Regular)
    }

    #[must_use]
    pub fn dir(name: impl Into<String>) -> Self {
        Self::new(name, 0, EntryKind::Directory)
    }

    #[must_use]
    pub fn symlink(name: impl Into<String>) -> Self {
        Self::new(name, 0, EntryKind::Symlink)
    }

    #[must_use]
    pub fn device(name: impl Into<String>) -> Self {
        Self::new(name, 0, EntryKind::Device)
    }

    #[must_use]
    pub fn from_metadata(name: impl Into<String>, metadata: &Metadata) -> Self {
        Self::new(
            name,
            metadata.len(),
            EntryKind::from_file_type(metadata.file_type()),
        )
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        self.kind
    }

    #[must_use]
    pub const fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }

    #[must_use]
    pub const fn is_regular(&self) -> bool {
        matches!(self.kind, EntryKind::Regular)
    }

    #[must_use]
    pub const fn is_symlink(&self) -> bool {
        matches!(self.kind, EntryKind::Symlink)
    }

    #[must_use]
    pub const fn is_device(&self) -> bool {
        matches!(self.kind, EntryKind::Device)
    }
}
