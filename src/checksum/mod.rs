//! File digests for content deduplication.
//!
//! A [`Checksum`] pairs a digest algorithm with a block-write strategy that
//! streams a file into it. Tests swap the strategy (or the whole
//! [`FileHasher`]) to get deterministic digests without real file content.

use std::fs::File;
use std::io::{self, Write};
use std::marker::PhantomData;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha512};

/// Feeds the content at `path` into `sink`.
pub type BlockWrite = fn(&Path, &mut dyn Write) -> io::Result<()>;

/// Produces the digest of the file at an absolute path.
pub trait FileHasher {
    /// # Errors
    /// Returns an error if the file cannot be read to the end.
    fn hash_file(&self, path: &Path) -> io::Result<Vec<u8>>;
}

impl<F> FileHasher for F
where
    F: Fn(&Path) -> io::Result<Vec<u8>>,
{
    fn hash_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        self(path)
    }
}

/// Streams the whole file into the sink.
///
/// # Errors
/// Returns an error if the file cannot be opened or read.
pub fn default_block_write(path: &Path, sink: &mut dyn Write) -> io::Result<()> {
    let mut file = File::open(path)?;
    io::copy(&mut file, sink)?;
    Ok(())
}

/// Digest algorithm `D` driven by a block-write strategy.
pub struct Checksum<D> {
    block_write: BlockWrite,
    _digest: PhantomData<D>,
}

impl<D> Checksum<D> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_block_write(default_block_write)
    }

    #[must_use]
    pub fn with_block_write(block_write: BlockWrite) -> Self {
        Self {
            block_write,
            _digest: PhantomData,
        }
    }
}

impl<D> Default for Checksum<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Digest + Write> FileHasher for Checksum<D> {
    fn hash_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        let mut hasher = D::new();
        (self.block_write)(path, &mut hasher)?;
        Ok(hasher.finalize().to_vec())
    }
}

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// 32-byte digest.
    #[default]
    Sha256,
    /// 64-byte digest.
    Sha512,
}

impl Algorithm {
    #[must_use]
    pub fn hasher(self) -> Box<dyn FileHasher> {
        match self {
            Self::Sha256 => Box::new(Checksum::<Sha256>::new()),
            Self::Sha512 => Box::new(Checksum::<Sha512>::new()),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sha256" => Ok(Self::Sha256),
            "sha512" => Ok(Self::Sha512),
            _ => Err(format!("Unknown checksum algorithm: {s}")),
        }
    }
}

/// Lowercase hex rendering of a digest.
#[must_use]
pub fn to_hex(digest: &[u8]) -> String {
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
