//! Digest manifest: `<hex>  <path>` per hashed file, in the layout `sha256sum`
//! reads back with `-c`.

use std::io::{self, Write};

use crate::rules::DigestIndex;

/// # Errors
/// Returns an error if writing to `w` fails.
pub fn write_manifest<W: Write>(index: &DigestIndex, w: &mut W) -> io::Result<()> {
    for (digest, path) in index.iter() {
        writeln!(w, "{digest}  {path}")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
