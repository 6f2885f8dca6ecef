//! Atomic output writes.
//!
//! The page is written to a temporary file in the destination directory and
//! renamed over the target, so readers see either the old page or the new
//! one and a failed run leaves the previous page untouched.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{RenderError, RenderResult};

/// Writes `contents` to `path` atomically and returns the byte count.
///
/// # Errors
///
/// Returns `RenderError::Write` if the directory is not writable or the
/// rename fails.
pub fn write_atomic(path: &Path, contents: &str) -> RenderResult<u64> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| RenderError::write(path, e))?;
    tmp.write_all(contents.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| RenderError::write(path, e))?;
    set_public_permissions(tmp.as_file()).map_err(|e| RenderError::write(path, e))?;
    tmp.persist(path)
        .map_err(|e| RenderError::write(path, e.error))?;

    let bytes = contents.len() as u64;
    info!(path = %path.display(), bytes, "Wrote dashboard");
    Ok(bytes)
}

/// Temporary files are created owner-only; a published page must be
/// world-readable.
#[cfg(unix)]
fn set_public_permissions(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_public_permissions(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}
