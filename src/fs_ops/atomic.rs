//! Atomic replace helper.
//! - Renames a fully written temp file over the destination.
//! - std's rename replaces an existing destination on every supported platform
//!   (MOVEFILE_REPLACE_EXISTING on Windows), so readers see old or new bytes, never a mix.
//! - On Unix, best-effort fsync of the destination directory after rename.

use std::fs;
use std::io;
use std::path::Path;

pub(super) fn replace_atomic(tmp: &Path, dst: &Path) -> io::Result<()> {
    fs::rename(tmp, dst)?;

    // Ignore fsync errors to avoid turning a successful rename into a failure.
    #[cfg(unix)]
    if let Some(parent) = dst.parent() {
        let _ = super::util::fsync_dir(parent);
    }

    Ok(())
}
