//! The relocation step: put an identical copy of the packaged artifact where
//! the downstream toolchain looks for it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use super::copy::safe_copy_and_rename;
use crate::errors::RelocationError;
use crate::output as out;

/// A completed (or, for dry runs, planned) relocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocation {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub bytes: u64,
}

/// Copy `source` to `destination`, creating missing parent directories and
/// replacing any existing file.
///
/// The source is checked before anything is written: if it is missing (or not a
/// regular file) the filesystem is left untouched and
/// [`RelocationError::SourceMissing`] is returned. Otherwise the bytes are
/// staged in a temporary sibling and renamed into place, so `destination`
/// never holds a partial artifact.
pub fn relocate(source: &Path, destination: &Path) -> Result<Relocation, RelocationError> {
    let expected = check_source(source)?;
    debug!(source = %source.display(), bytes = expected, "Source artifact present");

    let bytes = safe_copy_and_rename(source, destination)?;
    info!(
        source = %source.display(),
        destination = %destination.display(),
        bytes,
        "Relocated artifact"
    );
    Ok(Relocation {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        bytes,
    })
}

/// Dry-run counterpart of [`relocate`]: same source check, no writes.
pub fn preview(source: &Path, destination: &Path) -> Result<Relocation, RelocationError> {
    let bytes = check_source(source)?;
    info!(
        source = %source.display(),
        destination = %destination.display(),
        bytes,
        "Dry-run: would relocate artifact"
    );
    Ok(Relocation {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        bytes,
    })
}

/// Returns the source length when it is an existing regular file.
fn check_source(source: &Path) -> Result<u64, RelocationError> {
    match fs::metadata(source) {
        Ok(meta) if meta.is_file() => Ok(meta.len()),
        Ok(_) => Err(RelocationError::SourceMissing(source.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(RelocationError::SourceMissing(source.to_path_buf()))
        }
        Err(e) => Err(RelocationError::io("inspect source", source, e)),
    }
}

/// The single human-readable status line for an outcome.
pub fn status_line(outcome: &Result<Relocation, RelocationError>) -> String {
    match outcome {
        Ok(r) => format!("Copied APK to: {}", r.destination.display()),
        Err(RelocationError::SourceMissing(p)) => format!(
            "APK not found at: {}; check the packaging step's output (assemble task)",
            p.display()
        ),
        Err(e) => format!("APK relocation failed: {e}"),
    }
}

/// Print the status line (stdout on success, stderr on failure) and emit a
/// structured error event for failures. Never aborts.
pub fn report(outcome: &Result<Relocation, RelocationError>) {
    let line = status_line(outcome);
    match outcome {
        Ok(_) => out::print_success(&line),
        Err(e) => {
            error!(code = e.code(), kind = e.kind(), error = %e, "Relocation failed");
            out::print_error(&line);
        }
    }
}
