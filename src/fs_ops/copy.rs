//! Safe copy-and-rename helper:
//! - Opens the source before touching the destination side
//! - Creates the destination directory chain
//! - Copies to a temp file in the destination directory (fsynced)
//! - Atomically renames temp -> dest, replacing a stale artifact
//! - Removes the temp file on any failure, leaving dest untouched

use std::fs::{self, File};
use std::io;
use std::path::Path;

use super::atomic::replace_atomic;
use super::{io_copy, util};
use crate::errors::RelocationError;

/// Copy `src` over `dest` so that `dest` is either the old file or a complete
/// copy of `src`. Returns bytes copied.
pub fn safe_copy_and_rename(src: &Path, dest: &Path) -> Result<u64, RelocationError> {
    let src_f = open_source(src)?;

    let dest_dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    fs::create_dir_all(dest_dir)
        .map_err(|e| RelocationError::io("create destination directory", dest_dir, e))?;

    let tmp_path = util::unique_temp_path(dest_dir);

    let bytes = match io_copy::copy_streaming(src_f, &tmp_path) {
        Ok(n) => n,
        Err(e) => {
            let _ = fs::remove_file(&tmp_path);
            return Err(RelocationError::io("copy to temporary file", &tmp_path, e));
        }
    };

    if let Err(e) = replace_atomic(&tmp_path, dest) {
        let _ = fs::remove_file(&tmp_path);
        return Err(RelocationError::io("rename temporary file into place", dest, e));
    }

    Ok(bytes)
}

/// A source that vanished since it was inspected is still "missing";
/// anything else (permissions, I/O) is reported against the source path.
fn open_source(src: &Path) -> Result<File, RelocationError> {
    File::open(src).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            RelocationError::SourceMissing(src.to_path_buf())
        } else {
            RelocationError::io("open source artifact", src, e)
        }
    })
}
