//! Streaming copy into a fresh file.
//!
//! - Writes to a newly created destination file (O_EXCL semantics; never clobbers).
//! - Linux: in-kernel `copy_file_range`, falling back to buffered streaming.
//! - Buffered I/O with large (1 MiB) buffers to reduce syscall count.
//! - The destination is `sync_all`ed before returning, so a following rename
//!   publishes complete bytes.
//!
//! Snapshot semantics: the source is read once from start to EOF. APKs are
//! written completely by the packaging step before we run, so no growth is expected.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

const BUF_SIZE: usize = 1024 * 1024;

/// Copy the already-open `src_f` -> `dst` (which must not exist) and fsync `dst`.
/// Returns the number of bytes written.
pub(super) fn copy_streaming(src_f: File, dst: &Path) -> io::Result<u64> {
    let dst_f = OpenOptions::new().write(true).create_new(true).open(dst)?;

    #[cfg(target_os = "linux")]
    if let Some(bytes) = try_copy_file_range(&src_f, &dst_f)? {
        dst_f.sync_all()?;
        return Ok(bytes);
    }

    let mut reader = BufReader::with_capacity(BUF_SIZE, src_f);
    let mut writer = BufWriter::with_capacity(BUF_SIZE, dst_f);
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(bytes)
}

/// In-kernel copy. `Ok(None)` means "unsupported here, stream instead"; that is
/// only returned when nothing has been written yet.
#[cfg(target_os = "linux")]
fn try_copy_file_range(src: &File, dst: &File) -> io::Result<Option<u64>> {
    use std::os::unix::io::AsRawFd;

    const CHUNK: usize = 16 * 1024 * 1024;
    let mut total: u64 = 0;
    loop {
        let rc = unsafe {
            libc::copy_file_range(
                src.as_raw_fd(),
                std::ptr::null_mut(),
                dst.as_raw_fd(),
                std::ptr::null_mut(),
                CHUNK,
                0,
            )
        };
        if rc > 0 {
            total += rc as u64;
            continue;
        }
        if rc == 0 {
            return Ok(Some(total));
        }
        let err = io::Error::last_os_error();
        let unsupported = matches!(
            err.raw_os_error(),
            Some(libc::EXDEV) | Some(libc::ENOSYS) | Some(libc::EINVAL) | Some(libc::EPERM)
        );
        if total == 0 && unsupported {
            return Ok(None);
        }
        return Err(err);
    }
}
