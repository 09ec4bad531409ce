//! I/O error context.
//!
//! Turns an io::Error into "<op> '<path>': <error> — <hint> [os code: N]".
//! The same text backs `RelocationError::IoFailure`'s Display and the map_err
//! adapters used by config loading and the packaging stage.

use anyhow::anyhow;
use std::io;
use std::path::Path;

const HINT_PERMISSION: &str = "permission denied; check ownership and permissions of this path";
const HINT_NOT_FOUND: &str = "path not found; verify it exists";
const HINT_BUSY: &str = "in use by another process; retry once the build has released it";

/// Hint for a raw OS error code, limited to what reading build output and
/// writing into the Flutter output tree can run into.
#[cfg(unix)]
fn os_hint(code: i32) -> Option<&'static str> {
    let hint = match code {
        libc::EACCES | libc::EPERM => HINT_PERMISSION,
        libc::ENOENT => HINT_NOT_FOUND,
        libc::EBUSY | libc::ETXTBSY => HINT_BUSY,
        libc::ENOTDIR => "a path component is a file, not a directory.",
        libc::EISDIR => "a directory occupies the artifact path; remove it.",
        libc::EEXIST => "a leftover temporary file is in the way; remove it and retry.",
        libc::ENOSPC | libc::EDQUOT => "no space left for the copied APK.",
        libc::EROFS => "read-only filesystem; the output tree must be writable.",
        libc::ENAMETOOLONG => "path too long; shorten the project location.",
        _ => return None,
    };
    Some(hint)
}

#[cfg(windows)]
fn os_hint(code: i32) -> Option<&'static str> {
    let hint = match code {
        5 => HINT_PERMISSION,         // ERROR_ACCESS_DENIED
        2 | 3 => HINT_NOT_FOUND,      // ERROR_FILE_NOT_FOUND / ERROR_PATH_NOT_FOUND
        32 | 33 => HINT_BUSY,         // ERROR_SHARING_VIOLATION / ERROR_LOCK_VIOLATION
        80 | 183 => "a leftover temporary file is in the way; remove it and retry.",
        112 => "no space left for the copied APK.", // ERROR_DISK_FULL
        19 => "write-protected media; the output tree must be writable.",
        206 => "path too long (MAX_PATH); shorten the project location.",
        _ => return None,
    };
    Some(hint)
}

#[cfg(not(any(unix, windows)))]
fn os_hint(_code: i32) -> Option<&'static str> {
    None
}

fn kind_hint(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => Some(HINT_PERMISSION),
        io::ErrorKind::NotFound => Some(HINT_NOT_FOUND),
        io::ErrorKind::AlreadyExists => Some("already exists; remove it and retry."),
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => Some(HINT_BUSY),
        _ => None,
    }
}

/// Format a human-friendly message with op/path plus platform-aware hints.
pub fn describe_io_error(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    let code = e.raw_os_error();
    let hint = match code {
        Some(c) => os_hint(c),
        None => kind_hint(e.kind()),
    };
    if let Some(h) = hint {
        msg.push_str(" — ");
        msg.push_str(h);
    }
    if let Some(c) = code {
        msg.push_str(&format!(" [os code: {c}]"));
    }
    msg
}

/// `.map_err` adapter for anyhow::Result code.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(describe_io_error(op, path, &e))
}

/// `.map_err` adapter for io::Result code; keeps the original ErrorKind.
pub fn io_error_with_help_io<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> io::Error + 'a {
    move |e: io::Error| io::Error::new(e.kind(), describe_io_error(op, path, &e))
}
