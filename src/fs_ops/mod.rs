//! Filesystem operations: modularized.

mod atomic;
mod copy;
mod discover;
mod helpers;
mod io_copy;
mod relocate;
mod util;

pub use copy::safe_copy_and_rename;
pub use discover::find_apk_candidates;
pub use helpers::{describe_io_error, io_error_with_help, io_error_with_help_io};
pub use relocate::{preview, relocate, report, status_line, Relocation};
pub use util::TEMP_PREFIX;
