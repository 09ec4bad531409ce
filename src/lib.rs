//! Core library for `apk_relocate`.
//!
//! After the Android packaging step writes `app-<variant>.apk` under the app
//! module's `build/outputs`, the Flutter tool looks for it under
//! `build/app/outputs/flutter-apk` next to the Gradle root. [`relocate`] puts an
//! identical copy there: parents are created, a stale APK is replaced, and the
//! destination is never observed half-written.
//!
//! The binary wraps this in a small [`Pipeline`] driven by a [`BuildContext`]
//! built once from [`Config`] (defaults < XML file < CLI flags).

pub mod cli;
pub mod config;
pub mod context;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod pipeline;
pub mod platform;

pub use config::{
    default_config_path, default_log_path, load_config_from_xml, load_config_from_xml_path,
    path_has_symlink_ancestor, BuildVariant, Config, LogLevel,
};
pub use context::{BuildContext, RelocationPlan};
pub use errors::{ConfigError, PipelineError, RelocationError};
pub use fs_ops::{preview, relocate, report, status_line, Relocation};
pub use pipeline::{Pipeline, PipelineReport, Stage, StageOutcome};
