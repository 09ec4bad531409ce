//! Typed error definitions for apk_relocate.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::fs_ops::describe_io_error;

/// Why a relocation did not happen.
#[derive(Debug, Error)]
pub enum RelocationError {
    /// The packaging step did not produce the artifact (or produced something
    /// that is not a regular file). Nothing was written.
    #[error("artifact not found at {0}")]
    SourceMissing(PathBuf),

    /// Directory creation or the copy itself failed.
    #[error("{}", describe_io_error(.op, .path, .source))]
    IoFailure {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RelocationError {
    /// Stable numeric code, emitted as a structured log field.
    pub fn code(&self) -> u16 {
        match self {
            RelocationError::SourceMissing(_) => 10,
            RelocationError::IoFailure { .. } => 20,
        }
    }

    /// Short machine-friendly kind, emitted next to `code`.
    pub fn kind(&self) -> &'static str {
        match self {
            RelocationError::SourceMissing(_) => "source_missing",
            RelocationError::IoFailure { .. } => "io_failure",
        }
    }

    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        RelocationError::IoFailure {
            op,
            path: path.into(),
            source,
        }
    }
}

/// Misuse of the stage pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("no stage named '{0}' in pipeline")]
    UnknownStage(String),

    #[error("a stage named '{0}' is already registered")]
    DuplicateStage(String),
}

/// Invalid values in the XML config or on the command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid build variant: '{0}' (expected debug or release)")]
    InvalidVariant(String),

    #[error("invalid log level: '{0}' (expected quiet, normal, info or debug)")]
    InvalidLogLevel(String),
}
