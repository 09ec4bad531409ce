//! Core configuration types.
//! - Config holds the build-time settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::variant::BuildVariant;
use super::PROJECT_DIR_DEFAULT;
use crate::errors::ConfigError;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ConfigError::InvalidLogLevel(s.to_string()))
    }
}

/// Build-time settings. Source and destination are fixed here, before the
/// relocation step runs; the step itself never reads config.
#[derive(Debug, Clone)]
pub struct Config {
    /// Android app module directory (`android/app`)
    pub project_dir: PathBuf,
    /// Gradle root project directory; parent of `project_dir` when unset
    pub root_dir: Option<PathBuf>,
    /// Which variant's APK to relocate
    pub variant: BuildVariant,
    /// Explicit artifact path (overrides the variant layout)
    pub source: Option<PathBuf>,
    /// Explicit target path (overrides the variant layout)
    pub destination: Option<PathBuf>,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// If true, check and log but do not modify the filesystem
    pub dry_run: bool,
    /// If true, run the Gradle packaging task before relocating
    pub assemble: bool,
    /// If true, a failed relocation makes the process exit non-zero
    pub fail_on_error: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from(PROJECT_DIR_DEFAULT),
            root_dir: None,
            variant: BuildVariant::default(),
            source: None,
            destination: None,
            log_level: LogLevel::Normal,
            log_file: None,
            dry_run: false,
            assemble: false,
            fail_on_error: false,
        }
    }
}

impl Config {
    /// Config for an Android project rooted at `project_dir`; other fields use defaults.
    pub fn new(project_dir: impl Into<PathBuf>, variant: BuildVariant) -> Self {
        Self {
            project_dir: project_dir.into(),
            variant,
            ..Default::default()
        }
    }

    /// Effective Gradle root: explicit `root_dir`, else the project's parent.
    pub fn effective_root_dir(&self) -> PathBuf {
        if let Some(root) = &self.root_dir {
            return root.clone();
        }
        match self.project_dir.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => self.project_dir.join(".."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn root_defaults_to_project_parent() {
        let cfg = Config::new("/work/android/app", BuildVariant::Debug);
        assert_eq!(cfg.effective_root_dir(), Path::new("/work/android"));

        let cfg = Config::new("app", BuildVariant::Debug);
        assert_eq!(cfg.effective_root_dir(), Path::new("app/.."));
    }

    #[test]
    fn explicit_root_wins() {
        let mut cfg = Config::new("/work/android/app", BuildVariant::Release);
        cfg.root_dir = Some(PathBuf::from("/elsewhere"));
        assert_eq!(cfg.effective_root_dir(), Path::new("/elsewhere"));
    }
}
