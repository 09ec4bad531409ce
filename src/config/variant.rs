//! Android build variants and the artifact paths they imply.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::errors::ConfigError;

/// Android build type whose APK is relocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildVariant {
    #[default]
    Debug,
    Release,
}

impl BuildVariant {
    /// Parse variant names (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(BuildVariant::Debug),
            "release" => Some(BuildVariant::Release),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildVariant::Debug => "debug",
            BuildVariant::Release => "release",
        }
    }

    /// Gradle task that packages this variant, e.g. `assembleDebug`.
    pub fn assemble_task(&self) -> &'static str {
        match self {
            BuildVariant::Debug => "assembleDebug",
            BuildVariant::Release => "assembleRelease",
        }
    }

    /// `app-debug.apk` / `app-release.apk`
    pub fn apk_file_name(&self) -> String {
        format!("app-{}.apk", self.as_str())
    }

    /// Where the Android Gradle Plugin writes the APK:
    /// `<project_dir>/build/outputs/apk/<variant>/app-<variant>.apk`.
    pub fn default_source(&self, project_dir: &Path) -> PathBuf {
        project_dir
            .join("build")
            .join("outputs")
            .join("apk")
            .join(self.as_str())
            .join(self.apk_file_name())
    }

    /// Where the Flutter tool looks for it:
    /// `<root_dir>/../build/app/outputs/flutter-apk/app-<variant>.apk`.
    ///
    /// `root_dir` is resolved first so `..` lands on the real parent even when
    /// given as `.` or through a symlink.
    pub fn default_destination(&self, root_dir: &Path) -> PathBuf {
        let root = dunce::canonicalize(root_dir).unwrap_or_else(|_| root_dir.to_path_buf());
        let base = match root.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => root.join(".."),
        };
        base.join("build")
            .join("app")
            .join("outputs")
            .join("flutter-apk")
            .join(self.apk_file_name())
    }
}

impl fmt::Display for BuildVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildVariant {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ConfigError::InvalidVariant(s.to_string()))
    }
}
