//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - Every flag is optional; unset flags leave XML/default values alone.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::{BuildVariant, Config, LogLevel};

/// Copy the packaged APK to where the Flutter tool expects it.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Copy a freshly packaged APK to the path the Flutter tool expects"
)]
pub struct Args {
    /// Android app module directory (default: android/app).
    #[arg(long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub project_dir: Option<PathBuf>,

    /// Gradle root project directory (default: parent of --project-dir).
    #[arg(long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub root_dir: Option<PathBuf>,

    /// Build variant whose APK is relocated: debug or release.
    #[arg(long, value_name = "VARIANT", value_parser = parse_variant)]
    pub variant: Option<BuildVariant>,

    /// Explicit artifact path (overrides the variant layout).
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub source: Option<PathBuf>,

    /// Explicit destination path (overrides the variant layout).
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub destination: Option<PathBuf>,

    /// Run `gradlew assemble<Variant>` before relocating.
    #[arg(long, help = "Run the Gradle packaging task first")]
    pub assemble: bool,

    /// Dry-run: log actions but do not modify the filesystem.
    #[arg(
        long,
        help = "Show what would be done, but do not modify files/directories"
    )]
    pub dry_run: bool,

    /// Exit non-zero when the relocation fails (default: log and exit 0).
    #[arg(long, help = "Exit with status 1 if the APK could not be relocated")]
    pub fail_on_error: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(
        long,
        value_name = "LEVEL",
        value_parser = parse_log_level,
        help = "Set log level: quiet, normal, info, debug"
    )]
    pub log_level: Option<LogLevel>,

    /// Also write logs to this file.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Print where apk_relocate looks for its config file, then exit.
    #[arg(long, help = "Print the config file location and exit")]
    pub print_config: bool,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

fn parse_variant(s: &str) -> Result<BuildVariant, String> {
    s.parse::<BuildVariant>().map_err(|e| e.to_string())
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    s.parse::<LogLevel>().map_err(|e| e.to_string())
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.clone()
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(p) = &self.project_dir {
            cfg.project_dir = p.clone();
        }
        if let Some(r) = &self.root_dir {
            cfg.root_dir = Some(r.clone());
        }
        if let Some(v) = self.variant {
            cfg.variant = v;
        }
        if let Some(s) = &self.source {
            cfg.source = Some(s.clone());
        }
        if let Some(d) = &self.destination {
            cfg.destination = Some(d.clone());
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(f) = &self.log_file {
            cfg.log_file = Some(f.clone());
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
        if self.assemble {
            cfg.assemble = true;
        }
        if self.fail_on_error {
            cfg.fail_on_error = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
