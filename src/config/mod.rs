//! Config module.
//! Provides configuration types, build variants, default paths and XML loading.

pub mod paths;
pub mod types;
pub mod variant;
pub mod xml;

pub use paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel};
pub use variant::BuildVariant;
pub use xml::{load_config_from_xml, load_config_from_xml_path};

/// Environment variable naming an explicit config file (or its directory).
pub const CONFIG_ENV: &str = "APK_RELOCATE_CONFIG";

/// Android app module, relative to the Flutter project root.
pub const PROJECT_DIR_DEFAULT: &str = "android/app";
