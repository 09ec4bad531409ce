//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - A missing file is not an error: callers fall back to defaults.
//!
//! Notes:
//! - Unknown XML fields are rejected to surface misconfigurations early.
//! - Empty elements are treated as unset.

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::default_config_path;
use super::types::{Config, LogLevel};
use super::variant::BuildVariant;
use crate::fs_ops::io_error_with_help;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    project_dir: Option<String>,
    root_dir: Option<String>,
    variant: Option<String>,
    source: Option<String>,
    destination: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|t| !t.is_empty())
}

fn path_field(s: Option<&str>) -> Option<PathBuf> {
    non_empty(s).map(PathBuf::from)
}

// Map XmlConfig onto defaults.
fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(p) = path_field(parsed.project_dir.as_deref()) {
        cfg.project_dir = p;
    }
    cfg.root_dir = path_field(parsed.root_dir.as_deref());
    cfg.source = path_field(parsed.source.as_deref());
    cfg.destination = path_field(parsed.destination.as_deref());
    cfg.log_file = path_field(parsed.log_file.as_deref());

    if let Some(v) = non_empty(parsed.variant.as_deref()) {
        cfg.variant = v.parse::<BuildVariant>()?;
    }
    if let Some(l) = non_empty(parsed.log_level.as_deref()) {
        cfg.log_level = l.parse::<LogLevel>()?;
    }

    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents =
        fs::read_to_string(path).map_err(io_error_with_help("read config xml", path))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed).with_context(|| format!("invalid value in '{}'", path.display()))
}

/// Load the config at [`default_config_path`]. `Ok(None)` when no file exists there.
pub fn load_config_from_xml() -> Result<Option<Config>> {
    let path = default_config_path()?;
    if !path.exists() {
        debug!("No config file at {}; using defaults", path.display());
        return Ok(None);
    }
    load_config_from_xml_path(&path).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_fields() {
        let xml = r#"
<config>
  <project_dir>/work/android/app</project_dir>
  <root_dir>/work/android</root_dir>
  <variant>Release</variant>
  <source>/tmp/in.apk</source>
  <destination>/tmp/out.apk</destination>
  <log_level>debug</log_level>
  <log_file>/tmp/apk_relocate.log</log_file>
</config>"#;
        let cfg = xml_to_config(from_xml_str(xml).unwrap()).unwrap();
        assert_eq!(cfg.project_dir, PathBuf::from("/work/android/app"));
        assert_eq!(cfg.root_dir, Some(PathBuf::from("/work/android")));
        assert_eq!(cfg.variant, BuildVariant::Release);
        assert_eq!(cfg.source, Some(PathBuf::from("/tmp/in.apk")));
        assert_eq!(cfg.destination, Some(PathBuf::from("/tmp/out.apk")));
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/apk_relocate.log")));
    }

    #[test]
    fn whitespace_and_empty_values_are_unset() {
        let xml = "<config>\n  <project_dir>  /p/app  </project_dir>\n  <log_file>   </log_file>\n</config>";
        let cfg = xml_to_config(from_xml_str(xml).unwrap()).unwrap();
        assert_eq!(cfg.project_dir, PathBuf::from("/p/app"));
        assert_eq!(cfg.log_file, None);
        assert_eq!(cfg.variant, BuildVariant::Debug);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let xml = "<config><signing_key>x</signing_key></config>";
        assert!(from_xml_str::<XmlConfig>(xml).is_err());
    }

    #[test]
    fn bad_variant_is_an_error() {
        let xml = "<config><variant>profile</variant></config>";
        assert!(xml_to_config(from_xml_str(xml).unwrap()).is_err());
    }
}
