//! Build context: everything a pipeline stage may read, built once at startup
//! and passed by reference. There is no global instance.

use std::path::PathBuf;

use crate::config::{BuildVariant, Config};

/// Resolved source/destination pair for one relocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelocationPlan {
    pub variant: BuildVariant,
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl RelocationPlan {
    /// Explicit `source`/`destination` win; otherwise derive from the variant layout.
    pub fn from_config(cfg: &Config) -> Self {
        let source = cfg
            .source
            .clone()
            .unwrap_or_else(|| cfg.variant.default_source(&cfg.project_dir));
        let destination = cfg
            .destination
            .clone()
            .unwrap_or_else(|| cfg.variant.default_destination(&cfg.effective_root_dir()));
        Self {
            variant: cfg.variant,
            source,
            destination,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BuildContext {
    config: Config,
    plan: RelocationPlan,
}

impl BuildContext {
    pub fn new(config: Config) -> Self {
        let plan = RelocationPlan::from_config(&config);
        Self { config, plan }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn plan(&self) -> &RelocationPlan {
        &self.plan
    }

    pub fn dry_run(&self) -> bool {
        self.config.dry_run
    }

    pub fn root_dir(&self) -> PathBuf {
        self.config.effective_root_dir()
    }

    /// `<project_dir>/build/outputs`, scanned for hints when the artifact is missing.
    pub fn outputs_dir(&self) -> PathBuf {
        self.config.project_dir.join("build").join("outputs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_derives_from_variant() {
        let mut cfg = Config::new("/work/android/app", BuildVariant::Debug);
        cfg.destination = Some(PathBuf::from("/out/flutter-apk/app-debug.apk"));
        let ctx = BuildContext::new(cfg);
        assert_eq!(
            ctx.plan().source,
            PathBuf::from("/work/android/app/build/outputs/apk/debug/app-debug.apk")
        );
        assert_eq!(
            ctx.plan().destination,
            PathBuf::from("/out/flutter-apk/app-debug.apk")
        );
        assert_eq!(ctx.outputs_dir(), PathBuf::from("/work/android/app/build/outputs"));
    }

    #[test]
    fn explicit_source_overrides_layout() {
        let mut cfg = Config::new("/work/android/app", BuildVariant::Release);
        cfg.source = Some(PathBuf::from("/custom/app.apk"));
        let plan = RelocationPlan::from_config(&cfg);
        assert_eq!(plan.source, PathBuf::from("/custom/app.apk"));
        assert_eq!(plan.variant, BuildVariant::Release);
    }
}
