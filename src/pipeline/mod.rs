//! Ordered build pipeline.
//!
//! Stages run in list order. Placement is explicit: a stage that must run
//! after another is inserted with [`Pipeline::insert_after`]. When a stage
//! fails, the stages after it are recorded as skipped.

mod packaging;
mod relocate_stage;

pub use packaging::PackagingStage;
pub use relocate_stage::RelocateStage;

use tracing::{debug, info, warn};

use crate::context::BuildContext;
use crate::errors::PipelineError;

/// Result of running one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    Completed,
    Failed(String),
    Skipped,
}

/// A named step in the pipeline.
pub trait Stage {
    fn name(&self) -> &str;
    fn run(&self, ctx: &BuildContext) -> StageOutcome;
}

/// Per-stage outcomes, in execution order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub entries: Vec<(String, StageOutcome)>,
}

impl PipelineReport {
    pub fn succeeded(&self) -> bool {
        self.entries
            .iter()
            .all(|(_, o)| matches!(o, StageOutcome::Completed))
    }

    pub fn outcome(&self, stage: &str) -> Option<&StageOutcome> {
        self.entries
            .iter()
            .find(|(name, _)| name == stage)
            .map(|(_, o)| o)
    }
}

#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relocation alone, or packaging followed by relocation.
    pub fn standard(assemble: bool) -> Result<Self, PipelineError> {
        let mut p = Self::new();
        if assemble {
            p.push(Box::new(PackagingStage))?;
            p.insert_after(PackagingStage::NAME, Box::new(RelocateStage))?;
        } else {
            p.push(Box::new(RelocateStage))?;
        }
        Ok(p)
    }

    pub fn push(&mut self, stage: Box<dyn Stage>) -> Result<(), PipelineError> {
        self.ensure_unique(stage.name())?;
        self.stages.push(stage);
        Ok(())
    }

    /// Place `stage` immediately after the stage named `anchor`.
    pub fn insert_after(
        &mut self,
        anchor: &str,
        stage: Box<dyn Stage>,
    ) -> Result<(), PipelineError> {
        self.ensure_unique(stage.name())?;
        let idx = self
            .stages
            .iter()
            .position(|s| s.name() == anchor)
            .ok_or_else(|| PipelineError::UnknownStage(anchor.to_string()))?;
        self.stages.insert(idx + 1, stage);
        Ok(())
    }

    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn run(&self, ctx: &BuildContext) -> PipelineReport {
        let mut report = PipelineReport::default();
        let mut halted = false;
        for stage in &self.stages {
            let name = stage.name().to_string();
            if halted {
                debug!(stage = %name, "Skipping stage after earlier failure");
                report.entries.push((name, StageOutcome::Skipped));
                continue;
            }
            info!(stage = %name, "Running stage");
            let outcome = stage.run(ctx);
            if let StageOutcome::Failed(reason) = &outcome {
                warn!(stage = %name, %reason, "Stage failed");
                halted = true;
            }
            report.entries.push((name, outcome));
        }
        report
    }

    fn ensure_unique(&self, name: &str) -> Result<(), PipelineError> {
        if self.stages.iter().any(|s| s.name() == name) {
            return Err(PipelineError::DuplicateStage(name.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BuildVariant, Config};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Probe {
        name: &'static str,
        fail: bool,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Stage for Probe {
        fn name(&self) -> &str {
            self.name
        }
        fn run(&self, _ctx: &BuildContext) -> StageOutcome {
            self.log.borrow_mut().push(self.name);
            if self.fail {
                StageOutcome::Failed("boom".into())
            } else {
                StageOutcome::Completed
            }
        }
    }

    fn probe(name: &'static str, fail: bool, log: &Rc<RefCell<Vec<&'static str>>>) -> Box<dyn Stage> {
        Box::new(Probe { name, fail, log: Rc::clone(log) })
    }

    fn ctx() -> BuildContext {
        BuildContext::new(Config::new("android/app", BuildVariant::Debug))
    }

    #[test]
    fn insert_after_places_stage_behind_anchor() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut p = Pipeline::new();
        p.push(probe("compile", false, &log)).unwrap();
        p.push(probe("install", false, &log)).unwrap();
        p.insert_after("compile", probe("copy", false, &log)).unwrap();
        assert_eq!(p.stage_names(), vec!["compile", "copy", "install"]);

        let report = p.run(&ctx());
        assert!(report.succeeded());
        assert_eq!(*log.borrow(), vec!["compile", "copy", "install"]);
    }

    #[test]
    fn failure_skips_later_stages() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut p = Pipeline::new();
        p.push(probe("assemble", true, &log)).unwrap();
        p.push(probe("relocate-apk", false, &log)).unwrap();

        let report = p.run(&ctx());
        assert!(!report.succeeded());
        assert_eq!(report.outcome("assemble"), Some(&StageOutcome::Failed("boom".into())));
        assert_eq!(report.outcome("relocate-apk"), Some(&StageOutcome::Skipped));
        assert_eq!(*log.borrow(), vec!["assemble"]);
    }

    #[test]
    fn unknown_anchor_and_duplicates_are_rejected() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut p = Pipeline::new();
        assert_eq!(
            p.insert_after("assemble", probe("copy", false, &log)).unwrap_err(),
            PipelineError::UnknownStage("assemble".into())
        );
        p.push(probe("copy", false, &log)).unwrap();
        assert_eq!(
            p.push(probe("copy", false, &log)).unwrap_err(),
            PipelineError::DuplicateStage("copy".into())
        );
    }

    #[test]
    fn standard_pipeline_orders_packaging_first() {
        let p = Pipeline::standard(true).unwrap();
        assert_eq!(p.stage_names(), vec![PackagingStage::NAME, RelocateStage::NAME]);
        let p = Pipeline::standard(false).unwrap();
        assert_eq!(p.stage_names(), vec![RelocateStage::NAME]);
    }
}
