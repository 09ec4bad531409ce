use tracing::{info, warn};

use super::{Stage, StageOutcome};
use crate::context::BuildContext;
use crate::errors::RelocationError;
use crate::fs_ops::{find_apk_candidates, preview, relocate, report};

/// Copies the packaged APK to where the Flutter tool expects it.
pub struct RelocateStage;

impl RelocateStage {
    pub const NAME: &'static str = "relocate-apk";
}

impl Stage for RelocateStage {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn run(&self, ctx: &BuildContext) -> StageOutcome {
        let plan = ctx.plan();
        let outcome = if ctx.dry_run() {
            preview(&plan.source, &plan.destination)
        } else {
            relocate(&plan.source, &plan.destination)
        };

        if let Err(RelocationError::SourceMissing(_)) = &outcome {
            let candidates = find_apk_candidates(&ctx.outputs_dir());
            if candidates.is_empty() {
                info!(outputs = %ctx.outputs_dir().display(), "No APKs found under build outputs");
            }
            for c in &candidates {
                warn!(candidate = %c.display(), "Found an APK at a different location");
            }
        }

        report(&outcome);
        match outcome {
            Ok(_) => StageOutcome::Completed,
            Err(e) => StageOutcome::Failed(e.to_string()),
        }
    }
}
