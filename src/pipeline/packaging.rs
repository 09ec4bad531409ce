//! Optional packaging stage: runs the Gradle wrapper's `assemble<Variant>` task.

use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

use super::{Stage, StageOutcome};
use crate::context::BuildContext;
use crate::fs_ops::io_error_with_help_io;
use crate::output as out;

pub struct PackagingStage;

impl PackagingStage {
    pub const NAME: &'static str = "assemble";

    /// `gradlew` (or `gradlew.bat` on Windows) in the Gradle root.
    pub fn wrapper_path(root_dir: &Path) -> PathBuf {
        if cfg!(windows) {
            root_dir.join("gradlew.bat")
        } else {
            root_dir.join("gradlew")
        }
    }
}

impl Stage for PackagingStage {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn run(&self, ctx: &BuildContext) -> StageOutcome {
        let root = ctx.root_dir();
        let wrapper = Self::wrapper_path(&root);
        let task = ctx.plan().variant.assemble_task();

        if ctx.dry_run() {
            out::print_info(&format!("Dry-run: would run '{} {}'", wrapper.display(), task));
            return StageOutcome::Completed;
        }
        if !wrapper.is_file() {
            return StageOutcome::Failed(format!(
                "Gradle wrapper not found at {}",
                wrapper.display()
            ));
        }

        info!(wrapper = %wrapper.display(), task, "Running packaging task");
        let status = Command::new(&wrapper)
            .arg(task)
            .current_dir(&root)
            .status()
            .map_err(io_error_with_help_io("run gradle wrapper", &wrapper));
        match status {
            Ok(s) if s.success() => {
                debug!(task, "Packaging task finished");
                StageOutcome::Completed
            }
            Ok(s) => StageOutcome::Failed(format!("{task} exited with {s}")),
            Err(e) => StageOutcome::Failed(e.to_string()),
        }
    }
}
