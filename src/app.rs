//! Application orchestrator.
//! Loads/merges config, initializes logging, builds the context and runs the pipeline.

use anyhow::{bail, Result};
use tracing::{debug, info};

use apk_relocate::cli::Args;
use apk_relocate::config::CONFIG_ENV;
use apk_relocate::output as out;
use apk_relocate::{
    default_config_path, load_config_from_xml, BuildContext, Config, Pipeline, StageOutcome,
};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init
    if args.print_config {
        print_config_location();
        return Ok(());
    }

    // Defaults < XML < CLI.
    let mut cfg: Config = match load_config_from_xml() {
        Ok(loaded) => loaded.unwrap_or_default(),
        Err(e) => {
            out::print_error(&format!("Failed to load config: {e:#}"));
            return Err(e);
        }
    };
    args.apply_overrides(&mut cfg);

    // Hold the guard until the end so the file appender flushes.
    let guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    debug!("Starting apk_relocate: {:?}", args);

    let fail_on_error = cfg.fail_on_error;
    let pipeline = Pipeline::standard(cfg.assemble)?;
    let ctx = BuildContext::new(cfg);
    info!(
        variant = %ctx.plan().variant,
        source = %ctx.plan().source.display(),
        destination = %ctx.plan().destination.display(),
        dry_run = ctx.dry_run(),
        "Resolved relocation plan"
    );

    let report = pipeline.run(&ctx);
    for (stage, outcome) in &report.entries {
        if *outcome == StageOutcome::Skipped {
            out::print_warn(&format!("Stage '{stage}' skipped after an earlier failure"));
        }
    }

    drop(guard);

    if !report.succeeded() && fail_on_error {
        bail!("APK relocation did not complete");
    }
    Ok(())
}

fn print_config_location() {
    if let Ok(cfg_env) = std::env::var(CONFIG_ENV) {
        out::print_info(&format!("Using {CONFIG_ENV} (explicit):\n  {cfg_env}\n"));
        out::print_info(&format!("To override, unset {CONFIG_ENV} or set it to another file."));
        return;
    }
    match default_config_path() {
        Ok(p) => {
            out::print_info(&format!("Default apk_relocate config path:\n  {}\n", p.display()));
            if p.exists() {
                out::print_info("A config file exists at that location.");
            } else {
                out::print_info("No config file exists there; built-in defaults and CLI flags are used.");
            }
        }
        Err(e) => {
            out::print_error(&format!("Could not determine a default config path: {e}"));
        }
    }
}
