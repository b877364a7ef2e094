//! Check command - Cross-check application trees against templates.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use thiserror::Error;

use flavors_core::builtin_registry;
use flavors_templates::check_consistency;

/// Raised when the consistency check reports errors.
#[derive(Debug, Error)]
#[error("Consistency check failed with {errors} error(s)")]
pub struct CheckFailed {
    pub errors: usize,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Treat warnings as errors
    #[arg(long)]
    strict: bool,

    /// Load template sources from this directory instead of the built-in copies
    #[arg(long, env = "FLAVORS_ASSETS_DIR")]
    assets_dir: Option<PathBuf>,
}

pub fn execute(args: CheckArgs) -> Result<()> {
    let registry = builtin_registry()?;
    let catalog = super::load_catalog(args.assets_dir.as_deref())?;
    let result = check_consistency(registry, &catalog).context("Failed to check templates")?;

    for error in &result.errors {
        println!("error: {}", error);
    }
    for warning in &result.warnings {
        println!("warning: {}", warning);
    }

    let failures = if args.strict {
        result.errors.len() + result.warnings.len()
    } else {
        result.errors.len()
    };
    if failures > 0 {
        return Err(CheckFailed { errors: failures }.into());
    }

    println!("Trees and templates are consistent");
    Ok(())
}
