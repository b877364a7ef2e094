//! Build-templates command - Write the aggregated template artifact.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use flavors_templates::TemplateArtifact;

#[derive(Args)]
pub struct BuildTemplatesArgs {
    /// Output file for the artifact
    #[arg(short, long)]
    out: PathBuf,

    /// Load template sources from this directory instead of the built-in copies
    #[arg(long, env = "FLAVORS_ASSETS_DIR")]
    assets_dir: Option<PathBuf>,
}

pub fn execute(args: BuildTemplatesArgs) -> Result<()> {
    info!("Building template artifact");

    let catalog = super::load_catalog(args.assets_dir.as_deref())?;
    let artifact = TemplateArtifact::build(&catalog).context("Failed to assemble templates")?;

    artifact
        .write(&args.out)
        .with_context(|| format!("Failed to write {}", args.out.display()))?;

    println!(
        "Wrote {} templates to {}",
        artifact.len(),
        args.out.display()
    );
    Ok(())
}
