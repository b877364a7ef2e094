//! Templates command - List input templates.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use flavors_templates::PlaceholderScanner;

#[derive(Args)]
pub struct TemplatesArgs {
    /// Only list templates of this application
    #[arg(short, long)]
    app: Option<String>,

    /// Also list the context variables each template reads
    #[arg(long)]
    placeholders: bool,

    /// Load template sources from this directory instead of the built-in copies
    #[arg(long, env = "FLAVORS_ASSETS_DIR")]
    assets_dir: Option<PathBuf>,
}

pub fn execute(args: TemplatesArgs) -> Result<()> {
    let catalog = super::load_catalog(args.assets_dir.as_deref())?;

    let templates = match &args.app {
        Some(app) => catalog.app_templates(app),
        None => catalog.all_templates(),
    }
    .context("Failed to assemble templates")?;

    let scanner = args.placeholders.then(PlaceholderScanner::new);

    for template in &templates {
        println!(
            "{}/{}/{}  [{}]",
            template.application_name,
            template.executable_name,
            template.name,
            template.context_provider_names().join(", ")
        );
        if let Some(scanner) = &scanner {
            let names: Vec<_> = scanner.scan(&template.content).into_iter().collect();
            if !names.is_empty() {
                println!("    uses: {}", names.join(", "));
            }
        }
    }

    println!();
    println!("{} template(s)", templates.len());
    Ok(())
}
