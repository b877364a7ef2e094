//! CLI command definitions.
//!
//! Each subcommand lives in its own module exposing an `Args` struct and
//! an `execute` function.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use flavors_templates::{AssetCatalog, TemplateStore};

pub mod allowed;
pub mod apps;
pub mod build_templates;
pub mod check;
pub mod data;
pub mod templates;
pub mod tree;

/// flavors - application flavor catalog
#[derive(Parser)]
#[command(name = "flavors")]
#[command(version, about = "Inspect application flavors and build the template artifact")]
#[command(long_about = r#"
Inspect the catalog of simulation applications: their executables, the
flavors each executable offers, the input templates behind them and the
metadata describing each application.

COMMANDS:
  apps            → List applications with a tree or data
  tree            → Print an expanded application tree
  data            → Print application data
  templates       → List input templates
  build-templates → Write the aggregated template artifact
  check           → Cross-check trees against templates
  allowed         → Print allowed results, monitors and post-processors

EXIT CODES:
  0 - Success
  1 - General error
  2 - Unknown application, executable or flavor
  3 - Consistency check failure
  4 - Template error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List applications with a tree or data
    Apps(apps::AppsArgs),

    /// Print an expanded application tree, executable or flavor
    Tree(tree::TreeArgs),

    /// Print the data of an application
    Data(data::DataArgs),

    /// List input templates
    Templates(templates::TemplatesArgs),

    /// Write every template into a single JSON artifact
    #[command(name = "build-templates")]
    BuildTemplates(build_templates::BuildTemplatesArgs),

    /// Cross-check application trees against templates
    Check(check::CheckArgs),

    /// Print the allowed results, monitors and post-processors
    Allowed(allowed::AllowedArgs),
}

/// Asset catalog over the embedded templates, or over `assets_dir` when
/// given.
pub(crate) fn load_catalog(assets_dir: Option<&Path>) -> Result<AssetCatalog> {
    let store = match assets_dir {
        Some(dir) => TemplateStore::load_dir(dir)
            .with_context(|| format!("Failed to load templates from {}", dir.display()))?,
        None => TemplateStore::embedded(),
    };
    AssetCatalog::with_store(store).context("Failed to load asset manifests")
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
