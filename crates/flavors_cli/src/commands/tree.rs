//! Tree command - Print an expanded application tree.

use anyhow::{anyhow, Result};
use clap::Args;
use tracing::debug;

use flavors_core::get_app_tree;

#[derive(Args)]
pub struct TreeArgs {
    /// Application name (e.g. espresso)
    app: String,

    /// Only print this executable
    #[arg(short, long)]
    executable: Option<String>,

    /// Only print this flavor of the executable
    #[arg(short, long, requires = "executable")]
    flavor: Option<String>,
}

pub fn execute(args: TreeArgs) -> Result<()> {
    let tree = get_app_tree(&args.app)?;
    debug!("Printing tree of {}", args.app);

    let Some(executable_name) = &args.executable else {
        return super::print_json(tree);
    };

    let executable = tree.get(executable_name).ok_or_else(|| {
        anyhow!(
            "Executable not found: {} (available: {})",
            executable_name,
            tree.executable_names().join(", ")
        )
    })?;

    match &args.flavor {
        Some(flavor_name) => {
            let flavor = executable.flavors.get(flavor_name).ok_or_else(|| {
                anyhow!(
                    "Flavor not found: {}/{}",
                    executable_name,
                    flavor_name
                )
            })?;
            super::print_json(flavor)
        }
        None => super::print_json(executable),
    }
}
