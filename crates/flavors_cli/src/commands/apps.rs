//! Apps command - List registered applications.

use anyhow::Result;
use clap::Args;

use flavors_core::builtin_registry;

#[derive(Args)]
pub struct AppsArgs {
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

pub fn execute(args: AppsArgs) -> Result<()> {
    let registry = builtin_registry()?;

    if args.json {
        return super::print_json(&serde_json::json!({
            "trees": registry.tree_names(),
            "data": registry.data_names(),
        }));
    }

    println!("Applications with a tree:");
    for name in registry.tree_names() {
        let (executable, flavor) = match registry.default_executable(name)? {
            Some(executable) => (executable, registry.default_flavor(name, executable)?),
            None => ("-", None),
        };
        println!("  {:<12} {} / {}", name, executable, flavor.unwrap_or("-"));
    }

    println!();
    println!("Applications with data:");
    for name in registry.data_names() {
        let data = registry.get_app_data(name)?;
        println!("  {:<12} {} ({})", name, data.summary, data.default_version);
    }

    Ok(())
}
