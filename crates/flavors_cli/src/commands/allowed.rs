//! Allowed command - Print the allowed vocabularies.

use anyhow::Result;
use clap::Args;

use flavors_core::{allowed_monitors, allowed_post_processors, allowed_results};

#[derive(Args)]
pub struct AllowedArgs {
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

pub fn execute(args: AllowedArgs) -> Result<()> {
    let monitors = allowed_monitors();
    let post_processors = allowed_post_processors();

    if args.json {
        return super::print_json(&serde_json::json!({
            "results": allowed_results(),
            "monitors": monitors,
            "postProcessors": post_processors,
        }));
    }

    println!("Results:");
    for key in allowed_results() {
        println!("  {}", key);
    }

    println!();
    println!("Monitors:");
    for (key, monitor) in &monitors {
        println!("  {:<28} {}", key, monitor.summary);
    }

    println!();
    println!("Post-processors:");
    for (key, post_processor) in &post_processors {
        println!("  {:<32} {}", key, post_processor.summary);
    }

    Ok(())
}
