//! Data command - Print application data.

use anyhow::Result;
use clap::Args;

use flavors_core::get_app_data;

#[derive(Args)]
pub struct DataArgs {
    /// Application name (e.g. ml)
    app: String,
}

pub fn execute(args: DataArgs) -> Result<()> {
    super::print_json(get_app_data(&args.app)?)
}
