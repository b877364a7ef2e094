//! flavors CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Unknown application, executable or flavor
//! - 3: Consistency check failure
//! - 4: Template error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use flavors_core::CatalogError;
use flavors_templates::TemplateError;

mod commands;

use commands::{check::CheckFailed, Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const NOT_FOUND: u8 = 2;
    pub const CHECK_FAILURE: u8 = 3;
    pub const TEMPLATE_ERROR: u8 = 4;
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Apps(args) => commands::apps::execute(args),
        Commands::Tree(args) => commands::tree::execute(args),
        Commands::Data(args) => commands::data::execute(args),
        Commands::Templates(args) => commands::templates::execute(args),
        Commands::BuildTemplates(args) => commands::build_templates::execute(args),
        Commands::Check(args) => commands::check::execute(args),
        Commands::Allowed(args) => commands::allowed::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "info"
    };

    let mut filter = EnvFilter::from_default_env();
    for directive in [format!("flavors={default_level}"), "warn".to_string()] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }

    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    for cause in e.chain() {
        if cause.downcast_ref::<CheckFailed>().is_some() {
            return ExitCodes::CHECK_FAILURE;
        }
        if let Some(err) = cause.downcast_ref::<CatalogError>() {
            if err.is_not_found() {
                return ExitCodes::NOT_FOUND;
            }
        }
        if let Some(err) = cause.downcast_ref::<TemplateError>() {
            return match err {
                TemplateError::UnknownApplication(_) => ExitCodes::NOT_FOUND,
                _ => ExitCodes::TEMPLATE_ERROR,
            };
        }
    }

    let msg = e.to_string().to_lowercase();
    if msg.contains("not found") {
        ExitCodes::NOT_FOUND
    } else {
        ExitCodes::GENERAL_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_categorize_catalog_not_found() {
        let err = anyhow::Error::new(CatalogError::TreeNotFound("foo".to_string()));
        assert_eq!(categorize_error(&err), ExitCodes::NOT_FOUND);
    }

    #[test]
    fn test_categorize_wrapped_template_error() {
        let err: anyhow::Result<()> =
            Err(TemplateError::NotFound("vasp/INCAR.j2".to_string())).context("Failed to assemble");
        assert_eq!(categorize_error(&err.unwrap_err()), ExitCodes::TEMPLATE_ERROR);
    }

    #[test]
    fn test_categorize_check_failure() {
        let err = anyhow::Error::new(CheckFailed { errors: 2 });
        assert_eq!(categorize_error(&err), ExitCodes::CHECK_FAILURE);
    }

    #[test]
    fn test_categorize_by_message() {
        assert_eq!(
            categorize_error(&anyhow::anyhow!("Executable not found: pw")),
            ExitCodes::NOT_FOUND
        );
        assert_eq!(
            categorize_error(&anyhow::anyhow!("disk full")),
            ExitCodes::GENERAL_ERROR
        );
    }
}
