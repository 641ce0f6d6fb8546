//! dalil CLI
//!
//! Commands:
//! - `search` - filter a catalog file by query and facets
//! - `normalize` - show the normalized form of a text
//! - `synonyms` - list a goal's synonym variants
//! - `facets` - count entries per facet value
//! - `schema` - print the catalog JSON Schema

use anyhow::Result;
use clap::Parser;
use dalil::cli::{Cli, Commands};
use dalil::error::AppError;
use dalil::tools;
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    let Some(command) = cli.command else {
        eprintln!("Error: No command specified. Use --help for usage information.");
        std::process::exit(1);
    };

    match execute(command) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn execute(command: Commands) -> Result<String, AppError> {
    debug!("Executing {:?}", command);
    match command {
        Commands::Search(args) => tools::search::execute_search(&args),
        Commands::Normalize(args) => Ok(tools::lexicon::execute_normalize(&args)),
        Commands::Synonyms(args) => tools::lexicon::execute_synonyms(&args),
        Commands::Facets(args) => tools::facets::execute_facets(&args),
        Commands::Schema => tools::lexicon::execute_schema(),
    }
}
