//! CLI mode implementation
//!
//! Provides a command-line interface over the search core

use crate::catalog::Locale;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// dalil CLI
#[derive(Parser, Debug)]
#[command(name = "dalil")]
#[command(
    about = "Arabic/English catalog search with fuzzy matching and facets",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search a catalog file
    Search(SearchArgs),
    /// Print the normalized form of a text
    Normalize(NormalizeArgs),
    /// Print the synonym variants of a goal
    Synonyms(SynonymsArgs),
    /// Print entry counts per category, goal and level
    Facets(FacetsArgs),
    /// Print the JSON Schema of catalog files
    Schema,
}

/// Output rendering
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

/// Search command arguments
#[derive(Parser, Clone, Debug)]
pub struct SearchArgs {
    /// Catalog JSON file
    #[arg(short = 'c', long, env = "DALIL_CATALOG")]
    pub catalog: PathBuf,

    /// Search text (Arabic or English, diacritics and case ignored)
    #[arg(short = 'q', long)]
    pub query: Option<String>,

    /// Category to include; repeat for several, `all` for no constraint
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Goal token or `all`
    #[arg(short = 'g', long)]
    pub goal: Option<String>,

    /// Level (beginner, intermediate, advanced) or `all`
    #[arg(short = 'l', long)]
    pub level: Option<String>,

    /// Locale whose texts are searched
    #[arg(long, default_value = "ar")]
    pub locale: Locale,

    /// Synonym JSON file overriding builtin goals
    #[arg(short = 's', long)]
    pub synonyms: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    /// Maximum number of results to print
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Normalize command arguments
#[derive(Parser, Clone, Debug)]
pub struct NormalizeArgs {
    /// Text to normalize
    pub text: String,
}

/// Synonyms command arguments
#[derive(Parser, Clone, Debug)]
pub struct SynonymsArgs {
    /// Goal token (automation, content, ...)
    pub goal: String,

    #[arg(long, default_value = "ar")]
    pub locale: Locale,

    /// Synonym JSON file overriding builtin goals
    #[arg(short = 's', long)]
    pub synonyms: Option<PathBuf>,
}

/// Facets command arguments
#[derive(Parser, Clone, Debug)]
pub struct FacetsArgs {
    /// Catalog JSON file
    #[arg(short = 'c', long, env = "DALIL_CATALOG")]
    pub catalog: PathBuf,
}
