//! Command implementations
//!
//! Each command returns its rendered output as a string; `main` prints it
//! and maps errors to exit codes.

pub mod facets;
pub mod lexicon;
pub mod search;

use crate::error::AppError;
use crate::search::{SearchEngine, SynonymTable};
use std::path::Path;


/// Builtin synonyms, overlaid with the goals configured in `path`
pub fn load_synonyms(path: Option<&Path>) -> Result<SynonymTable, AppError> {
    let mut table = SynonymTable::builtin();
    if let Some(path) = path {
        table.merge(SynonymTable::load(path)?);
    }
    Ok(table)
}

pub fn build_engine(synonyms: Option<&Path>) -> Result<SearchEngine, AppError> {
    Ok(SearchEngine::new().with_synonyms(load_synonyms(synonyms)?))
}
