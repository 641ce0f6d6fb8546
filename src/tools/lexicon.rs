//! Normalization, synonym and schema commands

use crate::catalog::CatalogDocument;
use crate::cli::{NormalizeArgs, SynonymsArgs};
use crate::error::AppError;
use crate::search::{normalize, Goal};

pub fn execute_normalize(args: &NormalizeArgs) -> String {
    normalize(&args.text)
}

/// One variant per line. Unknown goals are an input error here, unlike
/// in search where they simply expand to nothing.
pub fn execute_synonyms(args: &SynonymsArgs) -> Result<String, AppError> {
    let goal: Goal = args.goal.parse()?;
    let table = super::load_synonyms(args.synonyms.as_deref())?;
    Ok(table.expand(goal.as_str(), args.locale).join("\n"))
}

pub fn execute_schema() -> Result<String, AppError> {
    let schema = schemars::schema_for!(CatalogDocument);
    Ok(serde_json::to_string_pretty(&schema)?)
}
