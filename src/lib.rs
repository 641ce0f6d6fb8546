//! dalil: search core for an Arabic/English content directory
//!
//! The glossary and systems pages of the site filter a static catalog as
//! the user types: Arabic spelling variants and tashkeel are folded away,
//! small typos are tolerated, goal synonyms widen the query and facet
//! filters narrow the result. This crate holds that logic plus a small CLI
//! to run it over JSON catalog files.

pub mod catalog;
pub mod cli;
pub mod error;
pub mod search;
pub mod tools;

pub use catalog::{Catalog, CatalogEntry, Level, Locale, LocalizedText, TextField};
pub use error::AppError;
pub use search::{FacetSelection, MemoizedSearch, SearchEngine, SearchRequest};
