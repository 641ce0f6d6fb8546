//! Multilingual catalog search with fuzzy matching and facet filters
//!
//! Normalization folds Arabic spelling variants, the fuzzy matcher
//! tolerates small typos, goal synonyms widen what a query can reach and
//! facets narrow the result. Every search is a pure recomputation over a
//! read-only catalog.

pub mod engine;
pub mod facets;
pub mod fuzzy;
pub mod normalize;
pub mod synonyms;

#[cfg(test)]
mod property_tests;

pub use engine::{
    MatchReason, MemoizedSearch, SearchEngine, SearchHit, SearchRequest, SearchRequestParams,
};
pub use facets::{Facet, FacetCounts, FacetFilter, FacetSelection, ALL_TOKEN};
pub use fuzzy::{FuzzyMatcher, MatchConfig, MatchKind};
pub use normalize::normalize;
pub use synonyms::{Goal, SynonymTable};
