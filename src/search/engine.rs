//! Search Engine Integration
//!
//! Ties together facet filtering, normalization, fuzzy matching and goal
//! synonyms to derive the visible subset of a catalog. Results keep the
//! catalog's order; nothing is scored or re-ranked.

use super::facets::{FacetFilter, FacetSelection};
use super::fuzzy::{FuzzyMatcher, MatchConfig};
use super::normalize::normalize;
use super::synonyms::{Goal, SynonymTable};
use crate::catalog::{Catalog, CatalogEntry, Locale};
use serde::{Deserialize, Deserializer};
use std::sync::Arc;
use tracing::debug;

/// Why an entry was included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchReason {
    /// The query matched the entry's text
    Direct,
    /// The query is a synonym of this goal and the entry carries the goal
    /// or names it in its text
    Synonym(Goal),
}

/// An included entry together with its catalog position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit<'a> {
    pub index: usize,
    pub entry: &'a CatalogEntry,
    pub reason: MatchReason,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn facet_tokens<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Everything the view layer holds that affects the result set
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SearchRequest {
    pub query: String,
    pub selection: FacetSelection,
    pub locale: Locale,
}

impl SearchRequest {
    /// A missing query is the empty query
    pub fn new(query: Option<&str>, selection: FacetSelection, locale: Locale) -> Self {
        Self {
            query: query.unwrap_or_default().to_string(),
            selection,
            locale,
        }
    }
}

/// Wire form of a request as sent by a view layer, tolerant of nulls
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchRequestParams {
    #[serde(deserialize_with = "null_as_empty")]
    pub query: String,
    #[serde(deserialize_with = "facet_tokens")]
    pub categories: Vec<String>,
    pub goal: Option<String>,
    pub level: Option<String>,
    pub locale: Locale,
}

impl From<SearchRequestParams> for SearchRequest {
    fn from(params: SearchRequestParams) -> Self {
        let mut selection = FacetSelection::new().with_categories(&params.categories);
        if let Some(goal) = &params.goal {
            selection = selection.with_goal(goal);
        }
        if let Some(level) = &params.level {
            selection = selection.with_level(level);
        }
        Self {
            query: params.query,
            selection,
            locale: params.locale,
        }
    }
}

/// Search engine that combines facet filtering, matching and synonyms
#[derive(Debug, Clone)]
pub struct SearchEngine {
    fuzzy_matcher: FuzzyMatcher,
    synonyms: SynonymTable,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine {
    /// Create a new search engine with the builtin synonyms
    pub fn new() -> Self {
        Self {
            fuzzy_matcher: FuzzyMatcher::new(),
            synonyms: SynonymTable::builtin(),
        }
    }

    pub fn with_synonyms(mut self, synonyms: SynonymTable) -> Self {
        self.synonyms = synonyms;
        self
    }

    pub fn with_config(mut self, config: MatchConfig) -> Self {
        self.fuzzy_matcher = FuzzyMatcher::with_config(config);
        self
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    /// Entries of `catalog` matching `query` and `selection`, in order
    pub fn search<'a>(
        &self,
        catalog: &'a [CatalogEntry],
        query: &str,
        selection: &FacetSelection,
        locale: Locale,
    ) -> Vec<&'a CatalogEntry> {
        self.search_explained(catalog, query, selection, locale)
            .into_iter()
            .map(|hit| hit.entry)
            .collect()
    }

    /// Like [`search`](Self::search) but also reports why each entry matched
    pub fn search_explained<'a>(
        &self,
        catalog: &'a [CatalogEntry],
        query: &str,
        selection: &FacetSelection,
        locale: Locale,
    ) -> Vec<SearchHit<'a>> {
        let needle = normalize(query);
        // The query is fixed for the whole pass, so which goals it evokes is too
        let evoked = self.evoked_goals(&needle, locale);

        let hits: Vec<SearchHit<'a>> = catalog
            .iter()
            .enumerate()
            .filter(|(_, entry)| FacetFilter::accepts(entry, selection))
            .filter_map(|(index, entry)| {
                self.match_entry(entry, &needle, &evoked, locale)
                    .map(|reason| SearchHit {
                        index,
                        entry,
                        reason,
                    })
            })
            .collect();

        debug!(
            "Search '{}' ({}) kept {} of {} entries, {} goals evoked",
            query,
            locale,
            hits.len(),
            catalog.len(),
            evoked.len()
        );

        hits
    }

    fn match_entry(
        &self,
        entry: &CatalogEntry,
        needle: &str,
        evoked: &[Goal],
        locale: Locale,
    ) -> Option<MatchReason> {
        let text = normalize(&entry.searchable_text(locale));

        if self.fuzzy_matcher.matches_normalized(&text, needle) {
            return Some(MatchReason::Direct);
        }

        // A synonym alone is not enough: the entry must carry the goal or
        // name it literally
        evoked
            .iter()
            .find(|goal| {
                entry.goal.as_deref() == Some(goal.as_str()) || text.contains(goal.as_str())
            })
            .map(|goal| MatchReason::Synonym(*goal))
    }

    /// Goals whose token or variants the normalized query refers to
    fn evoked_goals(&self, needle: &str, locale: Locale) -> Vec<Goal> {
        if needle.is_empty() {
            return Vec::new();
        }

        self.synonyms
            .entries(locale)
            .filter(|(goal, variants)| {
                needle == goal.as_str()
                    || variants.iter().any(|variant| {
                        let variant = normalize(variant);
                        variant == needle
                            || self.fuzzy_matcher.matches_normalized(&variant, needle)
                            || self.fuzzy_matcher.matches_normalized(needle, &variant)
                    })
            })
            .map(|(goal, _)| goal)
            .collect()
    }
}

/// Last-result cache over a shared catalog.
///
/// A view recomputes on every keystroke and facet toggle, and often with
/// unchanged inputs (re-renders, toggling a chip twice). Identical requests
/// against the same catalog return the cached positions.
#[derive(Debug)]
pub struct MemoizedSearch {
    engine: SearchEngine,
    catalog: Arc<Catalog>,
    last: Option<(SearchRequest, Vec<usize>)>,
    recomputations: usize,
}

impl MemoizedSearch {
    pub fn new(engine: SearchEngine, catalog: Arc<Catalog>) -> Self {
        Self {
            engine,
            catalog,
            last: None,
            recomputations: 0,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Swap the catalog; the cache is dropped unless it is the same one
    pub fn set_catalog(&mut self, catalog: Arc<Catalog>) {
        if !Arc::ptr_eq(&self.catalog, &catalog) {
            self.catalog = catalog;
            self.last = None;
        }
    }

    /// Number of times results were actually computed
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    pub fn results(&mut self, request: &SearchRequest) -> Vec<&CatalogEntry> {
        let cached = matches!(&self.last, Some((last, _)) if last == request);

        if cached {
            debug!("Search cache hit for '{}'", request.query);
        } else {
            let indices = self
                .engine
                .search_explained(
                    self.catalog.entries(),
                    &request.query,
                    &request.selection,
                    request.locale,
                )
                .into_iter()
                .map(|hit| hit.index)
                .collect();
            self.recomputations += 1;
            self.last = Some((request.clone(), indices));
        }

        let entries = self.catalog.entries();
        match &self.last {
            Some((_, indices)) => indices.iter().map(|&i| &entries[i]).collect(),
            None => Vec::new(),
        }
    }
}
