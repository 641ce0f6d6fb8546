//! Fuzzy matching
//!
//! A query matches a field when its normalized form is a contiguous
//! substring of the field, or, for queries longer than a few characters,
//! when enough of its distinct characters occur anywhere in the field.
//! This tolerates a dropped or swapped letter without pulling in
//! unrelated entries for two- and three-letter prefixes.

use super::normalize::normalize;
use std::collections::HashSet;

/// Minimum share of needle characters that must appear in the haystack
pub const DEFAULT_COVERAGE_THRESHOLD: f64 = 0.7;

/// Needles this short (in chars) must match as exact substrings
pub const DEFAULT_SHORT_QUERY_MAX_CHARS: usize = 3;

/// Matching thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
    pub coverage_threshold: f64,
    pub short_query_max_chars: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            coverage_threshold: DEFAULT_COVERAGE_THRESHOLD,
            short_query_max_chars: DEFAULT_SHORT_QUERY_MAX_CHARS,
        }
    }
}

/// How a needle matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Empty needle, matches everything
    Empty,
    /// Contiguous substring
    Substring,
    /// Character coverage at or above the threshold
    Coverage,
}

/// Fuzzy matcher with configuration
#[derive(Debug, Clone, Default)]
pub struct FuzzyMatcher {
    config: MatchConfig,
}

impl FuzzyMatcher {
    /// Create a new fuzzy matcher with default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fuzzy matcher with custom thresholds
    pub fn with_config(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Whether `needle` matches `haystack`; both are normalized first
    pub fn matches(&self, haystack: &str, needle: &str) -> bool {
        self.match_kind(haystack, needle).is_some()
    }

    /// Like [`matches`](Self::matches) but reports how the match was made
    pub fn match_kind(&self, haystack: &str, needle: &str) -> Option<MatchKind> {
        self.match_kind_normalized(&normalize(haystack), &normalize(needle))
    }

    /// Match inputs that are already normalized
    pub fn matches_normalized(&self, haystack: &str, needle: &str) -> bool {
        self.match_kind_normalized(haystack, needle).is_some()
    }

    pub fn match_kind_normalized(&self, haystack: &str, needle: &str) -> Option<MatchKind> {
        if needle.is_empty() {
            return Some(MatchKind::Empty);
        }

        if haystack.contains(needle) {
            return Some(MatchKind::Substring);
        }

        if needle.chars().count() <= self.config.short_query_max_chars {
            return None;
        }

        if coverage(haystack, needle) >= self.config.coverage_threshold {
            Some(MatchKind::Coverage)
        } else {
            None
        }
    }
}

/// Share of the needle's distinct characters found anywhere in the
/// haystack, divided by the needle's full length in chars
pub fn coverage(haystack: &str, needle: &str) -> f64 {
    let len = needle.chars().count();
    if len == 0 {
        return 0.0;
    }

    let distinct: HashSet<char> = needle.chars().collect();
    let present = distinct.iter().filter(|c| haystack.contains(**c)).count();

    present as f64 / len as f64
}
