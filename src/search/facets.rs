//! Facet filtering
//!
//! Category is multi-select (union of the chosen categories); goal and
//! level are single-select. Every facet has an `all` state that places no
//! constraint. An entry passes when it satisfies all three facets.

use crate::catalog::{CatalogEntry, Level};
use std::collections::BTreeSet;

/// Token meaning "no constraint" for any facet
pub const ALL_TOKEN: &str = "all";

fn is_all_token(token: &str) -> bool {
    token.trim().eq_ignore_ascii_case(ALL_TOKEN)
}

/// One facet's selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Facet<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Facet<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }
}

impl Facet<String> {
    /// `all` (any case) is the unconstrained facet; anything else is an
    /// exact token
    pub fn parse(token: &str) -> Self {
        if is_all_token(token) {
            Facet::All
        } else {
            Facet::Only(token.trim().to_string())
        }
    }

    /// Exact match on the token; a missing value never matches a specific
    /// selection
    pub fn admits(&self, value: Option<&str>) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(wanted) => value == Some(wanted.as_str()),
        }
    }
}

/// The three facets chosen by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FacetSelection {
    pub categories: Facet<BTreeSet<String>>,
    pub goal: Facet<String>,
    pub level: Facet<String>,
}

impl FacetSelection {
    /// No constraints
    pub fn new() -> Self {
        Self::default()
    }

    /// Select categories by token. An empty list or one containing `all`
    /// removes the category constraint.
    pub fn with_categories<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selected = BTreeSet::new();
        for token in tokens {
            let token = token.as_ref();
            if is_all_token(token) {
                self.categories = Facet::All;
                return self;
            }
            selected.insert(token.trim().to_string());
        }

        self.categories = if selected.is_empty() {
            Facet::All
        } else {
            Facet::Only(selected)
        };
        self
    }

    pub fn with_goal(mut self, token: &str) -> Self {
        self.goal = Facet::parse(token);
        self
    }

    pub fn with_level(mut self, token: &str) -> Self {
        self.level = Facet::parse(token);
        self
    }

    /// Toggle a category chip: `all` resets, a selected category is
    /// removed, an unselected one is added. Removing the last selected
    /// category falls back to `all`.
    pub fn toggle_category(&mut self, token: &str) {
        if is_all_token(token) {
            self.categories = Facet::All;
            return;
        }

        let token = token.trim().to_string();
        let next = match std::mem::take(&mut self.categories) {
            Facet::All => Facet::Only(BTreeSet::from([token])),
            Facet::Only(mut selected) => {
                if !selected.remove(&token) {
                    selected.insert(token);
                }
                if selected.is_empty() {
                    Facet::All
                } else {
                    Facet::Only(selected)
                }
            }
        };
        self.categories = next;
    }

    /// True when no facet constrains anything
    pub fn is_unconstrained(&self) -> bool {
        self.categories.is_all() && self.goal.is_all() && self.level.is_all()
    }
}

/// Exact-match facet predicate
pub struct FacetFilter;

impl FacetFilter {
    pub fn accepts(entry: &CatalogEntry, selection: &FacetSelection) -> bool {
        let category_ok = match &selection.categories {
            Facet::All => true,
            Facet::Only(selected) => selected.contains(&entry.category),
        };

        category_ok
            && selection.goal.admits(entry.goal.as_deref())
            && selection.level.admits(entry.level.as_ref().map(Level::as_str))
    }
}

/// Entry counts per facet value, for labelling filter controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetCounts {
    pub total: usize,
    /// Categories in first-seen order
    pub categories: Vec<(String, usize)>,
    /// Goals in first-seen order
    pub goals: Vec<(String, usize)>,
    /// Levels in ordinal order, only those present
    pub levels: Vec<(Level, usize)>,
}

fn bump(counts: &mut Vec<(String, usize)>, token: &str) {
    match counts.iter_mut().find(|(seen, _)| seen == token) {
        Some((_, count)) => *count += 1,
        None => counts.push((token.to_string(), 1)),
    }
}

impl FacetCounts {
    pub fn tally(entries: &[CatalogEntry]) -> Self {
        let mut counts = FacetCounts {
            total: entries.len(),
            ..Default::default()
        };
        let mut levels = [0usize; 3];

        for entry in entries {
            bump(&mut counts.categories, &entry.category);
            if let Some(goal) = &entry.goal {
                bump(&mut counts.goals, goal);
            }
            if let Some(level) = entry.level {
                levels[level as usize] += 1;
            }
        }

        counts.levels = Level::ALL
            .into_iter()
            .zip(levels)
            .filter(|(_, count)| *count > 0)
            .collect();

        counts
    }

    pub fn category(&self, token: &str) -> usize {
        self.categories
            .iter()
            .find(|(seen, _)| seen == token)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, category: &str, goal: Option<&str>, level: Option<Level>) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            fields: vec![],
            category: category.to_string(),
            goal: goal.map(str::to_string),
            level,
        }
    }

    fn sample() -> Vec<CatalogEntry> {
        vec![
            entry("a", "tools", Some("automation"), Some(Level::Beginner)),
            entry("b", "agents", Some("content"), Some(Level::Advanced)),
            entry("c", "tools", None, None),
            entry("d", "prompts", Some("automation"), Some(Level::Intermediate)),
        ]
    }

    fn accepted<'a>(entries: &'a [CatalogEntry], selection: &FacetSelection) -> Vec<&'a str> {
        entries
            .iter()
            .filter(|e| FacetFilter::accepts(e, selection))
            .map(|e| e.id.as_str())
            .collect()
    }

    #[test]
    fn test_default_selection_accepts_everything() {
        let entries = sample();
        assert!(FacetSelection::new().is_unconstrained());
        assert_eq!(accepted(&entries, &FacetSelection::new()), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_category_union() {
        let entries = sample();
        let selection = FacetSelection::new().with_categories(["tools", "prompts"]);
        assert_eq!(accepted(&entries, &selection), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_all_token_in_categories_is_neutral() {
        let entries = sample();
        let selection = FacetSelection::new().with_categories(["tools", "ALL"]);
        assert_eq!(selection.categories, Facet::All);
        assert_eq!(accepted(&entries, &selection).len(), 4);
    }

    #[test]
    fn test_all_token_spellings() {
        assert_eq!(Facet::parse("ALL"), Facet::All);
        assert_eq!(Facet::parse(" all "), Facet::All);
        assert_eq!(Facet::parse("allx"), Facet::Only("allx".to_string()));

        let entries = sample();
        let selection = FacetSelection {
            categories: FacetSelection::new()
                .with_categories(["prompts", " all ", "agents"])
                .categories,
            goal: Facet::parse("ALL"),
            level: Facet::parse("All"),
        };
        assert!(selection.is_unconstrained());
        assert_eq!(accepted(&entries, &selection), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_goal_exact_match() {
        let entries = sample();
        let selection = FacetSelection::new().with_goal("automation");
        assert_eq!(accepted(&entries, &selection), vec!["a", "d"]);

        // an entry without a goal never matches a specific goal
        let selection = FacetSelection::new().with_goal("content");
        assert_eq!(accepted(&entries, &selection), vec!["b"]);
    }

    #[test]
    fn test_level_exact_match() {
        let entries = sample();
        let selection = FacetSelection::new().with_level("advanced");
        assert_eq!(accepted(&entries, &selection), vec!["b"]);
        let selection = FacetSelection::new().with_level("all");
        assert_eq!(accepted(&entries, &selection).len(), 4);
    }

    #[test]
    fn test_conjunction() {
        let entries = sample();
        let selection = FacetSelection::new()
            .with_categories(["tools", "prompts"])
            .with_goal("automation")
            .with_level("intermediate");
        assert_eq!(accepted(&entries, &selection), vec!["d"]);
    }

    #[test]
    fn test_unknown_tokens_never_match() {
        let entries = sample();
        assert!(accepted(&entries, &FacetSelection::new().with_categories(["games"])).is_empty());
        assert!(accepted(&entries, &FacetSelection::new().with_goal("astrology")).is_empty());
        assert!(accepted(&entries, &FacetSelection::new().with_level("expert")).is_empty());
    }

    #[test]
    fn test_toggle_category() {
        let mut selection = FacetSelection::new();
        selection.toggle_category("tools");
        selection.toggle_category("agents");
        assert_eq!(
            selection.categories,
            Facet::Only(BTreeSet::from(["agents".to_string(), "tools".to_string()]))
        );

        selection.toggle_category("tools");
        assert_eq!(selection.categories, Facet::Only(BTreeSet::from(["agents".to_string()])));

        // removing the last category falls back to all
        selection.toggle_category("agents");
        assert_eq!(selection.categories, Facet::All);

        selection.toggle_category("tools");
        selection.toggle_category("all");
        assert_eq!(selection.categories, Facet::All);
    }

    #[test]
    fn test_facet_counts() {
        let counts = FacetCounts::tally(&sample());
        assert_eq!(counts.total, 4);
        assert_eq!(
            counts.categories,
            vec![
                ("tools".to_string(), 2),
                ("agents".to_string(), 1),
                ("prompts".to_string(), 1)
            ]
        );
        assert_eq!(
            counts.goals,
            vec![("automation".to_string(), 2), ("content".to_string(), 1)]
        );
        assert_eq!(
            counts.levels,
            vec![(Level::Beginner, 1), (Level::Intermediate, 1), (Level::Advanced, 1)]
        );
        assert_eq!(counts.category("tools"), 2);
        assert_eq!(counts.category("games"), 0);
    }
}
