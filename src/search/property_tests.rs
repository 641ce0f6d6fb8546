use super::engine::SearchEngine;
use super::facets::{Facet, FacetFilter, FacetSelection};
use super::fuzzy::FuzzyMatcher;
use super::normalize::normalize;
use crate::catalog::{CatalogEntry, Level, Locale, LocalizedText};
use proptest::char::range as char_range;
use proptest::prelude::*;

// Arabic letters and tashkeel, Latin letters in both cases, spaces
fn mixed_char() -> impl Strategy<Value = char> {
    prop_oneof![
        char_range('\u{0621}', '\u{0652}'),
        char_range('a', 'z'),
        char_range('A', 'Z'),
        char_range('\u{00C0}', '\u{00FF}'),
        Just(' '),
    ]
}

fn mixed_text(max: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(mixed_char(), 0..max).prop_map(|v| v.into_iter().collect())
}

fn lower_ascii(min: usize, max: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(char_range('a', 'z'), min..max)
        .prop_map(|v| v.into_iter().collect())
}

fn level() -> impl Strategy<Value = Option<Level>> {
    prop_oneof![
        Just(None),
        Just(Some(Level::Beginner)),
        Just(Some(Level::Intermediate)),
        Just(Some(Level::Advanced)),
    ]
}

fn entry() -> impl Strategy<Value = CatalogEntry> {
    (
        mixed_text(30),
        mixed_text(30),
        prop::sample::select(vec!["tools", "agents", "عام"]),
        prop::sample::select(vec![None, Some("automation"), Some("content")]),
        level(),
    )
        .prop_map(|(title, body, category, goal, level)| CatalogEntry {
            id: title.clone(),
            fields: vec![title.as_str().into(), LocalizedText::new(body.clone(), body).into()],
            category: category.to_string(),
            goal: goal.map(str::to_string),
            level,
        })
}

// Spellings of the `all` token a view or a command line may send
fn all_token() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["all", "ALL", "All", " all ", "aLl\t"])
}

fn selection() -> impl Strategy<Value = FacetSelection> {
    (
        prop::sample::subsequence(vec!["tools", "agents", "عام", "all"], 0..3),
        prop::sample::select(vec!["all", "automation", "content", "unknown"]),
        prop::sample::select(vec!["all", "beginner", "advanced"]),
    )
        .prop_map(|(categories, goal, level)| {
            FacetSelection::new()
                .with_categories(categories)
                .with_goal(goal)
                .with_level(level)
        })
}

proptest! {
    #[test]
    fn normalize_is_idempotent(text in mixed_text(40)) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_ignores_ascii_case(text in lower_ascii(0, 20)) {
        prop_assert_eq!(normalize(&text.to_uppercase()), normalize(&text));
    }

    #[test]
    fn substring_always_matches(
        prefix in mixed_text(15),
        needle in mixed_text(10),
        suffix in mixed_text(15)
    ) {
        let haystack = format!("{}{}{}", prefix, needle, suffix);
        prop_assert!(FuzzyMatcher::new().matches(&haystack, &needle));
    }

    #[test]
    fn short_needles_match_only_as_substrings(
        haystack in lower_ascii(0, 20),
        needle in lower_ascii(1, 4)
    ) {
        prop_assert_eq!(
            FuzzyMatcher::new().matches(&haystack, &needle),
            haystack.contains(&needle)
        );
    }

    #[test]
    fn empty_query_is_facet_only(
        catalog in proptest::collection::vec(entry(), 0..12),
        selection in selection()
    ) {
        let engine = SearchEngine::new();
        let searched: Vec<&CatalogEntry> = engine.search(&catalog, "", &selection, Locale::Ar);
        let filtered: Vec<&CatalogEntry> = catalog
            .iter()
            .filter(|e| FacetFilter::accepts(e, &selection))
            .collect();
        prop_assert_eq!(searched, filtered);
    }

    #[test]
    fn all_token_never_constrains(
        item in entry(),
        categories in prop::sample::subsequence(vec!["tools", "agents", "عام"], 0..3),
        token in all_token(),
        at in 0usize..4
    ) {
        let mut tokens = categories;
        let at = at.min(tokens.len());
        tokens.insert(at, token);

        let selection = FacetSelection {
            categories: FacetSelection::new().with_categories(&tokens).categories,
            goal: Facet::parse(token),
            level: Facet::parse(token),
        };
        prop_assert!(selection.is_unconstrained());
        prop_assert!(FacetFilter::accepts(&item, &selection));
    }

    #[test]
    fn all_token_in_one_facet_leaves_the_others(
        item in entry(),
        selection in selection(),
        token in all_token()
    ) {
        // resetting the goal to `all` can only widen what passes
        let widened = selection.clone().with_goal(token);
        if FacetFilter::accepts(&item, &selection) {
            prop_assert!(FacetFilter::accepts(&item, &widened));
        }
        prop_assert_eq!(&widened.categories, &selection.categories);
        prop_assert_eq!(&widened.level, &selection.level);
        prop_assert!(widened.goal.is_all());
    }

    #[test]
    fn results_are_ordered_subsequence(
        catalog in proptest::collection::vec(entry(), 0..12),
        query in mixed_text(6),
        selection in selection()
    ) {
        let engine = SearchEngine::new();
        let hits = engine.search_explained(&catalog, &query, &selection, Locale::Ar);
        for pair in hits.windows(2) {
            prop_assert!(pair[0].index < pair[1].index);
        }
        for hit in &hits {
            prop_assert!(FacetFilter::accepts(hit.entry, &selection));
        }
    }
}
