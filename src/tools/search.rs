//! Search tool implementation
//!
//! Implements the `search` command: load a catalog, apply query and
//! facets, render the hits as markdown or JSON.

use crate::catalog::{Catalog, CatalogEntry, Level, Locale};
use crate::cli::{OutputFormat, SearchArgs};
use crate::error::{validate_limit, AppError};
use crate::search::normalize::{is_tashkeel, normalize_mapped};
use crate::search::{FacetSelection, MatchReason, SearchHit};
use serde::Serialize;
use tracing::debug;

/// Facet selection described by command-line arguments
pub fn selection_from_args(args: &SearchArgs) -> FacetSelection {
    let mut selection = FacetSelection::new().with_categories(&args.categories);
    if let Some(goal) = &args.goal {
        selection = selection.with_goal(goal);
    }
    if let Some(level) = &args.level {
        selection = selection.with_level(level);
    }
    selection
}

/// Shared implementation for the search command
pub fn execute_search(args: &SearchArgs) -> Result<String, AppError> {
    validate_limit(args.limit)?;

    let catalog = Catalog::load(&args.catalog)?;
    let engine = super::build_engine(args.synonyms.as_deref())?;
    let selection = selection_from_args(args);
    let query = args.query.as_deref().unwrap_or_default();

    debug!(
        "Search request: query '{}', locale {}, selection {:?}",
        query, args.locale, selection
    );

    let mut hits = engine.search_explained(catalog.entries(), query, &selection, args.locale);
    let total = hits.len();
    if let Some(limit) = args.limit {
        hits.truncate(limit);
    }

    match args.format {
        OutputFormat::Markdown => Ok(format_search_results(&hits, total, query, args.locale)),
        OutputFormat::Json => format_search_json(&hits, total, args.locale),
    }
}

/// Wrap every occurrence of each query term in `**bold**`.
///
/// Terms are located on the normalized text, so a diacritic-free query
/// highlights the vocalized spelling in the original.
pub fn highlight(text: &str, query: &str) -> String {
    let (chars, spans) = normalize_mapped(text);
    let mut ranges: Vec<(usize, usize)> = Vec::new();

    for term in query.split_whitespace() {
        let (needle, _) = normalize_mapped(term);
        if needle.is_empty() || needle.len() > chars.len() {
            continue;
        }

        let mut idx = 0usize;
        while idx + needle.len() <= chars.len() {
            if chars[idx..idx + needle.len()] == needle[..] {
                let start = spans[idx].0;
                let mut end = spans[idx + needle.len() - 1].1;
                // Keep trailing tashkeel attached to the highlighted letter
                end += text[end..]
                    .chars()
                    .take_while(|c| is_tashkeel(*c))
                    .map(char::len_utf8)
                    .sum::<usize>();
                ranges.push((start, end));
                idx += needle.len();
            } else {
                idx += 1;
            }
        }
    }

    if ranges.is_empty() {
        return text.to_string();
    }

    // Sort and merge ranges (merge adjacent and overlapping ranges)
    ranges.sort_by_key(|r| r.0);
    let mut merged: Vec<(usize, usize)> = Vec::new();
    for (s, e) in ranges {
        if let Some(last) = merged.last_mut() {
            // Also merge across a single newline so emphasis spans soft breaks
            if s <= last.1 || &text[last.1..s] == "\n" {
                last.1 = last.1.max(e);
                continue;
            }
        }
        merged.push((s, e));
    }

    let mut res = String::with_capacity(text.len() + merged.len() * 4);
    let mut last_idx = 0usize;
    for (s, e) in merged {
        res.push_str(&text[last_idx..s]);
        res.push_str("**");
        res.push_str(&text[s..e]);
        res.push_str("**");
        last_idx = e;
    }
    res.push_str(&text[last_idx..]);

    res
}

fn describe_reason(reason: MatchReason) -> String {
    match reason {
        MatchReason::Direct => "direct".to_string(),
        MatchReason::Synonym(goal) => format!("synonym:{}", goal),
    }
}

fn tags_line(entry: &CatalogEntry) -> String {
    let mut tags = vec![format!("`{}`", entry.id), entry.category.clone()];
    if let Some(goal) = &entry.goal {
        tags.push(goal.clone());
    }
    if let Some(level) = entry.level {
        tags.push(level.to_string());
    }
    tags.join(" · ")
}

/// Format search results into markdown for display
pub fn format_search_results(
    hits: &[SearchHit<'_>],
    total: usize,
    query: &str,
    locale: Locale,
) -> String {
    let mut md = String::new();
    if hits.len() < total {
        md.push_str(&format!(
            "# Search Results · {} entries (showing {})\n\n",
            total,
            hits.len()
        ));
    } else {
        md.push_str(&format!("# Search Results · {} entries\n\n", total));
    }

    if total == 0 {
        md.push_str("No entries match. Try a shorter query or reset the filters.\n");
        return md;
    }

    for hit in hits {
        let entry = hit.entry;
        md.push_str(&format!("## {}\n\n", highlight(entry.title(locale), query)));
        md.push_str(&format!("{}\n\n", tags_line(entry)));

        for field in entry.fields.iter().skip(1) {
            let text = field.resolve(locale);
            if !text.is_empty() {
                md.push_str(&format!("> {}\n\n", highlight(text, query)));
            }
        }

        if let MatchReason::Synonym(goal) = hit.reason {
            md.push_str(&format!("_Matched as a synonym of {}_\n\n", goal));
        }

        md.push_str("---\n\n");
    }

    md
}

#[derive(Serialize)]
struct HitView<'a> {
    id: &'a str,
    title: &'a str,
    category: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    goal: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<Level>,
    matched_by: String,
}

#[derive(Serialize)]
struct ResultsView<'a> {
    total: usize,
    locale: Locale,
    results: Vec<HitView<'a>>,
}

/// Format search results as pretty JSON
pub fn format_search_json(
    hits: &[SearchHit<'_>],
    total: usize,
    locale: Locale,
) -> Result<String, AppError> {
    let view = ResultsView {
        total,
        locale,
        results: hits
            .iter()
            .map(|hit| HitView {
                id: &hit.entry.id,
                title: hit.entry.title(locale),
                category: &hit.entry.category,
                goal: hit.entry.goal.as_deref(),
                level: hit.entry.level,
                matched_by: describe_reason(hit.reason),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&view)?)
}
