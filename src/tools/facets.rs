//! Facets tool implementation
//!
//! Counts entries per category, goal and level so a view can label its
//! filter controls ("الكل (24)", "tools (9)", ...).

use crate::catalog::Catalog;
use crate::cli::FacetsArgs;
use crate::error::AppError;
use crate::search::FacetCounts;

pub fn execute_facets(args: &FacetsArgs) -> Result<String, AppError> {
    let catalog = Catalog::load(&args.catalog)?;
    Ok(format_facet_counts(&FacetCounts::tally(catalog.entries())))
}

pub fn format_facet_counts(counts: &FacetCounts) -> String {
    let mut md = format!("# Facets · {} entries\n", counts.total);

    md.push_str("\n## Categories\n\n");
    for (category, count) in &counts.categories {
        md.push_str(&format!("- {} ({})\n", category, count));
    }

    if !counts.goals.is_empty() {
        md.push_str("\n## Goals\n\n");
        for (goal, count) in &counts.goals {
            md.push_str(&format!("- {} ({})\n", goal, count));
        }
    }

    if !counts.levels.is_empty() {
        md.push_str("\n## Levels\n\n");
        for (level, count) in &counts.levels {
            md.push_str(&format!("- {} ({})\n", level, count));
        }
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogEntry, Level};

    #[test]
    fn test_format_facet_counts() {
        let entries = vec![
            CatalogEntry::new("a", "tools").with_goal("sales").with_level(Level::Advanced),
            CatalogEntry::new("b", "tools"),
            CatalogEntry::new("c", "عام"),
        ];
        let md = format_facet_counts(&FacetCounts::tally(&entries));

        assert!(md.starts_with("# Facets · 3 entries"));
        assert!(md.contains("- tools (2)\n- عام (1)"));
        assert!(md.contains("## Goals\n\n- sales (1)"));
        assert!(md.contains("## Levels\n\n- advanced (1)"));
    }

    #[test]
    fn test_format_facet_counts_omits_empty_sections() {
        let entries = vec![CatalogEntry::new("a", "عام")];
        let md = format_facet_counts(&FacetCounts::tally(&entries));
        assert!(!md.contains("## Goals"));
        assert!(!md.contains("## Levels"));
    }
}
