//! Referential integrity against the externally owned content collection.
//!
//! Navigation slugs are weak references: the tree only points at content, it
//! never owns it. The host loads its content collection, hands the known
//! slugs over as a [`ContentIndex`], and gets back the full list of dangling
//! references in one batch. Gaps are diagnostics, not failures, so authors
//! can keep iterating on a partial content set.

use owo_colors::OwoColorize;
use rustc_hash::FxHashSet;
use std::fmt;

use super::error::ItemPath;

// ============================================================================
// ContentIndex
// ============================================================================

/// The set of slugs known to the external content collection.
#[derive(Debug, Clone, Default)]
pub struct ContentIndex {
    slugs: FxHashSet<String>,
}

impl ContentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a known content slug.
    pub fn insert(&mut self, slug: impl Into<String>) {
        self.slugs.insert(slug.into());
    }

    /// Check whether a slug has a matching content entry.
    pub fn contains(&self, slug: &str) -> bool {
        self.slugs.contains(slug)
    }

    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ContentIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            slugs: iter.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// UnresolvedReference
// ============================================================================

/// A navigation item whose slug has no matching content entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedReference {
    /// The dangling slug.
    pub slug: String,
    /// Where in the tree it is declared.
    pub path: ItemPath,
}

impl fmt::Display for UnresolvedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.path,
            "→ missing content entry".red(),
            format_args!("`{}`", self.slug).cyan()
        )
    }
}

/// Log every unresolved reference, one line each.
pub fn report_unresolved(unresolved: &[UnresolvedReference]) {
    if unresolved.is_empty() {
        return;
    }
    crate::log!(
        "validate";
        "{} navigation {} without content:",
        unresolved.len(),
        if unresolved.len() == 1 { "entry" } else { "entries" }
    );
    for reference in unresolved {
        eprintln!("- {reference}");
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_index_from_iter() {
        let index: ContentIndex = ["index", "gtm/pricing"].into_iter().collect();
        assert_eq!(index.len(), 2);
        assert!(index.contains("index"));
        assert!(index.contains("gtm/pricing"));
        assert!(!index.contains("gtm/strategy"));
    }

    #[test]
    fn test_content_index_insert() {
        let mut index = ContentIndex::new();
        assert!(index.is_empty());
        index.insert("index");
        index.insert("index");
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_unresolved_display_names_location_and_slug() {
        let reference = UnresolvedReference {
            slug: "gtm/pricing".into(),
            path: ItemPath {
                section: 2,
                section_label: "Go-to-Market".into(),
                item: 3,
                item_label: "Pricing Strategy".into(),
            },
        };
        let display = reference.to_string();
        assert!(display.contains("sidebar[2] \"Go-to-Market\""));
        assert!(display.contains("`gtm/pricing`"));
    }
}
