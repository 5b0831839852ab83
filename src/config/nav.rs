//! Validated navigation tree with O(1) slug lookup.
//!
//! [`NavigationConfig`] is the read-only view the host rendering pipeline
//! consumes. It is built once from a parsed [`SiteConfig`](super::SiteConfig),
//! validated eagerly, and never mutated afterwards; sharing it across build
//! workers needs nothing beyond `&` references.

use rustc_hash::FxHashMap;

use super::error::{
    ConfigError, Diagnostics, ItemPath, LabelPath, SectionPath, ValidationError,
};
use super::identity::SiteIdentity;
use super::resolve::{ContentIndex, UnresolvedReference};
use super::sidebar::{NavItem, NavSection, ROOT_SLUG};
use super::util::extract_url_path;

// ============================================================================
// NavigationConfig
// ============================================================================

/// Immutable, validated site navigation.
///
/// Construction enforces:
/// - every slug is unique across the whole tree
/// - exactly one item references [`ROOT_SLUG`]
/// - every label is non-empty after trimming
/// - every section has at least one item
///
/// Referential integrity against the content collection is deliberately
/// deferred to [`resolve`](Self::resolve) since it needs an external
/// collaborator.
#[derive(Debug, Clone)]
pub struct NavigationConfig {
    identity: SiteIdentity,
    sections: Vec<NavSection>,
    /// slug -> (section index, item index), built once at construction.
    index: FxHashMap<String, (usize, usize)>,
    /// URL path component of `identity.url`, if any.
    base_path: Option<String>,
}

impl NavigationConfig {
    /// Validate and build the navigation view.
    ///
    /// Collects every structural defect before failing, so authors see the
    /// full list at once.
    pub fn new(identity: SiteIdentity, sections: Vec<NavSection>) -> Result<Self, ConfigError> {
        let mut diag = Diagnostics::new();

        identity.validate(&mut diag);
        let index = validate_tree(&sections, &mut diag);

        diag.into_result().map_err(ConfigError::Invalid)?;

        let base_path = identity
            .url
            .as_deref()
            .and_then(extract_url_path)
            .filter(|path| !path.is_empty());

        Ok(Self {
            identity,
            sections,
            index,
            base_path,
        })
    }

    /// Site metadata.
    pub fn identity(&self) -> &SiteIdentity {
        &self.identity
    }

    /// Sections in declared order, unmodified.
    pub fn sections(&self) -> &[NavSection] {
        &self.sections
    }

    /// Deployment base path extracted from the site URL
    /// (e.g., "my-project" for "https://example.github.io/my-project").
    pub fn base_path(&self) -> Option<&str> {
        self.base_path.as_deref()
    }

    /// Total number of navigation items across all sections.
    pub fn item_count(&self) -> usize {
        self.index.len()
    }

    /// O(1) reverse lookup from slug to its item and containing section.
    ///
    /// Returns `None` for slugs absent from the tree.
    pub fn lookup(&self, slug: &str) -> Option<NavRef<'_>> {
        let &(section_index, item_index) = self.index.get(slug)?;
        let section = &self.sections[section_index];
        Some(NavRef {
            section_index,
            item_index,
            section,
            item: &section.items[item_index],
        })
    }

    /// Cross-check every slug against the external content collection.
    ///
    /// Returns the (possibly empty) list of items whose slug has no matching
    /// content entry, in tree order. Pure: never mutates the configuration,
    /// never fails, and the same content index always yields the same list.
    pub fn resolve(&self, content: &ContentIndex) -> Vec<UnresolvedReference> {
        let mut unresolved = Vec::new();
        for (section_index, section) in self.sections.iter().enumerate() {
            for (item_index, item) in section.items.iter().enumerate() {
                if !content.contains(&item.slug) {
                    unresolved.push(UnresolvedReference {
                        slug: item.slug.clone(),
                        path: item_path(section, section_index, item, item_index),
                    });
                }
            }
        }
        unresolved
    }
}

// ============================================================================
// NavRef
// ============================================================================

/// A resolved lookup: an item together with its containing section.
#[derive(Debug, Clone, Copy)]
pub struct NavRef<'a> {
    section_index: usize,
    item_index: usize,
    /// The containing section.
    pub section: &'a NavSection,
    /// The matched item.
    pub item: &'a NavItem,
}

impl NavRef<'_> {
    /// Location of the item within the tree.
    pub fn path(&self) -> ItemPath {
        item_path(self.section, self.section_index, self.item, self.item_index)
    }
}

// ============================================================================
// tree validation
// ============================================================================

fn item_path(
    section: &NavSection,
    section_index: usize,
    item: &NavItem,
    item_index: usize,
) -> ItemPath {
    ItemPath {
        section: section_index,
        section_label: section.label.clone(),
        item: item_index,
        item_label: item.label.clone(),
    }
}

/// Single linear pass over the tree: label and section checks, slug
/// uniqueness, root count. Builds the slug index as it goes.
fn validate_tree(
    sections: &[NavSection],
    diag: &mut Diagnostics,
) -> FxHashMap<String, (usize, usize)> {
    let mut index: FxHashMap<String, (usize, usize)> = FxHashMap::default();

    for (section_index, section) in sections.iter().enumerate() {
        let section_path = SectionPath {
            section: section_index,
            label: section.label.clone(),
        };

        if section.label.trim().is_empty() {
            diag.error(ValidationError::EmptyLabel {
                path: LabelPath::Section(section_path.clone()),
            });
        }

        if section.items.is_empty() {
            diag.error_with_hint(
                ValidationError::EmptySection { path: section_path },
                "declare at least one item, or drop the section",
            );
            continue;
        }

        for (item_index, item) in section.items.iter().enumerate() {
            let path = item_path(section, section_index, item, item_index);

            if item.label.trim().is_empty() {
                diag.error(ValidationError::EmptyLabel {
                    path: LabelPath::Item(path.clone()),
                });
            }

            match index.get(&item.slug) {
                Some(&(first_section, first_item)) => {
                    let first = item_path(
                        &sections[first_section],
                        first_section,
                        &sections[first_section].items[first_item],
                        first_item,
                    );
                    // A duplicated root slug violates the single-root
                    // invariant; report the more specific kind once.
                    if item.is_root() {
                        diag.error(ValidationError::MultipleRoots {
                            root: ROOT_SLUG.to_string(),
                            first,
                            second: path,
                        });
                    } else {
                        diag.error(ValidationError::DuplicateSlug {
                            slug: item.slug.clone(),
                            first,
                            second: path,
                        });
                    }
                }
                None => {
                    index.insert(item.slug.clone(), (section_index, item_index));
                }
            }
        }
    }

    if !index.contains_key(ROOT_SLUG) {
        diag.error_with_hint(
            ValidationError::MissingRoot {
                root: ROOT_SLUG.to_string(),
            },
            format!("one item must use slug = \"{ROOT_SLUG}\" for the landing page"),
        );
    }

    index
}

// ============================================================================
// tests
// ============================================================================
