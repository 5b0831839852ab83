//! Sidebar tree: ordered sections of navigation items.
//!
//! # Example
//!
//! ```toml
//! [[sidebar]]
//! label = "Foundation"
//! items = [
//!     { label = "Overview & Vision", slug = "index" },
//!     { label = "Market Analysis", slug = "foundation/market-analysis" },
//! ]
//! ```

use serde::{Deserialize, Serialize};

/// Slug designating the site's landing page.
pub const ROOT_SLUG: &str = "index";

/// A named, ordered group of navigation items.
///
/// Declared order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSection {
    /// Group heading shown in the sidebar.
    pub label: String,

    /// Items in display order. A section with zero items fails validation.
    #[serde(default)]
    pub items: Vec<NavItem>,
}

/// One navigation entry pointing at a content slug.
///
/// The slug is a weak reference into the externally owned content
/// collection; existence is checked by
/// [`NavigationConfig::resolve`](crate::config::NavigationConfig::resolve).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Link text shown in the sidebar.
    pub label: String,

    /// Content reference: [`ROOT_SLUG`] or a path-like string
    /// (e.g., "foundation/market-analysis").
    pub slug: String,
}

impl NavItem {
    /// Whether this item points at the landing page.
    pub fn is_root(&self) -> bool {
        self.slug == ROOT_SLUG
    }
}

// ============================================================================
// tests
// ============================================================================
