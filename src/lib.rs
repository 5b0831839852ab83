//! docnav - declarative, validated navigation for documentation sites.
//!
//! This crate models the navigation configuration of a documentation site:
//! site identity (title, logo pair, social links) plus an ordered two-level
//! sidebar tree mapping labels to content slugs. It parses the declaration
//! from `site.toml`, validates it eagerly (unique slugs, a single root item,
//! non-empty labels, no empty sections), and exposes an immutable, queryable
//! view to the host rendering pipeline.
//!
//! Content loading, rendering, asset resolution, and routing stay with the
//! host framework; this crate only points at content via slugs and can
//! cross-check those references against the host's content collection with
//! [`NavigationConfig::resolve`].
//!
//! # Example
//!
//! ```
//! use docnav::{ContentIndex, SiteConfig};
//!
//! let config = SiteConfig::from_str(r#"
//! title = "My Docs"
//!
//! [[sidebar]]
//! label = "Guide"
//! items = [
//!     { label = "Overview", slug = "index" },
//!     { label = "Setup", slug = "guide/setup" },
//! ]
//! "#)?;
//!
//! let nav = config.into_nav()?;
//! assert_eq!(nav.lookup("index").unwrap().item.label, "Overview");
//!
//! let content: ContentIndex = ["index"].into_iter().collect();
//! let unresolved = nav.resolve(&content);
//! assert_eq!(unresolved[0].slug, "guide/setup");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod logger;

pub use config::{
    CONFIG_FILE, ConfigError, ContentIndex, Diagnostic, Diagnostics, ItemPath, LabelPath,
    LogoConfig, NavItem, NavRef, NavSection, NavigationConfig, ROOT_SLUG, SectionPath, SiteConfig,
    SiteIdentity, SocialIcon, SocialLink, UnresolvedReference, ValidationError, report_unresolved,
};
