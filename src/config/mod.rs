//! Navigation configuration management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── error      # ConfigError, ValidationError, Diagnostics
//! ├── identity   # SiteIdentity, LogoConfig, SocialLink
//! ├── sidebar    # NavSection, NavItem
//! ├── nav        # NavigationConfig (validated view)
//! ├── resolve    # ContentIndex, UnresolvedReference
//! ├── util       # config discovery, URL path extraction
//! └── mod.rs     # SiteConfig (this file)
//! ```
//!
//! # Top-level options
//!
//! | Option    | Purpose                                          |
//! |-----------|--------------------------------------------------|
//! | `title`   | Site title (required)                            |
//! | `url`     | Site URL; path component becomes the base path   |
//! | `logo`    | Light/dark logo pair, optional title replacement |
//! | `social`  | Ordered list of social links                     |
//! | `sidebar` | Ordered list of navigation sections              |

pub mod error;
pub mod identity;
pub mod nav;
pub mod resolve;
pub mod sidebar;
mod util;

use util::find_config_file;

pub use error::{
    ConfigError, Diagnostic, Diagnostics, ItemPath, LabelPath, SectionPath, ValidationError,
};
pub use identity::{LogoConfig, SiteIdentity, SocialIcon, SocialLink};
pub use nav::{NavRef, NavigationConfig};
pub use resolve::{ContentIndex, UnresolvedReference, report_unresolved};
pub use sidebar::{NavItem, NavSection, ROOT_SLUG};

use crate::{debug, log};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const CONFIG_FILE: &str = "site.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing site.toml
///
/// This is the raw file model; [`into_nav`](Self::into_nav) validates it and
/// produces the immutable [`NavigationConfig`] view the host consumes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site title (required).
    pub title: String,

    /// Site URL (e.g., "https://example.github.io/my-project").
    pub url: Option<String>,

    /// Light/dark logo pair.
    pub logo: Option<LogoConfig>,

    /// Social links in display order.
    pub social: Vec<SocialLink>,

    /// Navigation sections in display order.
    pub sidebar: Vec<NavSection>,
}

impl SiteConfig {
    /// Find, parse, and validate the configuration in one step.
    ///
    /// Searches upward from the current directory for `config_name`
    /// (usually [`CONFIG_FILE`]) and returns the validated navigation view.
    pub fn load(config_name: impl AsRef<Path>) -> Result<NavigationConfig> {
        let config_name = config_name.as_ref();
        let Some(config_path) = find_config_file(config_name) else {
            return Err(ConfigError::NotFound(config_name.to_path_buf()).into());
        };

        let mut config = Self::from_path(&config_path)?;
        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.config_path = config_path;

        debug!("config"; "loaded {}", config.config_path.display());
        Ok(config.into_nav()?)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Validate and build the read-only navigation view.
    ///
    /// Fails with [`ConfigError::Invalid`] listing every structural defect.
    pub fn into_nav(self) -> Result<NavigationConfig, ConfigError> {
        let identity = SiteIdentity {
            title: self.title,
            url: self.url,
            logo: self.logo,
            social: self.social,
        };
        NavigationConfig::new(identity, self.sidebar)
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with the minimal required `title` field.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("title = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<SiteConfig, _> = toml::from_str("[logo\nlight = \"a.svg\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.title, "");
        assert!(config.url.is_none());
        assert!(config.logo.is_none());
        assert!(config.social.is_empty());
        assert!(config.sidebar.is_empty());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "title = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.title, "Test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "title = \"Test\"\nurl = \"https://example.com\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_logo_camel_case_alias() {
        let config = test_parse_config(
            "[logo]\nlight = \"l.svg\"\ndark = \"d.svg\"\nreplacesTitle = true",
        );
        let logo = config.logo.unwrap();
        assert_eq!(logo.light, "l.svg");
        assert!(logo.replaces_title);
    }

    #[test]
    fn test_logo_defaults_to_keeping_title() {
        let config = test_parse_config("[logo]\nlight = \"l.svg\"\ndark = \"d.svg\"");
        assert!(!config.logo.unwrap().replaces_title);
    }

    #[test]
    fn test_social_parsed_in_order() {
        let config = test_parse_config(
            r#"[[social]]
icon = "github"
label = "GitHub"
href = "https://github.com/x/y"

[[social]]
icon = "linkedin"
label = "LinkedIn"
href = "https://linkedin.com/company/x"
"#,
        );
        assert_eq!(config.social.len(), 2);
        assert_eq!(config.social[0].icon, SocialIcon::Github);
        assert_eq!(config.social[1].icon, SocialIcon::Linkedin);
    }

    #[test]
    fn test_unknown_icon_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str(
            "title = \"T\"\n[[social]]\nicon = \"myspace\"\nlabel = \"M\"\nhref = \"https://a.com\"",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "title = \"Test\"\n[[sidebar]]\nlabel = \"A\"\nitems = [{ label = \"Home\", slug = \"index\" }]",
        )
        .unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.title, "Test");
        assert_eq!(config.sidebar.len(), 1);
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = SiteConfig::from_path(&dir.path().join("nope.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_into_nav_rejects_empty_title() {
        let config = SiteConfig::from_str(
            "title = \"\"\n[[sidebar]]\nlabel = \"A\"\nitems = [{ label = \"Home\", slug = \"index\" }]",
        )
        .unwrap();
        let err = config.into_nav().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_shipped_config_is_valid() {
        let config = SiteConfig::from_str(include_str!("../../site.toml")).unwrap();
        let nav = config.into_nav().unwrap();

        assert_eq!(nav.identity().title, "SANAD Founder Playbook");
        assert_eq!(nav.identity().social.len(), 2);
        assert_eq!(nav.sections().len(), 6);
        assert_eq!(nav.item_count(), 20);
        assert_eq!(nav.base_path(), Some("my-starlight-docs"));

        let root = nav.lookup(ROOT_SLUG).unwrap();
        assert_eq!(root.item.label, "Overview & Vision");
        assert_eq!(root.section.label, "Foundation");

        assert!(nav.lookup("fundraising/pitch-deck").is_some());
        assert!(nav.lookup("missing/page").is_none());
    }

    #[test]
    fn test_shipped_config_resolves_against_full_content() {
        let config = SiteConfig::from_str(include_str!("../../site.toml")).unwrap();
        let nav = config.into_nav().unwrap();

        // Content index with every declared slug: nothing unresolved
        let content: ContentIndex = nav
            .sections()
            .iter()
            .flat_map(|s| s.items.iter())
            .map(|i| i.slug.clone())
            .collect();
        assert!(nav.resolve(&content).is_empty());

        // Drop one entry: exactly that slug is reported
        let mut partial = ContentIndex::new();
        for section in nav.sections() {
            for item in &section.items {
                if item.slug != "gtm/pricing" {
                    partial.insert(item.slug.clone());
                }
            }
        }
        let unresolved = nav.resolve(&partial);
        assert_eq!(unresolved.len(), 1);
        assert_eq!(unresolved[0].slug, "gtm/pricing");
        assert_eq!(unresolved[0].path.item_label, "Pricing Strategy");
    }
}
