//! Configuration error types.

use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config file `{0}` not found")]
    NotFound(PathBuf),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Invalid(Diagnostics),
}

// ============================================================================
// Tree Paths
// ============================================================================

/// Location of an item within the sidebar tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPath {
    /// Section index in declared order.
    pub section: usize,
    /// Section label at that index.
    pub section_label: String,
    /// Item index within the section.
    pub item: usize,
    /// Item label at that index.
    pub item_label: String,
}

impl fmt::Display for ItemPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sidebar[{}] \"{}\" > items[{}] \"{}\"",
            self.section, self.section_label, self.item, self.item_label
        )
    }
}

/// Location of a section within the sidebar tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPath {
    /// Section index in declared order.
    pub section: usize,
    /// Section label at that index.
    pub label: String,
}

impl fmt::Display for SectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sidebar[{}] \"{}\"", self.section, self.label)
    }
}

/// Location of a label anywhere in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelPath {
    /// The top-level site title.
    Title,
    /// A section label.
    Section(SectionPath),
    /// An item label.
    Item(ItemPath),
    /// A social link label.
    Social { index: usize },
}

impl fmt::Display for LabelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::Section(path) => write!(f, "{path}"),
            Self::Item(path) => write!(f, "{path}"),
            Self::Social { index } => write!(f, "social[{index}]"),
        }
    }
}

// ============================================================================
// ValidationError
// ============================================================================

/// A structural defect in the navigation configuration.
///
/// Detected eagerly when a [`NavigationConfig`](crate::config::NavigationConfig)
/// is constructed; any occurrence aborts construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Two items reference the same content slug.
    #[error("slug `{slug}` is also declared at {first}")]
    DuplicateSlug {
        slug: String,
        first: ItemPath,
        second: ItemPath,
    },

    /// A label is empty (or whitespace only).
    #[error("label is empty")]
    EmptyLabel { path: LabelPath },

    /// A section declares no items.
    #[error("section has no items")]
    EmptySection { path: SectionPath },

    /// No item references the root slug.
    #[error("no item references the root slug `{root}`")]
    MissingRoot { root: String },

    /// More than one item references the root slug.
    #[error("root slug `{root}` is also declared at {first}")]
    MultipleRoots {
        root: String,
        first: ItemPath,
        second: ItemPath,
    },

    /// A social link href is not a well-formed absolute URL.
    #[error("invalid href `{href}`: {reason}")]
    InvalidHref {
        index: usize,
        label: String,
        href: String,
        reason: String,
    },

    /// The site url is not a well-formed absolute URL.
    #[error("invalid url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ValidationError {
    /// Config location shown in the diagnostic header.
    pub fn location(&self) -> String {
        match self {
            Self::DuplicateSlug { second, .. } | Self::MultipleRoots { second, .. } => {
                second.to_string()
            }
            Self::EmptyLabel { path } => path.to_string(),
            Self::EmptySection { path } => path.to_string(),
            Self::MissingRoot { .. } => "sidebar".to_string(),
            Self::InvalidHref { index, .. } => format!("social[{index}]"),
            Self::InvalidUrl { .. } => "url".to_string(),
        }
    }
}

// ============================================================================
// Diagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The structural defect.
    pub error: ValidationError,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl Diagnostic {
    pub fn new(error: ValidationError) -> Self {
        Self { error, hint: None }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Location in cyan brackets
        writeln!(
            f,
            "{}{}{}",
            "[".dimmed(),
            self.error.location().cyan(),
            "]".dimmed()
        )?;
        // Error message with red bullet
        write!(f, "{} {}", "→".red(), self.error)?;
        // Hint in yellow
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Batch collector for validation errors.
///
/// Validation walks the whole configuration and collects every defect before
/// failing, so authors see the full list at once.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, error: ValidationError) {
        self.errors.push(Diagnostic::new(error));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(&mut self, error: ValidationError, hint: impl Into<String>) {
        self.errors.push(Diagnostic::new(error).with_hint(hint));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Iterate the typed validation errors.
    pub fn kinds(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().map(|d| &d.error)
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "navigation validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}

// ============================================================================
// tests
// ============================================================================
