//! Site identity: title, logo pair, and social links.
//!
//! # Example
//!
//! ```toml
//! title = "SANAD Founder Playbook"
//! url = "https://example.github.io/docs"
//!
//! [logo]
//! light = "assets/logo-light.svg"
//! dark = "assets/logo-dark.svg"
//! replaces_title = false
//!
//! [[social]]
//! icon = "github"
//! label = "GitHub"
//! href = "https://github.com/example/docs"
//! ```

use serde::{Deserialize, Serialize};

use super::error::{Diagnostics, LabelPath, ValidationError};

// ============================================================================
// SiteIdentity
// ============================================================================

/// Site metadata handed to the host rendering pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteIdentity {
    /// Site title shown in the header.
    pub title: String,

    /// Site URL; its path component becomes the deployment base path
    /// (e.g., "https://example.github.io/my-project").
    pub url: Option<String>,

    /// Light/dark logo pair.
    pub logo: Option<LogoConfig>,

    /// Social links, rendered in declared order.
    pub social: Vec<SocialLink>,
}

impl SiteIdentity {
    /// Validate identity fields.
    ///
    /// # Checks
    /// - `title` must be non-empty after trimming
    /// - `url`, if set, must be an absolute http/https URL with a host
    /// - every social link label must be non-empty after trimming
    /// - every social link href must be an absolute http/https URL with a host
    pub fn validate(&self, diag: &mut Diagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                ValidationError::EmptyLabel {
                    path: LabelPath::Title,
                },
                "set title, e.g.: \"My Documentation\"",
            );
        }

        if let Some(url) = &self.url
            && let Err(reason) = check_absolute_url(url)
        {
            diag.error_with_hint(
                ValidationError::InvalidUrl {
                    url: url.clone(),
                    reason,
                },
                "use format like https://example.com/docs",
            );
        }

        for (index, link) in self.social.iter().enumerate() {
            link.validate(index, diag);
        }
    }
}

// ============================================================================
// LogoConfig
// ============================================================================

/// Light/dark logo asset pair.
///
/// Both fields are opaque asset identifiers resolved by the host build
/// pipeline; this crate never touches the referenced files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoConfig {
    /// Asset identifier for the light theme.
    pub light: String,

    /// Asset identifier for the dark theme.
    pub dark: String,

    /// Whether the logo replaces the title text in the header.
    #[serde(default, alias = "replacesTitle")]
    pub replaces_title: bool,
}

// ============================================================================
// SocialLink
// ============================================================================

/// An external social link shown in the site header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon from the known icon set.
    pub icon: SocialIcon,

    /// Display label (also used as the accessible name).
    pub label: String,

    /// Absolute URL the link points at.
    pub href: String,
}

impl SocialLink {
    fn validate(&self, index: usize, diag: &mut Diagnostics) {
        if self.label.trim().is_empty() {
            diag.error(ValidationError::EmptyLabel {
                path: LabelPath::Social { index },
            });
        }

        if let Err(reason) = check_absolute_url(&self.href) {
            diag.error_with_hint(
                ValidationError::InvalidHref {
                    index,
                    label: self.label.clone(),
                    href: self.href.clone(),
                    reason,
                },
                "use format like https://github.com/user/repo",
            );
        }
    }
}

/// Icon identifiers recognized by the host theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Bitbucket,
    Codeberg,
    Codepen,
    Discord,
    Email,
    Facebook,
    Github,
    Gitlab,
    Gitter,
    Instagram,
    Linkedin,
    Mastodon,
    Matrix,
    Rss,
    Slack,
    Stackoverflow,
    Telegram,
    Threads,
    Twitch,
    Twitter,
    X,
    Youtube,
}

impl SocialIcon {
    /// Icon name as the host theme spells it.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bitbucket => "bitbucket",
            Self::Codeberg => "codeberg",
            Self::Codepen => "codepen",
            Self::Discord => "discord",
            Self::Email => "email",
            Self::Facebook => "facebook",
            Self::Github => "github",
            Self::Gitlab => "gitlab",
            Self::Gitter => "gitter",
            Self::Instagram => "instagram",
            Self::Linkedin => "linkedin",
            Self::Mastodon => "mastodon",
            Self::Matrix => "matrix",
            Self::Rss => "rss",
            Self::Slack => "slack",
            Self::Stackoverflow => "stackoverflow",
            Self::Telegram => "telegram",
            Self::Threads => "threads",
            Self::Twitch => "twitch",
            Self::Twitter => "twitter",
            Self::X => "x",
            Self::Youtube => "youtube",
        }
    }
}

// ============================================================================
// URL validation
// ============================================================================

/// Check a string is an absolute http/https URL with a host.
///
/// Uses the `url` crate for strict parsing.
fn check_absolute_url(url_str: &str) -> Result<(), String> {
    match url::Url::parse(url_str) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(format!(
                    "scheme '{}' not supported, must be http or https",
                    parsed.scheme()
                ));
            }
            if parsed.host_str().is_none() {
                return Err("URL must have a valid host".to_string());
            }
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(identity: &SiteIdentity) -> Diagnostics {
        let mut diag = Diagnostics::new();
        identity.validate(&mut diag);
        diag
    }

    fn link(icon: SocialIcon, label: &str, href: &str) -> SocialLink {
        SocialLink {
            icon,
            label: label.into(),
            href: href.into(),
        }
    }

    #[test]
    fn test_valid_identity() {
        let identity = SiteIdentity {
            title: "Docs".into(),
            url: Some("https://example.github.io/docs".into()),
            logo: None,
            social: vec![link(SocialIcon::Github, "GitHub", "https://github.com/x/y")],
        };
        assert!(validate(&identity).is_empty());
    }

    #[test]
    fn test_empty_title_rejected() {
        let identity = SiteIdentity {
            title: "   ".into(),
            ..SiteIdentity::default()
        };
        let diag = validate(&identity);
        assert!(diag.kinds().any(|e| matches!(
            e,
            ValidationError::EmptyLabel {
                path: LabelPath::Title
            }
        )));
    }

    #[test]
    fn test_href_scheme_rejected() {
        let identity = SiteIdentity {
            title: "Docs".into(),
            social: vec![link(SocialIcon::Email, "Mail", "mailto:hi@example.com")],
            ..SiteIdentity::default()
        };
        let diag = validate(&identity);
        assert!(
            diag.kinds()
                .any(|e| matches!(e, ValidationError::InvalidHref { index: 0, .. }))
        );
    }

    #[test]
    fn test_relative_href_rejected() {
        let identity = SiteIdentity {
            title: "Docs".into(),
            social: vec![link(SocialIcon::Github, "GitHub", "/repo")],
            ..SiteIdentity::default()
        };
        let diag = validate(&identity);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_invalid_url_rejected() {
        let identity = SiteIdentity {
            title: "Docs".into(),
            url: Some("not a url".into()),
            ..SiteIdentity::default()
        };
        let diag = validate(&identity);
        assert!(
            diag.kinds()
                .any(|e| matches!(e, ValidationError::InvalidUrl { .. }))
        );
    }

    #[test]
    fn test_social_label_trimmed() {
        let identity = SiteIdentity {
            title: "Docs".into(),
            social: vec![link(SocialIcon::X, " ", "https://x.com/docs")],
            ..SiteIdentity::default()
        };
        let diag = validate(&identity);
        assert!(diag.kinds().any(|e| matches!(
            e,
            ValidationError::EmptyLabel {
                path: LabelPath::Social { index: 0 }
            }
        )));
    }

    #[test]
    fn test_icon_as_str() {
        assert_eq!(SocialIcon::Github.as_str(), "github");
        assert_eq!(SocialIcon::Stackoverflow.as_str(), "stackoverflow");
        assert_eq!(SocialIcon::X.as_str(), "x");
    }
}
