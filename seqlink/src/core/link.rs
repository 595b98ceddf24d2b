//! The outcome of resolving a custom link for a hit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Either a custom URL for a hit, or the explicit absence of one.
///
/// `NoLink` is a distinct variant, so no URL value can ever be mistaken for
/// the "no link" outcome.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LinkResult {
    /// A custom link was produced.
    Url {
        /// The link target.
        url: String,
    },
    /// The identifier was not recognised; no custom link applies.
    NoLink,
}

impl LinkResult {
    /// Creates a URL result.
    #[must_use]
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url { url: url.into() }
    }

    /// Whether a custom link was produced.
    #[must_use]
    pub const fn is_link(&self) -> bool {
        matches!(self, Self::Url { .. })
    }

    /// Returns the link target, if any.
    #[must_use]
    pub fn as_url(&self) -> Option<&str> {
        match self {
            Self::Url { url } => Some(url),
            Self::NoLink => None,
        }
    }

    /// Converts into an `Option`, dropping the tag.
    #[must_use]
    pub fn into_option(self) -> Option<String> {
        match self {
            Self::Url { url } => Some(url),
            Self::NoLink => None,
        }
    }
}

impl From<Option<String>> for LinkResult {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::NoLink, |url| Self::Url { url })
    }
}

impl fmt::Display for LinkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url { url } => write!(f, "{url}"),
            Self::NoLink => write!(f, "<no link>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_accessors() {
        let link = LinkResult::url("http://example.org/?loc=a:1..2");
        assert!(link.is_link());
        assert_eq!(link.as_url(), Some("http://example.org/?loc=a:1..2"));
        assert_eq!(
            link.into_option(),
            Some("http://example.org/?loc=a:1..2".to_string())
        );
    }

    #[test]
    fn test_no_link_never_equals_a_url() {
        assert_ne!(LinkResult::NoLink, LinkResult::url("No link"));
        assert_ne!(LinkResult::NoLink, LinkResult::url(""));
        assert!(!LinkResult::NoLink.is_link());
        assert_eq!(LinkResult::NoLink.as_url(), None);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(LinkResult::from(None), LinkResult::NoLink);
        assert_eq!(
            LinkResult::from(Some("x".to_string())),
            LinkResult::url("x")
        );
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_value(LinkResult::url("http://a/")).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "url", "url": "http://a/"}));

        let json = serde_json::to_value(LinkResult::NoLink).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "no_link"}));
    }
}
