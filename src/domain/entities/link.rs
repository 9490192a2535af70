//! Link entity pairing a URL with its slug.

use serde::{Deserialize, Serialize};

/// A URL and, once persisted, the slug that resolves to it.
///
/// A link submitted by a client carries no slug. Links returned by
/// [`crate::application::services::LinkService::create`] always carry one,
/// derived from the identifier the store assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl Link {
    /// Creates a persisted link with its slug.
    pub fn with_slug(url: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            slug: Some(slug.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_unmarshal_without_slug() {
        let link: Link = serde_json::from_str(r#"{"url": "http://example.com"}"#).unwrap();

        assert_eq!(link.url, "http://example.com");
        assert!(link.slug.is_none());
    }

    #[test]
    fn test_link_marshal() {
        let link = Link::with_slug("http://example.com", "xyz");
        let json = serde_json::to_string(&link).unwrap();

        assert_eq!(json, r#"{"url":"http://example.com","slug":"xyz"}"#);
    }

    #[test]
    fn test_link_marshal_omits_missing_slug() {
        let link = Link {
            url: "http://example.com".to_string(),
            slug: None,
        };
        let json = serde_json::to_string(&link).unwrap();
        assert_eq!(json, r#"{"url":"http://example.com"}"#);
    }
}
