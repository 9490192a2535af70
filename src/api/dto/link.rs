//! DTOs for the link creation endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Request to create a link.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    /// URL to shorten. Surrounding whitespace is trimmed; nothing else is checked.
    pub url: String,
}

/// Created link returned to the client.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            url: link.url,
            slug: link.slug,
        }
    }
}
