//! The `blogs` endpoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CmsClient, CmsError, ContentMeta, ListResponse, Queries};

/// Endpoint name of the blog collection
pub const BLOGS_ENDPOINT: &str = "blogs";

/// A blog entry as stored in the CMS.
///
/// Fields other than the id are optional so that records narrowed with a
/// `fields` query decode as returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(flatten)]
    pub meta: ContentMeta,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Rich-text body (HTML)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// ISO-8601 publish time; absent on unpublished drafts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,

    /// Fields not modelled here, kept as returned
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Blog {
    pub fn id(&self) -> &str {
        &self.meta.id
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Publish time parsed as RFC 3339
    pub fn published(&self) -> Option<DateTime<Utc>> {
        self.published_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// List blog entries, forwarding `queries` unchanged
pub async fn list_blogs(
    client: &CmsClient,
    queries: Option<&Queries>,
) -> Result<ListResponse<Blog>, CmsError> {
    client.get_list(BLOGS_ENDPOINT, queries).await
}

/// Fetch one blog entry by id, forwarding `queries` unchanged
pub async fn get_blog_detail(
    client: &CmsClient,
    content_id: &str,
    queries: Option<&Queries>,
) -> Result<Blog, CmsError> {
    client
        .get_list_detail(BLOGS_ENDPOINT, content_id, queries)
        .await
}
