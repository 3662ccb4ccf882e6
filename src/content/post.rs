//! Local blog post model

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

use super::BlogFields;

/// A validated, locally authored blog post
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalBlogPost {
    /// Post title
    pub title: String,

    /// Publication date
    pub published_at: DateTime<Utc>,

    /// URL-friendly id derived from the path inside the collection
    pub slug: String,

    /// Full source file path
    pub source: PathBuf,

    /// Raw markdown body, front-matter removed
    pub body: String,
}

impl LocalBlogPost {
    pub fn new(fields: BlogFields, slug: String, source: PathBuf, body: String) -> Self {
        Self {
            title: fields.title,
            published_at: fields.published_at,
            slug,
            source,
            body,
        }
    }
}
