//! Wire types shared by every endpoint

use serde::{Deserialize, Serialize};

/// Metadata the CMS attaches to every list-type record.
///
/// Only `id` is always present; the rest may be left out by a `fields` query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMeta {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revised_at: Option<String>,
}

/// Envelope of a list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    pub contents: Vec<T>,
    pub total_count: u64,
    pub offset: u64,
    pub limit: u64,
}
