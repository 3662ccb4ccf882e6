//! Content client for the microCMS HTTP API
//!
//! The client is a thin adapter: it forwards query modifiers verbatim, issues
//! one request per call and returns the decoded payload unchanged. Errors are
//! surfaced to the caller without retry or fallback.

mod blog;
mod client;
mod config;
mod error;
mod queries;
mod types;

#[cfg(test)]
mod mock;

pub use blog::{get_blog_detail, list_blogs, Blog, BLOGS_ENDPOINT};
pub use client::CmsClient;
pub use config::{CmsConfig, API_KEY_ENV, SERVICE_DOMAIN_ENV};
pub use error::CmsError;
pub use queries::{Queries, QueryPair};
pub use types::{ContentMeta, ListResponse};
