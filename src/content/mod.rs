//! Content module - the locally authored blog collection and its schema

mod error;
mod frontmatter;
pub mod loader;
mod post;
mod schema;

pub use error::ContentError;
pub use frontmatter::{FrontMatter, FrontMatterError};
pub use loader::{CheckReport, ContentLoader, BLOG_COLLECTION};
pub use post::LocalBlogPost;
pub use schema::{coerce_date, validate, BlogFields, IssueKind, SchemaErrors, SchemaIssue};
