//! Errors raised while loading the content collection

use std::path::PathBuf;
use thiserror::Error;

use super::{FrontMatterError, SchemaErrors};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid front-matter in {path:?}: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },

    #[error("{path:?} does not match the blog schema: {errors}")]
    Schema { path: PathBuf, errors: SchemaErrors },
}

impl ContentError {
    /// File the error was raised for
    pub fn path(&self) -> &std::path::Path {
        match self {
            ContentError::Io { path, .. }
            | ContentError::FrontMatter { path, .. }
            | ContentError::Schema { path, .. } => path,
        }
    }
}
