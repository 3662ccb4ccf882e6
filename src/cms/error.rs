//! Content client errors

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CmsError {
    #[error("parameter is required (check serviceDomain and apiKey)")]
    MissingConfig,

    #[error("contentId is required")]
    MissingContentId,

    #[error("invalid API url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("content not found: {endpoint}/{content_id}")]
    NotFound { endpoint: String, content_id: String },

    #[error("HTTP {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CmsError {
    /// HTTP status carried by the error, if the remote answered
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            CmsError::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            CmsError::Status { status, .. } => Some(*status),
            CmsError::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CmsError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn missing_config_display() {
        let e = CmsError::MissingConfig;
        assert!(e.to_string().contains("serviceDomain"));
        assert!(e.status().is_none());
    }

    #[test]
    fn not_found_carries_status() {
        let e = CmsError::NotFound {
            endpoint: "blogs".into(),
            content_id: "missing".into(),
        };
        assert!(e.is_not_found());
        assert_eq!(e.status(), Some(StatusCode::NOT_FOUND));
        assert!(e.to_string().contains("blogs/missing"));
    }

    #[test]
    fn status_display() {
        let e = CmsError::Status {
            status: StatusCode::UNAUTHORIZED,
            message: "X-MICROCMS-API-KEY header is invalid.".into(),
        };
        assert!(!e.is_not_found());
        assert!(e.to_string().contains("401"));
        assert!(e.to_string().contains("header is invalid"));
    }

    #[test]
    fn decode_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e: CmsError = json_err.into();
        assert!(e.to_string().contains("failed to decode"));
        let _: &dyn Error = &e;
    }
}
