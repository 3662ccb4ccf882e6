//! Site configuration (site.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Environment variable overriding the configured site URL
pub const SITE_URL_ENV: &str = "SITE_URL";

/// Site URL used when neither the environment nor site.yml provide one
pub const DEFAULT_SITE_URL: &str = "http://localhost:4321";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL of the deployed site
    pub site: Option<String>,

    /// Whether pages are pre-rendered or rendered on request
    pub output: OutputMode,

    /// Deployment adapter
    pub adapter: AdapterConfig,

    /// Directory holding content collections, relative to the site root
    pub content_dir: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: None,
            output: OutputMode::default(),
            adapter: AdapterConfig::default(),
            content_dir: "src/content".to_string(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Apply environment overrides read once at startup
    pub fn apply_env(&mut self) {
        self.apply_site_url(std::env::var(SITE_URL_ENV).ok());
    }

    /// Override the site URL with an externally supplied value.
    /// Empty values are ignored.
    pub fn apply_site_url(&mut self, value: Option<String>) {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            tracing::debug!("Site URL overridden to {}", url);
            self.site = Some(url);
        }
    }

    /// Resolved site URL
    pub fn site_url(&self) -> &str {
        self.site.as_deref().unwrap_or(DEFAULT_SITE_URL)
    }

    /// Directory of a named content collection
    pub fn collection_dir<P: AsRef<Path>>(&self, base_dir: P, collection: &str) -> std::path::PathBuf {
        base_dir.as_ref().join(&self.content_dir).join(collection)
    }
}

/// Page output mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Every page is generated at build time
    #[default]
    Static,
    /// Pages are rendered on request by the adapter
    Server,
}

/// Known deployment adapters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdapterName {
    #[default]
    Cloudflare,
}

/// Cloudflare adapter mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdapterMode {
    /// Functions directory deployment
    #[default]
    Directory,
    /// Single `_worker.js` deployment
    Advanced,
}

/// Deployment adapter configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    pub name: AdapterName,
    pub mode: AdapterMode,
}
