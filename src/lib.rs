//! microcms-blog: blog content from microCMS plus a validated local collection
//!
//! This crate provides a read-only client for the microCMS `blogs` endpoint and
//! a loader for locally authored Markdown posts checked against a small schema.
//! The two sources are independent; a site may use either or both.

pub mod cms;
pub mod commands;
pub mod config;
pub mod content;

use anyhow::Result;
use std::path::Path;

/// Name of the optional site configuration file
pub const CONFIG_FILE: &str = "site.yml";

/// Name of the environment file read from the site directory
pub const ENV_FILE: &str = ".env";

/// Load `.env` from the site directory into the process environment.
/// Returns the file path when one was found.
pub fn load_env_file<P: AsRef<Path>>(base_dir: P) -> Result<Option<std::path::PathBuf>, dotenvy::Error> {
    let path = base_dir.as_ref().join(ENV_FILE);
    match dotenvy::from_path(&path) {
        Ok(()) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// A blog site rooted at a directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
}

impl Site {
    /// Create a site from a directory, reading site.yml if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self { config, base_dir })
    }

    /// Create a site and apply environment overrides
    pub fn from_env<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let mut site = Self::new(base_dir)?;
        site.config.apply_env();
        Ok(site)
    }

    /// Load the local blog collection, failing on the first invalid entry
    pub fn load_posts(&self) -> Result<Vec<content::LocalBlogPost>, content::ContentError> {
        content::ContentLoader::new(self).load_posts()
    }
}
