//! Content client configuration

use super::CmsError;

/// Environment variable holding the service domain
pub const SERVICE_DOMAIN_ENV: &str = "MICROCMS_SERVICE_DOMAIN";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "MICROCMS_API_KEY";

/// Credentials and endpoint of the remote content API
#[derive(Clone)]
pub struct CmsConfig {
    /// Service domain, the `xxx` in `xxx.microcms.io`
    pub service_domain: String,
    pub api_key: String,
    /// Replaces the API base derived from the service domain
    pub base_url: Option<String>,
}

impl CmsConfig {
    pub fn new(service_domain: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            service_domain: service_domain.into(),
            api_key: api_key.into(),
            base_url: None,
        }
    }

    /// Read both values from the process environment.
    pub fn from_env() -> Result<Self, CmsError> {
        Self::from_values(
            std::env::var(SERVICE_DOMAIN_ENV).ok(),
            std::env::var(API_KEY_ENV).ok(),
        )
    }

    /// Build from optional values, failing if either is absent or empty
    pub fn from_values(
        service_domain: Option<String>,
        api_key: Option<String>,
    ) -> Result<Self, CmsError> {
        match (service_domain, api_key) {
            (Some(domain), Some(key)) => {
                let config = Self::new(domain, key);
                config.validate()?;
                Ok(config)
            }
            _ => Err(CmsError::MissingConfig),
        }
    }

    /// Point the client at another API base, e.g. a local stand-in server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn validate(&self) -> Result<(), CmsError> {
        if self.service_domain.trim().is_empty() || self.api_key.trim().is_empty() {
            return Err(CmsError::MissingConfig);
        }
        Ok(())
    }

    /// API base URL, without trailing slash
    pub fn api_base(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}.microcms.io/api/v1", self.service_domain),
        }
    }
}

impl std::fmt::Debug for CmsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CmsConfig")
            .field("service_domain", &self.service_domain)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
