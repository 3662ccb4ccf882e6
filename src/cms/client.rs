//! HTTP client for the content API

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, error, trace};

use super::{CmsConfig, CmsError, ListResponse, Queries};

/// Header carrying the API key on every request
const API_KEY_HEADER: &str = "X-MICROCMS-API-KEY";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Read-only client for list-type endpoints.
///
/// Cheap to clone; holds no state besides configuration, so concurrent calls
/// are independent. Timeouts and connection reuse are whatever `reqwest`
/// provides by default.
#[derive(Debug, Clone)]
pub struct CmsClient {
    http: Client,
    config: CmsConfig,
    base: Url,
}

impl CmsClient {
    /// Create a client, failing fast when the service domain or API key is missing
    pub fn new(config: CmsConfig) -> Result<Self, CmsError> {
        config.validate()?;

        let api_base = config.api_base();
        let base = Url::parse(&api_base).map_err(|e| CmsError::InvalidUrl {
            url: api_base.clone(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(CmsError::InvalidUrl {
                url: api_base,
                reason: "not a hierarchical URL".to_string(),
            });
        }

        let http = Client::builder().user_agent(USER_AGENT).build()?;

        debug!(
            service_domain = %config.service_domain,
            api_base = %base,
            "content client ready"
        );

        Ok(Self { http, config, base })
    }

    pub fn config(&self) -> &CmsConfig {
        &self.config
    }

    /// Fetch a list endpoint
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        queries: Option<&Queries>,
    ) -> Result<ListResponse<T>, CmsError> {
        let url = self.endpoint_url(&[endpoint])?;
        debug!(endpoint, "requesting content list");

        let body = self.get(url, queries).await?;
        let list: ListResponse<T> = serde_json::from_str(&body)?;

        debug!(
            endpoint,
            returned = list.contents.len(),
            total = list.total_count,
            "received content list"
        );
        Ok(list)
    }

    /// Fetch a single record of a list endpoint
    pub async fn get_list_detail<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        content_id: &str,
        queries: Option<&Queries>,
    ) -> Result<T, CmsError> {
        if content_id.is_empty() {
            return Err(CmsError::MissingContentId);
        }

        let url = self.endpoint_url(&[endpoint, content_id])?;
        debug!(endpoint, content_id, "requesting content detail");

        let body = match self.get(url, queries).await {
            Ok(body) => body,
            Err(CmsError::Status { status, .. }) if status == StatusCode::NOT_FOUND => {
                return Err(CmsError::NotFound {
                    endpoint: endpoint.to_string(),
                    content_id: content_id.to_string(),
                });
            }
            Err(e) => return Err(e),
        };

        Ok(serde_json::from_str(&body)?)
    }

    /// Append path segments to the API base; each segment is percent-encoded
    fn endpoint_url(&self, segments: &[&str]) -> Result<Url, CmsError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| CmsError::InvalidUrl {
                url: self.base.to_string(),
                reason: "not a hierarchical URL".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: Url, queries: Option<&Queries>) -> Result<String, CmsError> {
        let mut req = self
            .http
            .get(url.clone())
            .header(API_KEY_HEADER, &self.config.api_key);
        if let Some(queries) = queries.filter(|q| !q.is_empty()) {
            trace!(queries = %queries, "forwarding query modifiers");
            req = req.query(queries);
        }

        let response = req.send().await.map_err(|e| {
            error!(url = %url, error = %e, "content request failed (transport)");
            CmsError::Transport(e)
        })?;

        let response = check_status(response).await?;
        Ok(response.text().await?)
    }
}

/// Error body returned by the API
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, CmsError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read error body>".to_string());

    let message = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => parsed.message,
        Err(_) => body,
    };

    if status == StatusCode::NOT_FOUND {
        debug!(%status, %message, "content API returned not found");
    } else {
        error!(%status, %message, "content API returned HTTP error");
    }
    Err(CmsError::Status { status, message })
}
