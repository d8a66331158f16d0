//! Sources for the version marker

#[cfg(test)]
use mockall::automock;

use reqwest::header::{CACHE_CONTROL, PRAGMA};
use tracing::{debug, warn};

use crate::config::DEFAULT_USER_AGENT;
use crate::version::error::VersionError;

/// Cache behavior requested for a fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheMode {
    /// Let intermediaries apply their usual caching
    #[default]
    Default,
    /// Bypass every cache between the client and the origin
    NoStore,
}

/// Per-request options for [`VersionSource::fetch_version`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchOptions {
    pub cache: CacheMode,
}

impl FetchOptions {
    pub fn no_store() -> Self {
        Self {
            cache: CacheMode::NoStore,
        }
    }
}

/// Trait for fetching the raw version marker
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionSource: Send + Sync {
    /// Fetches the resource at `path` and returns its body as text
    ///
    /// # Returns
    /// * `Ok(String)` - The untrimmed response body on a 2xx status
    /// * `Err(VersionError::Fetch)` - With `failure_message` on any other status
    /// * `Err(VersionError::Network)` - If the request itself failed
    async fn fetch_version(
        &self,
        path: &str,
        failure_message: &str,
        options: FetchOptions,
    ) -> Result<String, VersionError>;
}

/// Fetches the version marker over HTTP
pub struct HttpVersionSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpVersionSource {
    /// Creates a source that resolves paths against `base_url`
    pub fn new(base_url: &str) -> Result<Self, VersionError> {
        Self::with_user_agent(base_url, DEFAULT_USER_AGENT)
    }

    pub fn with_user_agent(base_url: &str, user_agent: &str) -> Result<Self, VersionError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(VersionError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait::async_trait]
impl VersionSource for HttpVersionSource {
    async fn fetch_version(
        &self,
        path: &str,
        failure_message: &str,
        options: FetchOptions,
    ) -> Result<String, VersionError> {
        let url = self.url_for(path);

        let mut request = self.client.get(&url);
        if options.cache == CacheMode::NoStore {
            request = request
                .header(CACHE_CONTROL, "no-store")
                .header(PRAGMA, "no-cache");
        }

        debug!("Fetching version marker from {}", url);
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Version marker request returned status {}: {}", status, url);
            return Err(VersionError::fetch(failure_message));
        }

        Ok(response.text().await?)
    }
}
