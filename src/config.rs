//! Upstream endpoints and client construction.

use std::time::Duration;

use log::debug;
use reqwest::{
    Client,
    header::{ACCEPT, HeaderMap, HeaderValue},
};

use crate::{
    error::ApiError,
    github::{RepoInfoWrapper, RepoSearchWrapper},
    http::HttpClient,
    pypi::PackageInfoWrapper,
};

pub const DEFAULT_PYPI_URL: &str = "https://pypi.org";
pub const DEFAULT_GITHUB_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_PER_PAGE: u32 = 100;
/// Largest page size GitHub honours.
pub const MAX_PER_PAGE: u32 = 100;

const USER_AGENT: &str = "gopython3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub pypi_url: String,
    pub github_url: String,
    /// Applied to every single GET.
    pub timeout: Duration,
    /// Page size requested from paginated GitHub endpoints.
    pub per_page: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            pypi_url: DEFAULT_PYPI_URL.to_string(),
            github_url: DEFAULT_GITHUB_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl ApiConfig {
    pub fn with_pypi_url(mut self, url: impl Into<String>) -> Self {
        self.pypi_url = url.into();
        self
    }

    pub fn with_github_url(mut self, url: impl Into<String>) -> Self {
        self.github_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.clamp(1, MAX_PER_PAGE);
        self
    }
}

/// Build an HTTP client with the crate's user agent and a fixed per-request timeout.
pub fn build_http_client(timeout: Duration) -> Result<HttpClient, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .map_err(ApiError::Client)?;

    debug!("HTTP client configured with {:?} timeout", timeout);

    Ok(HttpClient::new(client))
}

/// All three wrappers sharing one client.
pub struct Apis {
    pub pypi: PackageInfoWrapper,
    pub repos: RepoInfoWrapper,
    pub search: RepoSearchWrapper,
}

impl Apis {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http_client = build_http_client(config.timeout)?;

        Ok(Self {
            pypi: PackageInfoWrapper::new(http_client.clone(), &config.pypi_url),
            repos: RepoInfoWrapper::new(http_client.clone(), &config.github_url)
                .with_per_page(config.per_page),
            search: RepoSearchWrapper::new(http_client, &config.github_url),
        })
    }
}
