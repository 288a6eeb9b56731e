//! PyPI package metadata.

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use log::debug;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpClient, HttpRequest, Transport, get_json};

/// A package name, optionally pinned to one release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageQuery {
    pub name: String,
    pub version: Option<String>,
}

impl PackageQuery {
    pub fn new(name: &str, version: Option<&str>) -> anyhow::Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            anyhow::bail!("Package name must not be empty.");
        }

        let version = match version.map(str::trim) {
            Some("") => anyhow::bail!("Package version must not be empty."),
            other => other.map(str::to_string),
        };

        Ok(Self {
            name: name.to_string(),
            version,
        })
    }

    /// Metadata URL under `pypi_url`, e.g. `https://pypi.org/pypi/Django/1.5.1/json`.
    pub fn url(&self, pypi_url: &str) -> String {
        let base = pypi_url.trim_end_matches('/');
        match &self.version {
            Some(version) => format!("{}/pypi/{}/{}/json", base, self.name, version),
            None => format!("{}/pypi/{}/json", base, self.name),
        }
    }
}

impl fmt::Display for PackageQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}=={}", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Accepts `name` or a requirements-style pin `name==version`.
impl FromStr for PackageQuery {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = match s.split_once("==") {
            Some((name, version)) => PackageQuery::new(name, Some(version)),
            None => PackageQuery::new(s, None),
        };
        parsed.map_err(|e| anyhow!("Invalid package '{}': {}", s, e))
    }
}

/// Fetches package metadata documents from the PyPI JSON API.
pub struct PackageInfoWrapper<T: Transport = HttpClient> {
    transport: T,
    api_url: String,
}

impl<T: Transport> PackageInfoWrapper<T> {
    pub fn new(transport: T, api_url: &str) -> Self {
        Self {
            transport,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the decoded metadata document unmodified.
    ///
    /// An empty name or version fails with [`ApiError::InvalidQuery`] and
    /// sends nothing.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_package_info(
        &self,
        name: &str,
        version: Option<&str>,
    ) -> Result<Value, ApiError> {
        let query = PackageQuery::new(name, version)
            .map_err(|e| ApiError::InvalidQuery(e.to_string()))?;
        self.fetch(&query).await
    }

    #[tracing::instrument(skip(self, query), fields(package = %query))]
    pub async fn fetch(&self, query: &PackageQuery) -> Result<Value, ApiError> {
        let url = query.url(&self.api_url);
        debug!("Fetching package info from {}...", url);
        get_json(&self.transport, &HttpRequest::new(url)).await
    }
}
