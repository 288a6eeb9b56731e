//! HTTP GET capability consumed by the upstream wrappers.
//!
//! Wrappers never talk to reqwest directly; they go through [`Transport`] so
//! tests can swap in a mock or point the real client at a stub server.

mod client;

use std::fmt;

use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

pub use client::HttpClient;

/// A GET request: a URL plus ordered query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
        }
    }

    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    /// Value of the first query parameter named `key`.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)?;
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, key, value)?;
        }
        Ok(())
    }
}

/// Raw upstream answer. Non-success statuses are returned, not raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, body)
    }
}

/// Performs a single GET. Errors only when no response was obtained.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Issues `request` and decodes a 2xx body as JSON.
pub async fn get_json<T, D>(transport: &T, request: &HttpRequest) -> Result<D, ApiError>
where
    T: Transport + ?Sized,
    D: DeserializeOwned,
{
    let response = transport.get(request).await?;

    if !response.status.is_success() {
        debug!("{} answered {}", request, response.status);
        return Err(ApiError::Status {
            url: request.to_string(),
            status: response.status,
        });
    }

    serde_json::from_str(&response.body).map_err(|source| ApiError::MalformedJson {
        url: request.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::Value;

    #[test]
    fn test_request_display_without_query() {
        let request = HttpRequest::new("https://pypi.org/pypi/Django/json");
        assert_eq!(request.to_string(), "https://pypi.org/pypi/Django/json");
    }

    #[test]
    fn test_request_display_with_query() {
        let request = HttpRequest::new("https://api.github.com/repos/a/b/issues")
            .query("per_page", "100")
            .query("page", "2");
        assert_eq!(
            request.to_string(),
            "https://api.github.com/repos/a/b/issues?per_page=100&page=2"
        );
        assert_eq!(request.query_value("page"), Some("2"));
        assert_eq!(request.query_value("state"), None);
    }

    #[tokio::test]
    async fn test_get_json_decodes_success_body() {
        let mut transport = MockTransport::new();
        transport
            .expect_get()
            .times(1)
            .returning(|_| Ok(HttpResponse::ok(r#"{"name": "test", "value": 42}"#)));

        let value: Value = get_json(&transport, &HttpRequest::new("http://stub/test"))
            .await
            .unwrap();

        assert_eq!(value["name"], "test");
        assert_eq!(value["value"], 42);
    }

    #[tokio::test]
    async fn test_get_json_rejects_error_status() {
        let mut transport = MockTransport::new();
        transport
            .expect_get()
            .returning(|_| Ok(HttpResponse::new(StatusCode::NOT_FOUND, "{}")));

        let err = get_json::<_, Value>(&transport, &HttpRequest::new("http://stub/missing"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Upstream);
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_get_json_rejects_malformed_body() {
        let mut transport = MockTransport::new();
        transport
            .expect_get()
            .returning(|_| Ok(HttpResponse::ok("{\"info\": ")));

        let err = get_json::<_, Value>(&transport, &HttpRequest::new("http://stub/broken"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::MalformedJson { .. }));
        assert_eq!(err.kind(), ErrorKind::Upstream);
    }

    #[tokio::test]
    async fn test_get_json_passes_transport_errors_through() {
        let mut transport = MockTransport::new();
        transport
            .expect_get()
            .returning(|_| Err(ApiError::NotFound("stub".to_string())));

        let err = get_json::<_, Value>(&transport, &HttpRequest::new("http://stub/x"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
