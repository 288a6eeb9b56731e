//! reqwest-backed [`Transport`].

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use super::{HttpRequest, HttpResponse, Transport};
use crate::error::ApiError;

/// HTTP client performing one plain GET per call. No retries.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpClient {
    #[tracing::instrument(skip(self))]
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!("GET {}...", request);

        let transport_error = |source| ApiError::Transport {
            url: request.to_string(),
            source,
        };

        let response = self
            .client
            .get(&request.url)
            .query(&request.query)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        debug!("{} answered {} ({} bytes)", request, status, body.len());

        Ok(HttpResponse { status, body })
    }
}
