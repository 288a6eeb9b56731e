use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpClient, HttpRequest, Transport, get_json};

#[derive(Deserialize, Debug)]
struct SearchResponse {
    items: Vec<Value>,
}

/// Repository search over `GET /search/repositories`.
pub struct RepoSearchWrapper<T: Transport = HttpClient> {
    transport: T,
    api_url: String,
}

impl<T: Transport> RepoSearchWrapper<T> {
    pub fn new(transport: T, api_url: &str) -> Self {
        Self {
            transport,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Picks the first item named `name` in the order the API returned.
    ///
    /// Names compare ASCII case-insensitively, as GitHub treats repository
    /// names.
    ///
    /// The query asks for results sorted by stars, so the first exact match is
    /// the most popular repository with that name. Results are never re-sorted
    /// locally. Returns the owner's login together with the raw search item.
    #[tracing::instrument(skip(self))]
    pub async fn find_most_popular_repo(&self, name: &str) -> Result<(String, Value), ApiError> {
        let request = HttpRequest::new(format!("{}/search/repositories", self.api_url))
            .query("q", name)
            .query("sort", "stars")
            .query("order", "desc");

        debug!("Searching repositories named {}...", name);

        let response: SearchResponse = get_json(&self.transport, &request).await?;

        if response.items.is_empty() {
            return Err(ApiError::NotFound(format!("no repositories match '{}'", name)));
        }

        let total = response.items.len();
        let item = response
            .items
            .into_iter()
            .find(|item| {
                item.get("name")
                    .and_then(Value::as_str)
                    .is_some_and(|candidate| candidate.eq_ignore_ascii_case(name))
            })
            .ok_or_else(|| {
                ApiError::NotFound(format!(
                    "none of {} results is named '{}'",
                    total, name
                ))
            })?;

        let owner = item
            .pointer("/owner/login")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| ApiError::Payload {
                url: request.to_string(),
                reason: format!("repository '{}' has no owner.login", name),
            })?;

        debug!("Most popular '{}' repository belongs to {}", name, owner);

        Ok((owner, item))
    }
}
