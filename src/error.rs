//! Error taxonomy shared by all upstream wrappers.

use reqwest::StatusCode;
use thiserror::Error;

/// Coarse classification of an [`ApiError`], used by callers that only need
/// to decide how to present a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The upstream answered, but with a non-success status or an unusable body.
    Upstream,
    /// The query was valid but matched nothing.
    NotFound,
    /// The request never produced a response.
    Transport,
    /// The caller's arguments were rejected before any request was sent.
    InvalidQuery,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("{url} returned a malformed JSON body")]
    MalformedJson {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected payload from {url}: {reason}")]
    Payload { url: String, reason: String },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Status { .. } | ApiError::MalformedJson { .. } | ApiError::Payload { .. } => {
                ErrorKind::Upstream
            }
            ApiError::NotFound(_) => ErrorKind::NotFound,
            ApiError::InvalidQuery(_) => ErrorKind::InvalidQuery,
            ApiError::Transport { .. } | ApiError::Client(_) => ErrorKind::Transport,
        }
    }

    /// HTTP status reported by the upstream, if the failure carried one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
