//! Error Types
//!
//! Typed failures for the three layers of the service: matching, catalog
//! loading, and the HTTP boundary.

use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Failure raised while evaluating a single term against a single record.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The term could not be compiled into a pattern.
    ///
    /// Fails open: the caller treats the term as matching every record.
    #[error("failed to compile pattern for term {term:?}: {source}")]
    Pattern {
        term: String,
        #[source]
        source: regex::Error,
    },

    /// The predicate was handed no record at all.
    #[error("book does not exist")]
    RecordMissing,
}

impl MatchError {
    /// Whether the record should still be included when this error occurs.
    pub fn fails_open(&self) -> bool {
        matches!(self, MatchError::Pattern { .. })
    }
}

/// Failure while loading the catalog at startup. Always fatal.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("catalog source {url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode catalog JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Error returned by HTTP handlers.
///
/// Carries the headers that must be present on every response so that the
/// error path keeps the same diagnostics as a successful one.
#[derive(Debug)]
pub enum ApiError {
    /// Unexpected server error (500).
    Internal { message: String, headers: HeaderMap },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Internal { message, headers } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                headers,
                axum::Json(json!({ "error": message })),
            )
                .into_response(),
        }
    }
}
