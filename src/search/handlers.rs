use super::engine::search;
use super::query::Query;
use crate::catalog::types::Catalog;
use crate::error::ApiError;
use crate::server::{RequestStats, SearchSettings};
use axum::Extension;
use axum::extract::RawQuery;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use std::sync::Arc;

/// Header carrying the size of the whole catalog, filtered or not.
pub const TOTAL_BOOKS_HEADER: &str = "x-debug-total-num-books";

pub async fn handle_search(
    RawQuery(raw): RawQuery,
    Extension(catalog): Extension<Arc<Catalog>>,
    Extension(settings): Extension<Arc<SearchSettings>>,
    Extension(stats): Extension<Arc<RequestStats>>,
) -> Result<(StatusCode, HeaderMap, String), ApiError> {
    let request_no = stats.record_request();
    tracing::info!("Request #{}: Num of books: {}", request_no, catalog.len());

    let mut headers = HeaderMap::new();
    headers.insert(TOTAL_BOOKS_HEADER, HeaderValue::from(catalog.len()));

    let query = Query::from_raw(raw.as_deref(), &settings.query_param);
    let outcome = search(catalog.books(), &query);

    for warning in &outcome.warnings {
        tracing::warn!("Request #{}: {} (term passes every book)", request_no, warning);
    }
    if let Query::Terms(terms) = &query {
        tracing::info!("Request #{}: {:?}", request_no, terms);
        tracing::info!(
            "Request #{}: Filtered num of books: {}",
            request_no,
            outcome.books.len()
        );
    }

    let body = match serde_json::to_string_pretty(&outcome.books) {
        Ok(body) => body,
        Err(e) => {
            tracing::error!("Request #{}: Failed to serialize books: {}", request_no, e);
            return Err(ApiError::Internal {
                message: format!("failed to serialize books: {}", e),
                headers,
            });
        }
    };

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    Ok((StatusCode::OK, headers, body))
}
