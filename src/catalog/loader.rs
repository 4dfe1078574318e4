use super::types::{Book, Catalog};
use crate::error::CatalogError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/equestrianvault/horsebooks-data/main/data/books.json";

const USER_AGENT: &str = concat!("catalog-search/", env!("CARGO_PKG_VERSION"));

/// Where the catalog document is read from.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogSource {
    Remote(String),
    File(PathBuf),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Remote(url) => write!(f, "{}", url),
            CatalogSource::File(path) => write!(f, "file://{}", path.display()),
        }
    }
}

/// Loads and decodes the whole catalog.
///
/// Called exactly once before the listener is bound. Any error is fatal to the
/// caller; there is no partial catalog.
pub async fn load_catalog(
    source: &CatalogSource,
    timeout: Duration,
) -> Result<Catalog, CatalogError> {
    tracing::info!("Loading catalog from {}", source);

    let body = match source {
        CatalogSource::Remote(url) => fetch_remote(url, timeout).await?,
        CatalogSource::File(path) => read_file(path).await?,
    };

    let books = decode_books(&body)?;
    tracing::debug!("Decoded catalog JSON ({} bytes)", body.len());
    tracing::info!("Books: {}", books.len());

    Ok(Catalog::new(books))
}

/// Decodes a JSON array of book records, keeping document order.
pub fn decode_books(body: &[u8]) -> Result<Vec<Book>, CatalogError> {
    Ok(serde_json::from_slice(body)?)
}

async fn fetch_remote(url: &str, timeout: Duration) -> Result<Vec<u8>, CatalogError> {
    let request_error = |source| CatalogError::Request {
        url: url.to_string(),
        source,
    };

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(request_error)?;
    tracing::debug!("Constructed catalog request (timeout {:?})", timeout);

    let response = client.get(url).send().await.map_err(request_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    tracing::debug!("Catalog request answered with {}", status);

    let body = response.bytes().await.map_err(request_error)?;
    tracing::debug!("Read catalog response body");

    Ok(body.to_vec())
}

async fn read_file(path: &Path) -> Result<Vec<u8>, CatalogError> {
    tokio::fs::read(path).await.map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })
}
