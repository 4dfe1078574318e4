//! Search Module
//!
//! Filters the in-memory catalog by the terms of a request.
//!
//! ## Matching Rules
//! - A term is a literal, case-insensitive substring; regex metacharacters carry no meaning.
//! - A term shorter than three characters matches every book.
//! - A term matches a book when it occurs in any tag, the title, or any author name.
//! - Several terms are combined with AND; the catalog order is kept.
//! - No terms at all returns the full catalog.
//!
//! ## Submodules
//! - **`matcher`**: The single-term predicate.
//! - **`engine`**: Applies all terms of a query across the catalog.
//! - **`query`**: Extracts terms from the raw query string.
//! - **`handlers`**: HTTP request handler for the Axum web server.

pub mod engine;
pub mod handlers;
pub mod matcher;
pub mod query;
