//! Book Catalog Search Library
//!
//! Loads a book catalog once at startup and answers `/search` requests by
//! filtering it in memory. The binary (`main.rs`) only wires these modules together.
//!
//! ## Modules
//! - **`catalog`**: Book record types, the immutable `Catalog` snapshot, and the one-time loader.
//! - **`search`**: The matching engine (term predicate, conjunctive combination, query
//!   extraction) and the HTTP handler exposing it.
//! - **`server`**: Router construction, shared request state, and the listener lifecycle.
//! - **`config`**: Environment and command-line configuration.
//! - **`error`**: Typed errors for matching, loading, and the HTTP boundary.

pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
pub mod server;
