//! Catalog Module
//!
//! Owns the book dataset served by the search endpoint.
//!
//! ## Lifecycle
//! 1. **Load**: `loader` fetches the JSON document once, from a remote URL or a local file.
//! 2. **Freeze**: the decoded records are wrapped into an immutable `Catalog` snapshot.
//! 3. **Share**: the snapshot is handed to the HTTP layer behind an `Arc` and read
//!    concurrently by every request until the process exits.

pub mod loader;
pub mod types;
