//! Catalog Data Types
//!
//! Record layout of the catalog JSON document. Field names on the wire follow the
//! upstream dataset (`img`, `dateAdded`), everything else maps one to one.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub title: String,
    pub url: String,
}

/// A single book record.
///
/// Only `title`, `tags` and the author names are inspected by the matcher; the
/// remaining fields are passed through to clients untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub edition: String,
    #[serde(rename = "img")]
    pub image: String,
    pub rating: String,
    pub date_added: String,
    pub expiry: String,
    pub authors: Vec<Author>,
    pub links: Vec<Link>,
    pub tags: Vec<String>,
}

/// Immutable snapshot of every book loaded at startup.
///
/// There is no way to mutate a `Catalog` once built; share it with `Arc<Catalog>`.
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// All records, in source order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
