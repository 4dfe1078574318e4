//! Match Predicate
//!
//! Decides whether one query term matches one book. A term is matched as a
//! literal, case-insensitive substring of a tag, the title, or an author name.

use crate::catalog::types::Book;
use crate::error::MatchError;
use regex::{Regex, RegexBuilder};

/// Terms shorter than this (in characters) do not filter anything.
pub const MIN_TERM_LEN: usize = 3;

/// A query term compiled for repeated evaluation against many books.
#[derive(Debug, Clone)]
pub enum TermMatcher {
    /// Matches every book.
    Universal,
    /// Case-insensitive literal substring.
    Substring(Regex),
}

impl TermMatcher {
    /// Compiles `term`. Short terms become `Universal` without touching the regex engine.
    pub fn compile(term: &str) -> Result<Self, MatchError> {
        if term.chars().count() < MIN_TERM_LEN {
            return Ok(TermMatcher::Universal);
        }

        RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()
            .map(TermMatcher::Substring)
            .map_err(|source| MatchError::Pattern {
                term: term.to_string(),
                source,
            })
    }

    /// Compiles `term`, falling back to `Universal` when the pattern cannot be built.
    ///
    /// The compile error is handed back alongside so the caller can report it.
    pub fn compile_or_universal(term: &str) -> (Self, Option<MatchError>) {
        match Self::compile(term) {
            Ok(matcher) => (matcher, None),
            Err(err) => (TermMatcher::Universal, Some(err)),
        }
    }

    pub fn matches(&self, book: &Book) -> bool {
        let pattern = match self {
            TermMatcher::Universal => return true,
            TermMatcher::Substring(pattern) => pattern,
        };

        // tags, then title, then author names
        book.tags.iter().any(|tag| pattern.is_match(tag))
            || pattern.is_match(&book.title)
            || book
                .authors
                .iter()
                .any(|author| pattern.is_match(&author.name))
    }
}

/// One-shot predicate for a single term and a single book.
///
/// A compile failure is returned as `MatchError::Pattern`; such errors fail open
/// (see [`MatchError::fails_open`]). A missing book is `MatchError::RecordMissing`.
pub fn is_term_in_book(term: &str, book: Option<&Book>) -> Result<bool, MatchError> {
    let matcher = TermMatcher::compile(term)?;
    if let TermMatcher::Universal = matcher {
        return Ok(true);
    }

    let book = book.ok_or(MatchError::RecordMissing)?;
    Ok(matcher.matches(book))
}
