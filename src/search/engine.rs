use super::matcher::TermMatcher;
use super::query::Query;
use crate::catalog::types::Book;
use crate::error::MatchError;

/// Result of running a query over the catalog.
#[derive(Debug)]
pub struct SearchOutcome<'a> {
    /// Matching books, borrowed from the catalog in catalog order.
    pub books: Vec<&'a Book>,
    /// Terms whose pattern failed to compile and were treated as matching everything.
    pub warnings: Vec<MatchError>,
}

/// Filters `books` by `query`.
///
/// A book is kept only when every term matches it. `Query::All` keeps all books
/// without evaluating anything.
pub fn search<'a>(books: &'a [Book], query: &Query) -> SearchOutcome<'a> {
    let terms = match query {
        Query::All => {
            return SearchOutcome {
                books: books.iter().collect(),
                warnings: Vec::new(),
            };
        }
        Query::Terms(terms) => terms,
    };

    let mut warnings = Vec::new();
    let matchers: Vec<TermMatcher> = terms
        .iter()
        .map(|term| {
            let (matcher, warning) = TermMatcher::compile_or_universal(term);
            warnings.extend(warning);
            matcher
        })
        .filter(|matcher| !matches!(matcher, TermMatcher::Universal))
        .collect();

    let books = books
        .iter()
        .filter(|book| matchers.iter().all(|matcher| matcher.matches(book)))
        .collect();

    SearchOutcome { books, warnings }
}
