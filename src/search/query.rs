//! Query Term Extraction
//!
//! Pulls the search terms out of a raw (still percent-encoded) query string.

use url::form_urlencoded;

/// Default name of the search parameter.
pub const DEFAULT_QUERY_PARAM: &str = "q";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// The parameter was absent: return the whole catalog.
    All,
    /// One term per occurrence of the parameter, in request order. Never empty.
    Terms(Vec<String>),
}

impl Query {
    /// Collects every occurrence of `param` from `raw`.
    ///
    /// Values are form-decoded (`+` is a space, `%XX` escapes are resolved). An
    /// occurrence without a value still counts as an empty term.
    pub fn from_raw(raw: Option<&str>, param: &str) -> Self {
        let terms: Vec<String> = raw
            .map(|raw| {
                form_urlencoded::parse(raw.as_bytes())
                    .filter(|(key, _)| key == param)
                    .map(|(_, value)| value.into_owned())
                    .collect()
            })
            .unwrap_or_default();

        if terms.is_empty() {
            Query::All
        } else {
            Query::Terms(terms)
        }
    }

    pub fn terms(&self) -> &[String] {
        match self {
            Query::All => &[],
            Query::Terms(terms) => terms,
        }
    }
}
