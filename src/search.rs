use serde::Deserialize;

use crate::database::models::Place;

/// Query string accepted by `/search`.
#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>
}

/// Selects every place whose name OR state contains the search term,
/// ignoring case.
///
/// A missing term is treated as the empty string, so it matches every place.
/// Only ASCII case folding is guaranteed to agree between stores: Postgres
/// `ILIKE` folds by the database collation, the in-memory store by Unicode
/// lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceFilter {
    term: String
}

impl PlaceFilter {
    pub fn new(term: Option<String>) -> PlaceFilter {
        PlaceFilter {
            term: term.unwrap_or_default()
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_unfiltered(&self) -> bool {
        self.term.is_empty()
    }

    pub fn matches(&self, place: &Place) -> bool {
        contains_ignore_case(&place.name, &self.term)
            || contains_ignore_case(&place.state, &self.term)
    }

    /// `ILIKE` pattern for the term, with LIKE metacharacters escaped so
    /// they match literally under the default `\` escape.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.term.len() + 2);
        pattern.push('%');
        for c in self.term.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

impl From<SearchParams> for PlaceFilter {
    fn from(params: SearchParams) -> Self {
        PlaceFilter::new(params.q)
    }
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
