//! Search query extractor.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use onecare_persistence::types::SearchParams;

/// The raw query pairs of a search request, in the order given.
///
/// Parsing into [`SearchParams`] (pagination split, empty values dropped)
/// happens in [`SearchQuery::params`]; the raw pairs are kept for building
/// Bundle links.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pairs: Vec<(String, String)>,
}

impl SearchQuery {
    /// Parses a raw `application/x-www-form-urlencoded` query string.
    pub fn parse(query: &str) -> Self {
        let pairs = url::form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    /// Builds from already decoded pairs.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// Returns the raw pairs.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Converts to store search parameters.
    pub fn params(&self) -> SearchParams {
        SearchParams::from_pairs(self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

impl<S> FromRequestParts<S> for SearchQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::parse(parts.uri.query().unwrap_or_default()))
    }
}
