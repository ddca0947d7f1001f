//! Search request types.

use serde::{Deserialize, Serialize};

use super::pagination::{COUNT_PARAM, OFFSET_PARAM, Pagination};

/// A parsed search request: filter parameters plus pagination.
///
/// Parameters are kept in the order they were supplied. Empty values are
/// dropped on the way in, so every stored parameter is active.
///
/// # Examples
///
/// ```
/// use onecare_persistence::types::SearchParams;
///
/// let params = SearchParams::from_pairs([
///     ("name", "smith"),
///     ("gender", ""),
///     ("_count", "2"),
///     ("_offset", "1"),
/// ]);
///
/// assert_eq!(params.len(), 1);
/// assert_eq!(params.get("name"), Some("smith"));
/// assert_eq!(params.pagination().count, 2);
/// assert_eq!(params.pagination().offset, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    params: Vec<(String, String)>,
    pagination: Pagination,
}

impl SearchParams {
    /// Creates an empty request (every resource, default page).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a request from raw query pairs.
    ///
    /// `_count` and `_offset` are taken as pagination (invalid values fall
    /// back to defaults); every other non-empty pair becomes a filter.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut count = None;
        let mut offset = None;
        let mut params = Vec::new();

        for (name, value) in pairs {
            let (name, value) = (name.as_ref(), value.as_ref());
            match name {
                COUNT_PARAM => count = Some(value.to_string()),
                OFFSET_PARAM => offset = Some(value.to_string()),
                _ if value.is_empty() => {}
                _ => params.push((name.to_string(), value.to_string())),
            }
        }

        Self {
            params,
            pagination: Pagination::from_raw(count.as_deref(), offset.as_deref()),
        }
    }

    /// Adds a filter parameter; empty values are ignored.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.params.push((name.into(), value));
        }
        self
    }

    /// Replaces the pagination.
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    /// Iterates over the filter parameters in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Returns the first value supplied for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// Returns the number of filter parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` if there are no filters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the pagination.
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }
}
