//! Pagination types for search results.
//!
//! Search uses plain offset pagination: a page is the slice
//! `[offset, offset + count)` of the fully filtered result set.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SearchError;

/// Name of the page-size query parameter.
pub const COUNT_PARAM: &str = "_count";

/// Name of the page-offset query parameter.
pub const OFFSET_PARAM: &str = "_offset";

/// Page size used when none (or an invalid one) is supplied.
pub const DEFAULT_COUNT: usize = 20;

/// Pagination configuration for a search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Maximum number of results to return.
    pub count: usize,

    /// Number of matching results to skip.
    pub offset: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            offset: 0,
        }
    }
}

impl Pagination {
    /// Creates pagination with explicit values.
    pub fn new(count: usize, offset: usize) -> Self {
        Self { count, offset }
    }

    /// Builds pagination from raw query values.
    ///
    /// Missing, negative or non-numeric values fall back to the defaults
    /// (`count = 20`, `offset = 0`) independently of each other; bad input is
    /// never an error.
    pub fn from_raw(count: Option<&str>, offset: Option<&str>) -> Self {
        let count = match count.map(|raw| parse_non_negative(COUNT_PARAM, raw)) {
            Some(Ok(count)) => count,
            Some(Err(err)) => {
                debug!(error = %err, "Using default page size");
                DEFAULT_COUNT
            }
            None => DEFAULT_COUNT,
        };
        let offset = match offset.map(|raw| parse_non_negative(OFFSET_PARAM, raw)) {
            Some(Ok(offset)) => offset,
            Some(Err(err)) => {
                debug!(error = %err, "Using default page offset");
                0
            }
            None => 0,
        };
        Self { count, offset }
    }

    /// Applies this pagination to a fully filtered result set.
    ///
    /// The total is taken before slicing. An offset past the end yields an
    /// empty page.
    pub fn paginate<T>(&self, items: Vec<T>) -> Page<T> {
        let total = items.len();
        let items = items
            .into_iter()
            .skip(self.offset)
            .take(self.count)
            .collect();
        Page { items, total }
    }
}

/// Parses a pagination value, rejecting anything that is not a non-negative integer.
fn parse_non_negative(parameter: &str, raw: &str) -> Result<usize, SearchError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| SearchError::InvalidQuery {
            parameter: parameter.to_string(),
            value: raw.to_string(),
        })
}

/// One page of a result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,

    /// Size of the full result set before pagination.
    pub total: usize,
}

impl<T> Page<T> {
    /// Returns the number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
