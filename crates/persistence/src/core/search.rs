//! Search provider trait.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::{Bundle, Page, ResourceType, SearchParams, StoredResource};

use super::storage::ResourceStorage;

/// Result of a search operation.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The matching resources for the requested page.
    pub resources: Page<StoredResource>,

    /// Supplied parameters that were not applied (unknown codes).
    pub ignored_params: Vec<String>,
}

impl SearchResult {
    /// Creates a new search result.
    pub fn new(resources: Page<StoredResource>) -> Self {
        Self {
            resources,
            ignored_params: Vec::new(),
        }
    }

    /// Records parameters that were not applied.
    pub fn with_ignored(mut self, ignored_params: Vec<String>) -> Self {
        self.ignored_params = ignored_params;
        self
    }

    /// Number of matches before pagination.
    pub fn total(&self) -> usize {
        self.resources.total
    }

    /// Converts the result to a searchset Bundle.
    pub fn to_bundle(&self) -> Bundle {
        Bundle::from_page(&self.resources)
    }
}

/// Search over the resources of one type.
#[async_trait]
pub trait SearchProvider: ResourceStorage {
    /// Returns one page of the resources of `resource_type` matching every
    /// supplied parameter.
    ///
    /// No parameters means every resource of the type. Matches keep the
    /// store's enumeration order, and `total` counts all matches before
    /// pagination. No match is an empty page, never an error.
    async fn search(
        &self,
        resource_type: ResourceType,
        params: &SearchParams,
    ) -> StorageResult<SearchResult>;
}
