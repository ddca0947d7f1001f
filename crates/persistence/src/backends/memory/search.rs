//! SearchProvider implementation for the in-memory backend.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::core::{SearchProvider, SearchResult};
use crate::error::StorageResult;
use crate::search::SearchParameterDefinition;
use crate::types::{ResourceType, SearchParams};

use super::MemoryBackend;

#[async_trait]
impl SearchProvider for MemoryBackend {
    async fn search(
        &self,
        resource_type: ResourceType,
        params: &SearchParams,
    ) -> StorageResult<SearchResult> {
        let mut filters: Vec<(Arc<SearchParameterDefinition>, &str)> = Vec::new();
        let mut ignored = Vec::new();

        for (code, value) in params.iter() {
            match self.registry().get_param(resource_type, code) {
                Some(definition) => filters.push((definition, value)),
                None => ignored.push(code.to_string()),
            }
        }

        if !ignored.is_empty() {
            debug!(
                resource_type = %resource_type,
                ignored = ?ignored,
                "Ignoring unsupported search parameters"
            );
        }

        let matches = self.store(resource_type).filter(|resource| {
            filters
                .iter()
                .all(|(definition, value)| definition.matches(resource.content(), value))
        });
        let page = params.pagination().paginate(matches);

        debug!(
            resource_type = %resource_type,
            filters = filters.len(),
            total = page.total,
            returned = page.len(),
            "Search completed"
        );
        Ok(SearchResult::new(page).with_ignored(ignored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ResourceStorage;
    use serde_json::json;

    #[tokio::test]
    async fn test_unknown_params_are_reported() {
        let backend = MemoryBackend::new();
        backend
            .create(ResourceType::Medication, json!({"resourceType": "Medication"}))
            .await
            .unwrap();

        let params = SearchParams::new()
            .with_param("code", "abc")
            .with_param("_sort", "date");
        let result = backend.search(ResourceType::Medication, &params).await.unwrap();

        assert_eq!(result.total(), 1);
        assert_eq!(result.ignored_params, vec!["code", "_sort"]);
    }

    #[tokio::test]
    async fn test_search_empty_type() {
        let backend = MemoryBackend::new();
        let result = backend
            .search(ResourceType::Procedure, &SearchParams::new())
            .await
            .unwrap();
        assert_eq!(result.total(), 0);
        assert!(result.resources.is_empty());
        assert!(result.ignored_params.is_empty());
    }
}
