//! In-memory backend.

use std::fmt::Debug;
use std::sync::Arc;

use crate::search::SearchParameterRegistry;
use crate::types::ResourceType;

use super::type_store::TypeStore;

/// In-memory storage backend.
///
/// Owns one [`TypeStore`] per [`ResourceType`] plus the search parameter
/// registry. Nothing is global: callers share the backend through an `Arc`.
/// Nothing survives a restart.
pub struct MemoryBackend {
    stores: [TypeStore; ResourceType::ALL.len()],
    registry: Arc<SearchParameterRegistry>,
}

impl Debug for MemoryBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryBackend")
            .field("resources", &self.len())
            .field("search_registry_len", &self.registry.len())
            .finish_non_exhaustive()
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    /// Creates an empty backend with the standard search parameters.
    pub fn new() -> Self {
        Self::with_registry(SearchParameterRegistry::standard())
    }

    /// Creates an empty backend with a custom search parameter registry.
    pub fn with_registry(registry: SearchParameterRegistry) -> Self {
        tracing::debug!(
            search_params = registry.len(),
            "Initialized in-memory backend"
        );
        Self {
            stores: ResourceType::ALL.map(TypeStore::new),
            registry: Arc::new(registry),
        }
    }

    /// Returns the store for `resource_type`.
    pub fn store(&self, resource_type: ResourceType) -> &TypeStore {
        // ALL lists the variants in declaration order.
        &self.stores[resource_type as usize]
    }

    /// Returns the search parameter registry.
    pub fn registry(&self) -> &SearchParameterRegistry {
        &self.registry
    }

    /// Returns the number of resources of one type.
    pub fn count(&self, resource_type: ResourceType) -> usize {
        self.store(resource_type).len()
    }

    /// Returns the number of resources across every type.
    pub fn len(&self) -> usize {
        self.stores.iter().map(TypeStore::len).sum()
    }

    /// Returns `true` if no resource of any type is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
