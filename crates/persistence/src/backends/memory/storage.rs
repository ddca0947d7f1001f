//! ResourceStorage implementation for the in-memory backend.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::core::ResourceStorage;
use crate::envelope;
use crate::error::StorageResult;
use crate::types::{ResourceType, StoredResource};

use super::MemoryBackend;

#[async_trait]
impl ResourceStorage for MemoryBackend {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create(
        &self,
        resource_type: ResourceType,
        resource: Value,
    ) -> StorageResult<StoredResource> {
        let stored = envelope::stamp(resource_type, resource, None)?;
        self.store(resource_type).insert_new(stored.clone())?;

        debug!(
            resource_type = %resource_type,
            id = stored.id(),
            "Created resource"
        );
        Ok(stored)
    }

    async fn read(&self, resource_type: ResourceType, id: &str) -> StorageResult<StoredResource> {
        self.store(resource_type).get(id)
    }

    async fn update(
        &self,
        resource_type: ResourceType,
        id: &str,
        resource: Value,
    ) -> StorageResult<StoredResource> {
        let updated = self
            .store(resource_type)
            .replace_with(id, |prior| envelope::stamp(resource_type, resource, Some(prior)))?;

        debug!(
            resource_type = %resource_type,
            id = updated.id(),
            version = updated.version(),
            "Updated resource"
        );
        Ok(updated)
    }

    async fn count(&self, resource_type: ResourceType) -> StorageResult<usize> {
        Ok(self.store(resource_type).len())
    }
}
