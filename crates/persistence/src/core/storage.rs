//! Core resource storage trait.
//!
//! This module defines the [`ResourceStorage`] trait, which provides the
//! create, read and update operations for FHIR resources. Delete is part of
//! the contract but is not implemented by the store; it always answers with
//! [`OperationError::NotSupported`](crate::error::OperationError::NotSupported).

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{StorageError, StorageResult};
use crate::types::{ResourceType, StoredResource};

/// Core storage trait for FHIR resources.
///
/// # Versioning
///
/// Create stamps version 1. Every successful update replaces the whole
/// payload and increments the version by exactly one. The logical id never
/// changes after creation.
///
/// # Atomicity
///
/// Each call is atomic with respect to the resource it touches: a failed
/// update leaves the stored resource untouched.
///
/// # Example
///
/// ```
/// use onecare_persistence::backends::memory::MemoryBackend;
/// use onecare_persistence::core::ResourceStorage;
/// use onecare_persistence::types::ResourceType;
/// use serde_json::json;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let storage = MemoryBackend::new();
///
/// let patient = json!({"resourceType": "Patient", "name": [{"family": "Smith"}]});
/// let stored = storage.create(ResourceType::Patient, patient).await.unwrap();
/// assert_eq!(stored.version_id(), "1");
///
/// let mut content = stored.content().clone();
/// content["active"] = json!(true);
/// let updated = storage
///     .update(ResourceType::Patient, stored.id(), content)
///     .await
///     .unwrap();
/// assert_eq!(updated.version_id(), "2");
/// assert_eq!(updated.id(), stored.id());
/// # });
/// ```
#[async_trait]
pub trait ResourceStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Creates a new resource.
    ///
    /// The id is taken from the payload when present, otherwise one is
    /// generated.
    ///
    /// # Errors
    ///
    /// * `StorageError::Validation(TypeMismatch)` - If the payload declares another type
    /// * `StorageError::Validation(InvalidResource)` - If the payload is not a usable resource
    /// * `StorageError::Resource(AlreadyExists)` - If the supplied id is taken
    async fn create(
        &self,
        resource_type: ResourceType,
        resource: Value,
    ) -> StorageResult<StoredResource>;

    /// Reads the current version of a resource.
    ///
    /// Returns the bare resource. Callers that need it wrapped in a
    /// searchset Bundle use [`Bundle::single`](crate::types::Bundle::single):
    ///
    /// ```
    /// use onecare_persistence::backends::memory::MemoryBackend;
    /// use onecare_persistence::core::ResourceStorage;
    /// use onecare_persistence::types::{Bundle, ResourceType};
    /// use serde_json::json;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let storage = MemoryBackend::new();
    /// storage
    ///     .create(ResourceType::Medication, json!({"resourceType": "Medication", "id": "m1"}))
    ///     .await?;
    ///
    /// let stored = storage.read(ResourceType::Medication, "m1").await?;
    /// let bundle = Bundle::single(&stored);
    /// assert_eq!(bundle.total, 1);
    /// assert_eq!(bundle.entry[0].resource["id"], "m1");
    /// # Ok::<(), onecare_persistence::StorageError>(())
    /// # }).unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If no resource has this id
    async fn read(&self, resource_type: ResourceType, id: &str) -> StorageResult<StoredResource>;

    /// Replaces an existing resource.
    ///
    /// The id in the path wins over any id in the payload, so the payload id
    /// is not validated.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If no resource has this id
    /// * `StorageError::Validation(TypeMismatch)` - If the payload declares another type
    /// * `StorageError::Validation(InvalidResource)` - If the payload is not an object or has a malformed `meta`
    async fn update(
        &self,
        resource_type: ResourceType,
        id: &str,
        resource: Value,
    ) -> StorageResult<StoredResource>;

    /// Deletes a resource.
    ///
    /// Resources are never physically removed, so the default answers with
    /// `NotSupported` and changes nothing.
    async fn delete(&self, resource_type: ResourceType, id: &str) -> StorageResult<()> {
        let _ = id;
        Err(StorageError::not_supported(resource_type, "delete"))
    }

    /// Counts the stored resources of one type.
    async fn count(&self, resource_type: ResourceType) -> StorageResult<usize>;

    /// Checks whether a resource exists.
    async fn exists(&self, resource_type: ResourceType, id: &str) -> StorageResult<bool> {
        match self.read(resource_type, id).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }
}
