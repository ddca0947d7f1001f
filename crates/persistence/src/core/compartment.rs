//! Patient compartment aggregation.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::Bundle;

use super::storage::ResourceStorage;

/// Retrieves a patient together with the resources that reference it.
#[async_trait]
pub trait CompartmentProvider: ResourceStorage {
    /// Implements `Patient/{id}/$everything`.
    ///
    /// The bundle holds the patient first, then for each other tracked type
    /// (in [`ResourceType::dependents`](crate::types::ResourceType::dependents)
    /// order) every resource whose `subject.reference` is `Patient/{id}`, in
    /// that type's enumeration order. `total` is 1 plus the number of
    /// dependents. Only direct references count.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If the patient does not exist;
    ///   no partial bundle is produced
    async fn everything(&self, patient_id: &str) -> StorageResult<Bundle>;
}
