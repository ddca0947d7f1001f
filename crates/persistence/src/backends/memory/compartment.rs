//! CompartmentProvider implementation for the in-memory backend.

use async_trait::async_trait;
use tracing::debug;

use crate::core::CompartmentProvider;
use crate::error::StorageResult;
use crate::types::{Bundle, BundleEntry, ResourceType};

use super::MemoryBackend;

#[async_trait]
impl CompartmentProvider for MemoryBackend {
    async fn everything(&self, patient_id: &str) -> StorageResult<Bundle> {
        let patient = self.store(ResourceType::Patient).get(patient_id)?;
        let reference = ResourceType::Patient.reference(patient_id);

        let mut bundle = Bundle::searchset().with_entry(BundleEntry::matched(&patient));

        // Each store is read separately; writes landing between two scans
        // may or may not be seen.
        for resource_type in ResourceType::dependents() {
            let related = self
                .store(resource_type)
                .filter(|r| r.subject_reference() == Some(reference.as_str()));
            bundle
                .entry
                .extend(related.iter().map(BundleEntry::included));
        }

        let total = bundle.entry.len();
        debug!(patient_id, total, "Assembled patient compartment");
        Ok(bundle.with_total(total))
    }
}
