//! Shared fixtures for the in-memory backend integration tests.

#![allow(dead_code)]

use serde_json::{Value, json};

use onecare_persistence::backends::memory::MemoryBackend;
use onecare_persistence::core::ResourceStorage;
use onecare_persistence::types::{ResourceType, StoredResource};

pub fn create_backend() -> MemoryBackend {
    MemoryBackend::new()
}

pub fn patient_json(id: &str, family: &str, given: &str, gender: &str, birth_date: &str) -> Value {
    json!({
        "resourceType": "Patient",
        "id": id,
        "name": [{"use": "official", "family": family, "given": [given]}],
        "gender": gender,
        "birthDate": birth_date
    })
}

pub fn observation_json(patient_id: &str, code: &str, category: &str, effective: &str) -> Value {
    json!({
        "resourceType": "Observation",
        "status": "final",
        "category": [{"coding": [{
            "system": "http://terminology.hl7.org/CodeSystem/observation-category",
            "code": category
        }]}],
        "code": {"coding": [{"system": "http://loinc.org", "code": code}]},
        "subject": {"reference": format!("Patient/{}", patient_id)},
        "effectiveDateTime": effective
    })
}

pub fn condition_json(patient_id: &str, clinical_status: &str, onset: &str) -> Value {
    json!({
        "resourceType": "Condition",
        "clinicalStatus": {"coding": [{
            "system": "http://terminology.hl7.org/CodeSystem/condition-clinical",
            "code": clinical_status
        }]},
        "code": {"text": "Hypertension"},
        "subject": {"reference": format!("Patient/{}", patient_id)},
        "onsetDateTime": onset
    })
}

pub async fn create(
    backend: &MemoryBackend,
    resource_type: ResourceType,
    resource: Value,
) -> StoredResource {
    backend
        .create(resource_type, resource)
        .await
        .expect("create should succeed")
}
