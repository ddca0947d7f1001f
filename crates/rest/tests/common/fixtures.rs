//! Test fixtures for REST API testing.

use serde_json::{Value, json};

/// A Patient with one official name.
pub fn patient(id: &str, given: &str, family: &str, gender: &str) -> Value {
    json!({
        "resourceType": "Patient",
        "id": id,
        "name": [{"use": "official", "given": [given], "family": family}],
        "gender": gender,
        "birthDate": "1980-04-12"
    })
}

/// An Observation about `patient_id` with a LOINC code.
pub fn observation(id: &str, patient_id: &str, code: &str) -> Value {
    json!({
        "resourceType": "Observation",
        "id": id,
        "status": "final",
        "category": [{"coding": [{"code": "vital-signs"}]}],
        "code": {"coding": [{"system": "http://loinc.org", "code": code}]},
        "subject": {"reference": format!("Patient/{}", patient_id)},
        "effectiveDateTime": "2024-01-15T08:30:00Z"
    })
}

/// A Condition about `patient_id`.
pub fn condition(id: &str, patient_id: &str, clinical_status: &str) -> Value {
    json!({
        "resourceType": "Condition",
        "id": id,
        "clinicalStatus": {"coding": [{"code": clinical_status}]},
        "subject": {"reference": format!("Patient/{}", patient_id)},
        "onsetDateTime": "2019-06-01"
    })
}

/// An Immunization for `patient_id`, referenced through `patient` rather
/// than `subject`.
pub fn immunization(id: &str, patient_id: &str) -> Value {
    json!({
        "resourceType": "Immunization",
        "id": id,
        "status": "completed",
        "patient": {"reference": format!("Patient/{}", patient_id)}
    })
}
