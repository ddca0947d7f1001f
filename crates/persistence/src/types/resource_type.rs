//! The closed set of resource types held by the store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A resource type tracked by the store.
///
/// Each variant owns an independent collection; ids only need to be unique
/// within a single type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceType {
    /// Demographics of a person receiving care.
    Patient,
    /// Measurements and simple assertions about a patient.
    Observation,
    /// Problems, diagnoses and other clinical concerns.
    Condition,
    /// Medication definitions.
    Medication,
    /// Actions performed on or for a patient.
    Procedure,
    /// Allergies and intolerances.
    AllergyIntolerance,
    /// Health conditions of relatives.
    FamilyMemberHistory,
    /// Vaccine administrations.
    Immunization,
}

impl ResourceType {
    /// Every tracked type, in declaration order.
    pub const ALL: [ResourceType; 8] = [
        ResourceType::Patient,
        ResourceType::Observation,
        ResourceType::Condition,
        ResourceType::Medication,
        ResourceType::Procedure,
        ResourceType::AllergyIntolerance,
        ResourceType::FamilyMemberHistory,
        ResourceType::Immunization,
    ];

    /// Returns the FHIR name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Patient => "Patient",
            ResourceType::Observation => "Observation",
            ResourceType::Condition => "Condition",
            ResourceType::Medication => "Medication",
            ResourceType::Procedure => "Procedure",
            ResourceType::AllergyIntolerance => "AllergyIntolerance",
            ResourceType::FamilyMemberHistory => "FamilyMemberHistory",
            ResourceType::Immunization => "Immunization",
        }
    }

    /// Types that can reference a patient, scanned by `$everything`.
    pub fn dependents() -> impl Iterator<Item = ResourceType> {
        Self::ALL
            .into_iter()
            .filter(|t| *t != ResourceType::Patient)
    }

    /// Builds the literal reference `"<Type>/<id>"`.
    pub fn reference(&self, id: &str) -> String {
        format!("{}/{}", self.as_str(), id)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ValidationError::UnsupportedResourceType {
                resource_type: s.to_string(),
            })
    }
}
