//! Axum extractors for FHIR-specific data.
//!
//! - [`FhirResource`] - Extract a JSON resource body
//! - [`SearchQuery`] - Extract ordered search parameters

mod fhir_resource;
mod search_query;

pub use fhir_resource::{FhirResource, FhirResourceRejection};
pub use search_query::SearchQuery;
