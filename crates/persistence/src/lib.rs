//! OneCare FHIR Persistence Layer
//!
//! This crate is the resource store and query engine behind the OneCare FHIR
//! server: a versioned, typed, in-memory document store with per-type search,
//! pagination, bundle assembly and the patient `$everything` operation.
//!
//! # Architecture
//!
//! - [`types`] - Resource types, the stored-resource envelope, search and bundle types
//! - [`envelope`] - Stamps id and version metadata onto incoming payloads
//! - [`error`] - Error types for all operations
//! - [`search`] - Search parameter registry and matching functions
//! - [`core`] - Storage traits
//! - [`backends`] - Backend implementations
//!
//! # Resource Types
//!
//! Eight resource types are tracked, each in its own collection:
//! Patient, Observation, Condition, Medication, Procedure,
//! AllergyIntolerance, FamilyMemberHistory and Immunization. Ids are unique
//! within a type; the same id under two types names two resources.
//!
//! # Quick Start
//!
//! ```
//! use onecare_persistence::backends::memory::MemoryBackend;
//! use onecare_persistence::core::{CompartmentProvider, ResourceStorage, SearchProvider};
//! use onecare_persistence::types::{ResourceType, SearchParams};
//! use serde_json::json;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let store = MemoryBackend::new();
//!
//! store
//!     .create(
//!         ResourceType::Patient,
//!         json!({"resourceType": "Patient", "id": "p1", "gender": "female"}),
//!     )
//!     .await?;
//! store
//!     .create(
//!         ResourceType::Observation,
//!         json!({"resourceType": "Observation", "subject": {"reference": "Patient/p1"}}),
//!     )
//!     .await?;
//!
//! let params = SearchParams::new().with_param("gender", "female");
//! let found = store.search(ResourceType::Patient, &params).await?;
//! assert_eq!(found.total(), 1);
//!
//! let everything = store.everything("p1").await?;
//! assert_eq!(everything.total, 2);
//! # Ok::<(), onecare_persistence::StorageError>(())
//! # }).unwrap();
//! ```
//!
//! # Versioning
//!
//! Every create produces `meta.versionId = "1"`; every update increments it by
//! one and refreshes `meta.lastUpdated`. Versions are never reused, and
//! resources are never deleted.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod envelope;
pub mod error;
pub mod search;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{StorageError, StorageResult};
pub use types::{Bundle, Pagination, ResourceType, SearchParams, StoredResource};

// Re-export core traits
pub use core::{CompartmentProvider, ResourceStorage, SearchProvider, SearchResult};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
