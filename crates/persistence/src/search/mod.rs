//! Search parameter support.
//!
//! - [`registry`] - The per-type table of supported parameters
//! - [`predicates`] - Matching functions applied to resource JSON
//! - [`errors`] - Search-specific error types
//!
//! Search runs as a filter over a snapshot of one type's resources: every
//! supplied parameter that the registry knows for the type must match, and
//! unknown parameters are ignored.
//!
//! # Example
//!
//! ```
//! use onecare_persistence::search::SearchParameterRegistry;
//! use onecare_persistence::types::ResourceType;
//! use serde_json::json;
//!
//! let registry = SearchParameterRegistry::standard();
//! let gender = registry.get_param(ResourceType::Patient, "gender").unwrap();
//!
//! assert!(gender.matches(&json!({"gender": "female"}), "female"));
//! assert!(registry.get_param(ResourceType::Patient, "color").is_none());
//! ```

pub mod errors;
pub mod predicates;
pub mod registry;

pub use errors::RegistryError;
pub use registry::{Matcher, SearchParamType, SearchParameterDefinition, SearchParameterRegistry};
