//! Error types for the persistence layer.
//!
//! Errors are grouped by category under [`StorageError`]: resource state,
//! payload validation, unsupported interactions and search input. The store
//! only signals these; turning them into responses is the caller's job.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

use crate::types::ResourceType;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Resource state errors
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Payload validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Interactions the store deliberately does not implement
    #[error(transparent)]
    Operation(#[from] OperationError),

    /// Search input errors
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Errors related to resource state.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The requested resource was not found.
    #[error("resource not found: {resource_type}/{id}")]
    NotFound {
        resource_type: ResourceType,
        id: String,
    },

    /// A resource with the given ID already exists.
    #[error("resource already exists: {resource_type}/{id}")]
    AlreadyExists {
        resource_type: ResourceType,
        id: String,
    },
}

/// Errors raised while validating a payload at the store boundary.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The payload declares a different (or no) resource type.
    #[error("type mismatch: expected {expected}, payload declares {}", found.as_deref().unwrap_or("nothing"))]
    TypeMismatch {
        expected: ResourceType,
        found: Option<String>,
    },

    /// The payload is structurally unusable.
    #[error("invalid resource: {message}")]
    InvalidResource { message: String },

    /// The resource type is not one of the tracked types.
    #[error("unsupported resource type: {resource_type}")]
    UnsupportedResourceType { resource_type: String },
}

/// Errors for interactions that are intentionally not implemented.
#[derive(Error, Debug)]
pub enum OperationError {
    /// The interaction is not supported for this resource type.
    #[error("{interaction} is not supported for {resource_type}")]
    NotSupported {
        resource_type: ResourceType,
        interaction: String,
    },
}

/// Errors related to search input.
///
/// The search engine recovers from these locally by substituting defaults,
/// so they never escape [`SearchProvider::search`](crate::core::SearchProvider::search).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A pagination parameter was negative or non-numeric.
    #[error("invalid value '{value}' for {parameter}")]
    InvalidQuery { parameter: String, value: String },
}

impl StorageError {
    /// Builds the error for an interaction the store does not implement.
    pub fn not_supported(resource_type: ResourceType, interaction: impl Into<String>) -> Self {
        StorageError::Operation(OperationError::NotSupported {
            resource_type,
            interaction: interaction.into(),
        })
    }

    /// Builds a not-found error.
    pub fn not_found(resource_type: ResourceType, id: impl Into<String>) -> Self {
        StorageError::Resource(ResourceError::NotFound {
            resource_type,
            id: id.into(),
        })
    }

    /// Returns `true` if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::Resource(ResourceError::NotFound { .. }))
    }

    /// Returns `true` if this is a type mismatch.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(
            self,
            StorageError::Validation(ValidationError::TypeMismatch { .. })
        )
    }

    /// Returns `true` if the interaction is not supported.
    pub fn is_not_supported(&self) -> bool {
        matches!(
            self,
            StorageError::Operation(OperationError::NotSupported { .. })
        )
    }
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
