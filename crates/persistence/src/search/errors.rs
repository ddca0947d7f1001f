//! Search-specific error types.

use std::fmt;

use crate::types::ResourceType;

/// Error during registry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A parameter with this code is already registered for the type.
    Duplicate {
        /// The resource type.
        resource_type: ResourceType,
        /// The duplicate code.
        code: String,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Duplicate {
                resource_type,
                code,
            } => {
                write!(
                    f,
                    "SearchParameter '{}' already registered for {}",
                    code, resource_type
                )
            }
        }
    }
}

impl std::error::Error for RegistryError {}
