//! Application state for the FHIR REST API.
//!
//! Handlers reach the store only through this state; they never see the
//! backend's internals.

use std::sync::Arc;

use onecare_persistence::core::ResourceStorage;

use crate::config::ServerConfig;

/// Shared state handed to every handler.
pub struct AppState<S> {
    /// The storage backend.
    storage: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: ResourceStorage> AppState<S> {
    /// Creates a new application state.
    pub fn new(storage: Arc<S>, config: ServerConfig) -> Self {
        Self {
            storage,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the public base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }
}
