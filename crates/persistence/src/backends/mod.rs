//! Storage backend implementations.
//!
//! | Backend | Description |
//! |---------|-------------|
//! | [`memory`] | Process-local store, one locked collection per resource type |
//!
//! # Example
//!
//! ```
//! use onecare_persistence::backends::memory::MemoryBackend;
//! use onecare_persistence::core::ResourceStorage;
//!
//! let backend = MemoryBackend::new();
//! assert_eq!(backend.backend_name(), "memory");
//! ```

pub mod memory;
