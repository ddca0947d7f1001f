//! In-memory backend implementation.
//!
//! Resources live in one [`TypeStore`] per resource type, each an
//! insertion-ordered keyed collection behind a `parking_lot::RwLock`.
//! Individual `put`/`get`/`list` calls are atomic; operations spanning
//! several stores (such as `$everything`) are not atomic across them.
//!
//! # Example
//!
//! ```
//! use onecare_persistence::backends::memory::MemoryBackend;
//! use onecare_persistence::types::ResourceType;
//!
//! let backend = MemoryBackend::new();
//! assert_eq!(backend.count(ResourceType::Patient), 0);
//! assert_eq!(backend.len(), 0);
//! ```

mod backend;
mod compartment;
mod search;
mod storage;
mod type_store;

pub use backend::MemoryBackend;
pub use type_store::TypeStore;
