//! Core storage traits.
//!
//! - [`ResourceStorage`] - Create, read, update (delete is not supported)
//! - [`SearchProvider`] - Parameter search with pagination
//! - [`CompartmentProvider`] - Patient `$everything`
//!
//! ```text
//! ResourceStorage
//!     ├── SearchProvider
//!     └── CompartmentProvider
//! ```

mod compartment;
mod search;
mod storage;

pub use compartment::CompartmentProvider;
pub use search::{SearchProvider, SearchResult};
pub use storage::ResourceStorage;
