//! Core types for the persistence layer.
//!
//! - [`ResourceType`] - The closed set of tracked resource types
//! - [`StoredResource`] - A resource with its versioning envelope
//! - [`SearchParams`], [`Pagination`], [`Page`] - Search request and result paging
//! - [`Bundle`] - The list-result envelope
//!
//! # Examples
//!
//! ```
//! use onecare_persistence::types::{Pagination, SearchParams};
//!
//! let params = SearchParams::new()
//!     .with_param("gender", "female")
//!     .with_pagination(Pagination::new(10, 0));
//!
//! assert_eq!(params.get("gender"), Some("female"));
//! ```

mod bundle;
mod pagination;
mod resource_type;
mod search_params;
pub(crate) mod stored_resource;

pub use bundle::{Bundle, BundleEntry, BundleEntrySearch, BundleLink, BundleType, SearchEntryMode};
pub use pagination::{COUNT_PARAM, DEFAULT_COUNT, OFFSET_PARAM, Page, Pagination};
pub use resource_type::ResourceType;
pub use search_params::SearchParams;
pub use stored_resource::StoredResource;
