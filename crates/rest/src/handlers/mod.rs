//! HTTP request handlers for FHIR interactions.
//!
//! - [`create`] - Create a new resource
//! - [`read`] - Read a resource by ID
//! - [`update`] - Update an existing resource
//! - [`delete`] - Delete a resource (answers not-supported)
//! - [`search`] - Search for resources
//! - [`compartment`] - Patient `$everything`
//! - [`health`] - Health check endpoint
//! - [`fallback`] - Unknown paths

pub mod compartment;
pub mod create;
pub mod delete;
pub mod fallback;
pub mod health;
pub mod read;
pub mod search;
pub mod update;

pub use compartment::everything_handler;
pub use create::create_handler;
pub use delete::delete_handler;
pub use fallback::fallback_handler;
pub use health::health_handler;
pub use read::read_handler;
pub use search::{search_get_handler, search_post_handler};
pub use update::update_handler;
