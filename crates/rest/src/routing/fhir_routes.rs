//! FHIR route configuration.
//!
//! Defines all routes for the FHIR RESTful API.

use axum::{
    Router,
    routing::{get, post},
};
use onecare_persistence::core::{CompartmentProvider, SearchProvider};

use crate::handlers;
use crate::state::AppState;

/// Creates all FHIR REST API routes.
///
/// # Routes
///
/// ## System-level
/// - `GET /health` - Health check
///
/// ## Type-level
/// - `GET /{type}` - Search
/// - `POST /{type}` - Create
/// - `POST /{type}/_search` - Search (POST)
///
/// ## Instance-level
/// - `GET /{type}/{id}` - Read
/// - `PUT /{type}/{id}` - Update
/// - `DELETE /{type}/{id}` - Delete (not supported)
/// - `GET /Patient/{id}/$everything` - Patient compartment
///
/// Paths outside these answer with a 404 OperationOutcome.
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: SearchProvider + CompartmentProvider + Send + Sync + 'static,
{
    Router::new()
        // System-level routes
        .route("/health", get(handlers::health_handler::<S>))
        // Type-level routes
        .route(
            "/{resource_type}",
            get(handlers::search_get_handler::<S>).post(handlers::create_handler::<S>),
        )
        .route(
            "/{resource_type}/_search",
            post(handlers::search_post_handler::<S>),
        )
        // Instance-level routes
        .route(
            "/{resource_type}/{id}",
            get(handlers::read_handler::<S>)
                .put(handlers::update_handler::<S>)
                .delete(handlers::delete_handler::<S>),
        )
        .route(
            "/Patient/{id}/$everything",
            get(handlers::everything_handler::<S>),
        )
        .fallback(handlers::fallback_handler)
        .with_state(state)
}
