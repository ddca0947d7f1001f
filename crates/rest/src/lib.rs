//! # onecare-rest - FHIR RESTful API
//!
//! This crate exposes the OneCare resource store over the
//! [FHIR RESTful API](https://hl7.org/fhir/http.html): create, read, update,
//! type-level search and the patient `$everything` operation, with JSON
//! request and response bodies.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use onecare_persistence::backends::memory::MemoryBackend;
//! use onecare_rest::{ServerConfig, create_app_with_config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::default();
//!     let app = create_app_with_config(MemoryBackend::new(), config.clone());
//!
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! All paths are relative to the configured base path (`/fhir` by default).
//!
//! | Interaction | HTTP Method | URL Pattern |
//! |------------|-------------|-------------|
//! | create | POST | `/[type]` |
//! | read | GET | `/[type]/[id]` |
//! | update | PUT | `/[type]/[id]` |
//! | delete | DELETE | `/[type]/[id]` (always 501) |
//! | search | GET/POST | `/[type]?params` or `/[type]/_search` |
//! | everything | GET | `/Patient/[id]/$everything` |
//! | health | GET | `/health` |
//!
//! ## Error Handling
//!
//! All errors are returned as FHIR [OperationOutcome](https://hl7.org/fhir/operationoutcome.html)
//! resources:
//!
//! | HTTP Status | FHIR Issue Code | Description |
//! |-------------|-----------------|-------------|
//! | 400 | invalid | Malformed body, or body of the wrong type |
//! | 400 | not-supported | Unknown resource type |
//! | 404 | not-found | Resource or route not found |
//! | 409 | conflict | Create with an id already in use |
//! | 413 | too-long | Body larger than the configured limit |
//! | 415 | not-supported | Body is not JSON |
//! | 501 | not-supported | Delete |
//! | 500 | exception | Internal server error |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and OperationOutcome generation
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, configuration)
//! - [`handlers`] - HTTP request handlers for each interaction
//! - [`extractors`] - Axum extractors for FHIR-specific data
//! - [`responses`] - Response formatting and header generation
//! - [`routing`] - Route configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod responses;
pub mod routing;
pub mod state;

// Re-exports for convenience
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit};
use onecare_persistence::core::{CompartmentProvider, SearchProvider};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

/// Creates the Axum application with the default configuration.
pub fn create_app<S>(storage: S) -> Router
where
    S: SearchProvider + CompartmentProvider + Send + Sync + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application.
///
/// The FHIR routes are mounted under `config.base_path`; an empty base path
/// mounts them at the root.
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: SearchProvider + CompartmentProvider + Send + Sync + 'static,
{
    info!(
        backend = storage.backend_name(),
        base_path = config.base_path(),
        "Creating REST API server"
    );

    let state = AppState::new(Arc::new(storage), config.clone());
    let fhir = routing::fhir_routes::create_routes(state);

    // axum refuses to nest at "/"
    let router = match config.base_path() {
        "" => fhir,
        base_path => Router::new()
            .nest(base_path, fhir)
            .fallback(handlers::fallback_handler),
    };

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    router
        .layer(DefaultBodyLimit::max(config.max_body_size))
        .layer(service_builder)
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` takes precedence over `level` when set.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "onecare_rest={level},onecare_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
