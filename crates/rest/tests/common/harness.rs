//! REST API test harness.

use std::sync::Arc;

use axum_test::TestServer;
use onecare_persistence::backends::memory::MemoryBackend;
use onecare_persistence::core::ResourceStorage;
use onecare_persistence::types::ResourceType;
use onecare_rest::{AppState, ServerConfig, create_app_with_config};
use serde_json::Value;

/// Creates a test server with the FHIR routes mounted at the root.
///
/// The backend is shared so tests can seed and inspect it directly.
pub fn create_test_server() -> (TestServer, Arc<MemoryBackend>) {
    let backend = Arc::new(MemoryBackend::new());
    let state = AppState::new(Arc::clone(&backend), ServerConfig::for_testing());
    let app = onecare_rest::routing::create_routes(state);
    let server = TestServer::new(app).expect("Failed to create test server");

    (server, backend)
}

/// Creates a test server for the full application (base path, middleware).
pub fn create_app_server(config: ServerConfig) -> TestServer {
    let app = create_app_with_config(MemoryBackend::new(), config);
    TestServer::new(app).expect("Failed to create test server")
}

/// Seeds a resource directly into the backend.
pub async fn seed(backend: &MemoryBackend, resource_type: ResourceType, resource: Value) {
    backend
        .create(resource_type, resource)
        .await
        .expect("Failed to seed resource");
}
