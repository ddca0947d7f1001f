//! Health check endpoint handler.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use onecare_persistence::core::ResourceStorage;
use onecare_persistence::types::ResourceType;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Reports the backend and the number of stored resources per type.
///
/// # HTTP Request
///
/// `GET [base]/health`
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: ResourceStorage + Send + Sync,
{
    debug!("Processing health check request");

    let mut counts = Map::new();
    for resource_type in ResourceType::ALL {
        let count = state.storage().count(resource_type).await?;
        counts.insert(resource_type.to_string(), Value::from(count));
    }

    let health_response = serde_json::json!({
        "status": "healthy",
        "backend": state.storage().backend_name(),
        "resources": counts,
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((StatusCode::OK, Json(health_response)).into_response())
}
