//! Patient compartment handler.
//!
//! Implements `GET [base]/Patient/[id]/$everything`.

use axum::{
    extract::{Path, State},
    response::Response,
};
use onecare_persistence::core::CompartmentProvider;
use tracing::debug;

use crate::error::RestResult;
use crate::responses::bundle_response;
use crate::state::AppState;

/// Handler for Patient `$everything`.
///
/// # Response
///
/// - `200 OK` - Searchset Bundle: the patient, then every resource whose
///   subject is the patient
/// - `404 Not Found` - No such patient
pub async fn everything_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    S: CompartmentProvider + Send + Sync,
{
    debug!(id = %id, "Processing Patient $everything request");

    let bundle = state
        .storage()
        .everything(&id)
        .await?
        .with_link(
            "self",
            format!("{}/Patient/{}/$everything", state.base_url(), id),
        )
        .with_base_url(state.base_url());

    Ok(bundle_response(&bundle))
}
