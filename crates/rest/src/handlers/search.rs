//! Search interaction handlers.
//!
//! Implements the FHIR [search interaction](https://hl7.org/fhir/http.html#search):
//! `GET [base]/[type]?params` and `POST [base]/[type]/_search`.

use axum::{
    Form,
    extract::{Path, State},
    response::Response,
};
use onecare_persistence::core::SearchProvider;
use onecare_persistence::types::ResourceType;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::SearchQuery;
use crate::responses::{bundle_response, search_links};
use crate::state::AppState;

/// Handler for GET search.
///
/// Returns a Bundle of type "searchset". Parameters the type does not
/// support are ignored.
pub async fn search_get_handler<S>(
    State(state): State<AppState<S>>,
    Path(resource_type): Path<String>,
    query: SearchQuery,
) -> RestResult<Response>
where
    S: SearchProvider + Send + Sync,
{
    execute_search(&state, &resource_type, query).await
}

/// Handler for POST search.
///
/// Searches using form-encoded parameters, for queries too long for a URL.
pub async fn search_post_handler<S>(
    State(state): State<AppState<S>>,
    Path(resource_type): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> RestResult<Response>
where
    S: SearchProvider + Send + Sync,
{
    execute_search(&state, &resource_type, SearchQuery::from_pairs(pairs)).await
}

/// Executes a search and returns a Bundle response.
async fn execute_search<S>(
    state: &AppState<S>,
    resource_type: &str,
    query: SearchQuery,
) -> RestResult<Response>
where
    S: SearchProvider + Send + Sync,
{
    let resource_type: ResourceType = resource_type.parse()?;
    let params = query.params();

    debug!(
        resource_type = %resource_type,
        params = ?query.pairs(),
        "Processing search request"
    );

    let result = state.storage().search(resource_type, &params).await?;
    if !result.ignored_params.is_empty() {
        debug!(
            resource_type = %resource_type,
            ignored = ?result.ignored_params,
            "Search parameters not supported for this type were ignored"
        );
    }

    let links = search_links(
        state.base_url(),
        resource_type.as_str(),
        query.pairs(),
        params.pagination(),
        result.total(),
    );
    let bundle = links
        .into_iter()
        .fold(result.to_bundle(), |bundle, (relation, url)| {
            bundle.with_link(relation, url)
        })
        .with_base_url(state.base_url());

    Ok(bundle_response(&bundle))
}
