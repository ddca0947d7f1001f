//! Fallback handler for paths no route matches.

use axum::http::Uri;

use crate::error::RestError;

/// Answers unknown paths with a 404 OperationOutcome.
pub async fn fallback_handler(uri: Uri) -> RestError {
    RestError::UnknownRoute {
        path: uri.path().to_string(),
    }
}
