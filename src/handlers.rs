pub mod health;
pub mod pages;
pub mod regions;

use crate::schemas::ErrorResponse;
use axum::{http::StatusCode, response::Json};
use compute::ComputeError;
use tracing::{error, warn};

/// Maps a compute failure onto the HTTP status and error payload returned
/// to clients.
pub fn compute_error_response(err: ComputeError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        ComputeError::UnknownPage(_) | ComputeError::EmptySelection { .. } => StatusCode::NOT_FOUND,
        ComputeError::MissingParameter(_) => StatusCode::BAD_REQUEST,
        ComputeError::DataLoad(_)
        | ComputeError::DataFrame(_)
        | ComputeError::Series(_)
        | ComputeError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!("Request failed: {}", err);
    } else {
        warn!("Request rejected: {}", err);
    }

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            code: err.code().to_string(),
            success: false,
        }),
    )
}
