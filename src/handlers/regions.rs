use crate::handlers::compute_error_response;
use crate::schemas::{ApiResponse, AppState, ErrorResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use tracing::{debug, instrument, trace};

/// List regions in the order they first appear in the dataset
#[utoipa::path(
    get,
    path = "/api/v1/regions",
    tag = "regions",
    responses(
        (status = 200, description = "Regions retrieved successfully", body = ApiResponse<Vec<String>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_regions(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<String>>>), (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_regions function");

    let regions = state.table.regions().map_err(compute_error_response)?;
    debug!("Found {} regions", regions.len());

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(regions, "Regions retrieved successfully")),
    ))
}
