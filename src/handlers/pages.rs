use crate::handlers::compute_error_response;
use crate::schemas::{ApiResponse, AppState, CacheClearResponse, ErrorResponse, PageQuery};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use common::{Artifact, Page, PageInfo};
use compute::{parse_page, render, resolve_request};
use tracing::{debug, info, instrument, trace};

/// List the navigation menu
#[utoipa::path(
    get,
    path = "/api/v1/pages",
    tag = "pages",
    responses(
        (status = 200, description = "Pages retrieved successfully", body = ApiResponse<Vec<PageInfo>>)
    )
)]
#[instrument]
pub async fn get_pages() -> (StatusCode, Json<ApiResponse<Vec<PageInfo>>>) {
    (
        StatusCode::OK,
        Json(ApiResponse::ok(Page::menu(), "Pages retrieved successfully")),
    )
}

/// Render one page
///
/// `page` is a page slug or title. Region parameters default to the first
/// (and, for `region_b`, second) region in dataset order.
#[utoipa::path(
    get,
    path = "/api/v1/pages/{page}",
    tag = "pages",
    params(
        ("page" = String, Path, description = "Page slug or title, e.g. `sma-forecast`"),
        PageQuery,
    ),
    responses(
        (status = 200, description = "Page rendered successfully", body = ApiResponse<Artifact>),
        (status = 400, description = "Invalid or missing parameter", body = ErrorResponse),
        (status = 404, description = "Unknown page or region without rows", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn render_page(
    Path(page): Path<String>,
    Valid(Query(query)): Valid<Query<PageQuery>>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<Artifact>>), (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering render_page function");

    let page = parse_page(&page).map_err(compute_error_response)?;
    let request = resolve_request(
        &state.table,
        page,
        query.region.as_deref(),
        query.region_b.as_deref(),
    )
    .map_err(compute_error_response)?;

    if let Some(artifact) = state.cache.get(&request).await {
        debug!(?request, "Serving page from cache");
        return Ok((
            StatusCode::OK,
            Json(ApiResponse::ok(artifact, "Page retrieved from cache")),
        ));
    }

    let artifact = render(&state.table, &request).map_err(compute_error_response)?;
    info!("Rendered '{}'", artifact.title());
    state.cache.insert(request, artifact.clone()).await;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(artifact, "Page rendered successfully")),
    ))
}

/// Drop every memoised page
#[utoipa::path(
    delete,
    path = "/api/v1/cache",
    tag = "pages",
    responses(
        (status = 200, description = "Cache cleared", body = ApiResponse<CacheClearResponse>)
    )
)]
#[instrument(skip(state))]
pub async fn clear_cache(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<CacheClearResponse>>) {
    state.cache.run_pending_tasks().await;
    let evicted = state.cache.entry_count();
    state.cache.invalidate_all();
    state.cache.run_pending_tasks().await;
    info!("Cleared {} cached pages", evicted);

    (
        StatusCode::OK,
        Json(ApiResponse::ok(
            CacheClearResponse { evicted },
            "Cache cleared successfully",
        )),
    )
}
