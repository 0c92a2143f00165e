use crate::handlers::{
    health::health_check,
    pages::{clear_cache, get_pages, render_page},
    regions::get_regions,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{delete, get},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.asset_dir);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Dataset
        .route("/api/v1/regions", get(get_regions))
        // Pages
        .route("/api/v1/pages", get(get_pages))
        .route("/api/v1/pages/:page", get(render_page))
        .route("/api/v1/cache", delete(clear_cache))
        // Static assets referenced by text pages
        .nest_service("/assets", assets)
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
