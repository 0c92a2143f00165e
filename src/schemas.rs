use common::{
    Artifact, ChartArtifact, ComparisonArtifact, ImageRef, MapArtifact, MapCenter, MetricCard,
    Page, PageInfo, PageRequest, RegionMetrics, TextArtifact, TextSection, TimeLapseArtifact,
    TimeLapseFrame,
};
use compute::CaseTable;
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi, ToSchema};
use validator::Validate;

pub use common::ApiResponse;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Case table loaded once at startup
    pub table: Arc<CaseTable>,
    /// Rendered artifacts keyed by resolved page request
    pub cache: Cache<PageRequest, Artifact>,
    /// Directory served under `/assets`
    pub asset_dir: PathBuf,
}

/// Query parameters for page rendering
#[derive(Debug, Deserialize, Serialize, ToSchema, IntoParams, Validate)]
pub struct PageQuery {
    /// Region for the dashboard and SMA pages, first region for comparison
    #[validate(length(min = 1, max = 100))]
    pub region: Option<String>,
    /// Second region for the comparison page
    #[validate(length(min = 1, max = 100))]
    pub region_b: Option<String>,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Rows in the loaded case table
    pub rows: usize,
}

/// Result of dropping the artifact cache
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CacheClearResponse {
    /// Entries held before the cache was cleared
    pub evicted: u64,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::regions::get_regions,
        crate::handlers::pages::get_pages,
        crate::handlers::pages::render_page,
        crate::handlers::pages::clear_cache,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            CacheClearResponse,
            PageQuery,
            Page,
            PageInfo,
            PageRequest,
            Artifact,
            ChartArtifact,
            ComparisonArtifact,
            RegionMetrics,
            MetricCard,
            MapArtifact,
            MapCenter,
            TimeLapseArtifact,
            TimeLapseFrame,
            TextArtifact,
            TextSection,
            ImageRef,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "regions", description = "Regions present in the case table"),
        (name = "pages", description = "Dashboard page rendering"),
    ),
    info(
        title = "Covidash API",
        description = "COVID-19 India dashboard API - state-wise trends, comparisons, maps and moving-average forecasts",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
