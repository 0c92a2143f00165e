//! Common transport-layer types shared between the renderers and any UI
//! binding (HTTP API, CLI, a future desktop shell).
//! Pages describe what can be asked for, artifacts describe what comes back.

mod artifact;
mod page;

pub use artifact::{
    Artifact, ChartArtifact, ComparisonArtifact, ImageRef, MapArtifact, MapCenter, MetricCard,
    RegionMetrics, TextArtifact, TextSection, TimeLapseArtifact, TimeLapseFrame, format_count,
};
pub use page::{Page, PageInfo, PageRequest};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

impl<T> ApiResponse<T> {
    /// Wraps `data` in a successful response.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
            success: true,
        }
    }
}
