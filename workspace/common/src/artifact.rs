use chrono::NaiveDate;
use geojson::FeatureCollection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Output of a single page render, ready for a UI layer to display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Artifact {
    Chart(ChartArtifact),
    Comparison(ComparisonArtifact),
    Map(MapArtifact),
    TimeLapse(TimeLapseArtifact),
    Text(TextArtifact),
}

impl Artifact {
    pub fn title(&self) -> &str {
        match self {
            Artifact::Chart(chart) => &chart.title,
            Artifact::Comparison(comparison) => &comparison.title,
            Artifact::Map(map) => &map.title,
            Artifact::TimeLapse(time_lapse) => &time_lapse.title,
            Artifact::Text(text) => &text.title,
        }
    }
}

/// A line chart. `figure` is a plotly figure (`data` + `layout`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartArtifact {
    /// Page heading shown above the chart section
    #[serde(default)]
    pub heading: Option<String>,
    pub title: String,
    #[schema(value_type = Object)]
    pub figure: serde_json::Value,
}

/// Latest metrics for two regions plus their overlaid trends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ComparisonArtifact {
    pub title: String,
    pub first: RegionMetrics,
    pub second: RegionMetrics,
    #[schema(value_type = Object)]
    pub figure: serde_json::Value,
}

/// Metric cards built from the last row of a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RegionMetrics {
    pub region: String,
    /// Date of the row the metrics were taken from
    pub date: NaiveDate,
    pub cards: Vec<MetricCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MetricCard {
    pub label: String,
    pub value: i64,
    /// `value` with thousands separators
    pub display: String,
}

impl MetricCard {
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            value,
            display: format_count(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MapCenter {
    pub latitude: f64,
    pub longitude: f64,
}

/// Circle markers for the most recent report date.
///
/// Every feature is a `Point` whose properties carry `region`, `radius`,
/// `color`, `fill`, `fill_color` and `popup`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MapArtifact {
    pub title: String,
    /// Intro line shown under the title
    #[serde(default)]
    pub description: Option<String>,
    pub center: MapCenter,
    pub zoom: u8,
    #[schema(value_type = Object)]
    pub markers: FeatureCollection,
    /// Regions left off the map because they have no coordinate
    pub skipped_regions: Vec<String>,
}

/// Animated geographic scatter, one frame per distinct report date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TimeLapseArtifact {
    #[serde(default)]
    pub heading: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub projection: String,
    pub frames: Vec<TimeLapseFrame>,
    /// Regions left off every frame because they have no coordinate
    pub skipped_regions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TimeLapseFrame {
    /// Frame label shown on the animation slider
    pub label: String,
    pub date: NaiveDate,
    /// Points with `region` (hover label) and `size` properties
    #[schema(value_type = Object)]
    pub markers: FeatureCollection,
}

/// Static informational page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TextArtifact {
    pub title: String,
    pub image: Option<ImageRef>,
    pub sections: Vec<TextSection>,
    pub closing: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImageRef {
    /// Path relative to the asset directory
    pub path: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TextSection {
    pub heading: String,
    /// Markdown body
    pub body: String,
}

/// Formats a count with comma thousands separators, e.g. `1,234,567`.
pub fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
