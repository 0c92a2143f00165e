use common::{Artifact, MapArtifact, MapCenter};
use geojson::JsonObject;
use serde_json::json;
use std::collections::BTreeSet;
use tracing::{debug, instrument, warn};

use super::geo::{collection, point_feature};
use crate::error::Result;
use crate::table::CaseTable;

/// Initial map view: the centre of India.
pub const MAP_CENTER: MapCenter = MapCenter {
    latitude: 20.5937,
    longitude: 78.9629,
};
pub const MAP_ZOOM: u8 = 5;

pub const MIN_MARKER_RADIUS: f64 = 5.0;
/// Confirmed cases per unit of marker radius above the floor.
pub const CASES_PER_RADIUS_UNIT: f64 = 50_000.0;

const MARKER_COLOR: &str = "red";

/// Circle radius for a region: linear in confirmed cases, never below
/// [`MIN_MARKER_RADIUS`].
pub fn marker_radius(confirmed: i64) -> f64 {
    (confirmed as f64 / CASES_PER_RADIUS_UNIT).max(MIN_MARKER_RADIUS)
}

/// One circle marker per region reported on the most recent date.
///
/// Regions without a coordinate are left off the map and listed in
/// `skipped_regions`.
#[instrument(skip(table))]
pub fn render_map(table: &CaseTable) -> Result<Artifact> {
    let snapshot = table.latest_snapshot()?.records()?;
    debug!("Latest snapshot has {} rows", snapshot.len());

    let mut features = Vec::with_capacity(snapshot.len());
    let mut skipped = BTreeSet::new();

    for record in &snapshot {
        let Some(coordinate) = record.coordinate() else {
            skipped.insert(record.region.clone());
            continue;
        };

        let mut properties = JsonObject::new();
        properties.insert("region".to_string(), json!(record.region));
        properties.insert("date".to_string(), json!(record.date.to_string()));
        properties.insert("confirmed".to_string(), json!(record.confirmed));
        properties.insert("deaths".to_string(), json!(record.deaths));
        properties.insert("radius".to_string(), json!(marker_radius(record.confirmed)));
        properties.insert("color".to_string(), json!(MARKER_COLOR));
        properties.insert("fill".to_string(), json!(true));
        properties.insert("fill_color".to_string(), json!(MARKER_COLOR));
        properties.insert(
            "popup".to_string(),
            json!(format!(
                "{}: {} cases, {} deaths",
                record.region, record.confirmed, record.deaths
            )),
        );
        features.push(point_feature(coordinate, properties));
    }

    if !skipped.is_empty() {
        warn!("Skipped {} region(s) without coordinates: {:?}", skipped.len(), skipped);
    }

    Ok(Artifact::Map(MapArtifact {
        title: "COVID-19 Map of India".to_string(),
        description: Some(
            "Select a state on the map to see confirmed cases and deaths.".to_string(),
        ),
        center: MAP_CENTER,
        zoom: MAP_ZOOM,
        markers: collection(features),
        skipped_regions: skipped.into_iter().collect(),
    }))
}
