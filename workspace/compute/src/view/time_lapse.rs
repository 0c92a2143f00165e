use chrono::NaiveDate;
use common::{Artifact, TimeLapseArtifact, TimeLapseFrame};
use geojson::{Feature, JsonObject};
use serde_json::json;
use std::collections::BTreeSet;
use tracing::{debug, instrument, warn};

use super::geo::{collection, point_feature};
use crate::error::Result;
use crate::table::CaseTable;

pub const PROJECTION: &str = "natural earth";

/// Animated scatter of confirmed cases, one frame per distinct date in
/// ascending order. Marker size is the raw confirmed count.
#[instrument(skip(table))]
pub fn render_time_lapse(table: &CaseTable) -> Result<Artifact> {
    let rows = table.sorted_by_date()?.records()?;

    let mut frames: Vec<TimeLapseFrame> = Vec::new();
    let mut current: Option<(NaiveDate, Vec<Feature>)> = None;
    let mut skipped = BTreeSet::new();

    for record in rows {
        match current {
            Some((date, _)) if date == record.date => {}
            _ => {
                if let Some((date, features)) = current.take() {
                    frames.push(frame(date, features));
                }
                current = Some((record.date, Vec::new()));
            }
        }

        let Some(coordinate) = record.coordinate() else {
            skipped.insert(record.region);
            continue;
        };

        let mut properties = JsonObject::new();
        properties.insert("region".to_string(), json!(record.region));
        properties.insert("size".to_string(), json!(record.confirmed));
        if let Some((_, features)) = current.as_mut() {
            features.push(point_feature(coordinate, properties));
        }
    }
    if let Some((date, features)) = current {
        frames.push(frame(date, features));
    }
    debug!("Built {} time-lapse frames", frames.len());

    if !skipped.is_empty() {
        warn!("Skipped {} region(s) without coordinates: {:?}", skipped.len(), skipped);
    }

    Ok(Artifact::TimeLapse(TimeLapseArtifact {
        heading: Some("COVID-19 Spread Over Time in India".to_string()),
        title: "Time-Lapse of COVID-19 Spread in India".to_string(),
        description: Some(
            "This animation shows the growth of COVID-19 cases across states over time."
                .to_string(),
        ),
        projection: PROJECTION.to_string(),
        frames,
        skipped_regions: skipped.into_iter().collect(),
    }))
}

fn frame(date: NaiveDate, features: Vec<Feature>) -> TimeLapseFrame {
    TimeLapseFrame {
        label: date.to_string(),
        date,
        markers: collection(features),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::fixtures::{day, table};

    #[test]
    fn test_one_frame_per_distinct_date_in_order() {
        let rows = table(&[
            ("Kerala", 2, 30, 0, 0),
            ("Goa", 0, 1, 0, 0),
            ("Kerala", 0, 10, 0, 0),
            ("Goa", 2, 3, 0, 0),
            ("Kerala", 1, 20, 0, 0),
        ]);

        let Artifact::TimeLapse(lapse) = render_time_lapse(&rows).unwrap() else {
            panic!("Expected a time-lapse artifact");
        };

        assert_eq!(lapse.projection, "natural earth");
        assert_eq!(lapse.heading.as_deref(), Some("COVID-19 Spread Over Time in India"));
        assert!(lapse.description.as_deref().unwrap().starts_with("This animation shows"));
        let dates: Vec<NaiveDate> = lapse.frames.iter().map(|f| f.date).collect();
        assert_eq!(dates, vec![day(0), day(1), day(2)]);
        assert_eq!(lapse.frames[0].label, "2021-04-01");

        let first = &lapse.frames[0].markers.features;
        assert_eq!(first.len(), 2);
        let properties = first[0].properties.as_ref().unwrap();
        assert_eq!(properties["region"], "Goa");
        assert_eq!(properties["size"], 1);
        assert_eq!(lapse.frames[2].markers.features.len(), 2);
    }

    #[test]
    fn test_unmapped_regions_keep_their_frame() {
        let rows = table(&[("Unassigned", 0, 5, 0, 0), ("Goa", 1, 1, 0, 0)]);

        let Artifact::TimeLapse(lapse) = render_time_lapse(&rows).unwrap() else {
            panic!("Expected a time-lapse artifact");
        };

        assert_eq!(lapse.frames.len(), 2);
        assert!(lapse.frames[0].markers.features.is_empty());
        assert_eq!(lapse.skipped_regions, vec!["Unassigned"]);
    }
}
