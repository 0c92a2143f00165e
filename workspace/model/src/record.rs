use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::coordinates::RegionCoordinate;

/// Canonical and source column names of the case table.
pub mod columns {
    /// Region (state or union territory) name.
    pub const STATE: &str = "State";
    /// Report date.
    pub const DATE: &str = "Date";
    /// Cumulative confirmed cases.
    pub const CONFIRMED: &str = "Confirmed";
    /// Cumulative recovered cases.
    pub const RECOVERED: &str = "Recovered";
    /// Cumulative deaths.
    pub const DEATH: &str = "Death";
    /// Latitude attached by the geocode enricher.
    pub const LATITUDE: &str = "Latitude";
    /// Longitude attached by the geocode enricher.
    pub const LONGITUDE: &str = "Longitude";

    /// Source column name paired with the canonical name it is renamed to.
    pub const SOURCE_RENAMES: [(&str, &str); 5] = [
        ("State/UnionTerritory", STATE),
        ("Cured", RECOVERED),
        ("Deaths", DEATH),
        ("Confirmed", CONFIRMED),
        ("Date", DATE),
    ];
}

/// One row of the case table: cumulative counts for a region on a date.
///
/// `(region, date)` pairs are not guaranteed unique, and the counts are
/// expected (but not checked) to be non-decreasing per region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub region: String,
    pub date: NaiveDate,
    pub confirmed: i64,
    pub recovered: i64,
    pub deaths: i64,
    /// `None` when the region has no entry in the coordinate table.
    pub latitude: Option<f64>,
    /// `None` when the region has no entry in the coordinate table.
    pub longitude: Option<f64>,
}

impl CaseRecord {
    /// Creates a record without coordinates.
    pub fn new(
        region: impl Into<String>,
        date: NaiveDate,
        confirmed: i64,
        recovered: i64,
        deaths: i64,
    ) -> Self {
        Self {
            region: region.into(),
            date,
            confirmed,
            recovered,
            deaths,
            latitude: None,
            longitude: None,
        }
    }

    /// Returns the record with the given coordinate attached, or with both
    /// coordinate fields cleared when `coordinate` is `None`.
    pub fn with_coordinate(mut self, coordinate: Option<RegionCoordinate>) -> Self {
        self.latitude = coordinate.map(|c| c.latitude);
        self.longitude = coordinate.map(|c| c.longitude);
        self
    }

    /// The attached coordinate, if both halves are present.
    pub fn coordinate(&self) -> Option<RegionCoordinate> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(RegionCoordinate { latitude, longitude }),
            _ => None,
        }
    }
}
