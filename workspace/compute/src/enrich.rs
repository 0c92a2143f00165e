use model::{RegionCoordinate, columns, lookup};
use polars::prelude::*;
use std::collections::BTreeSet;
use tracing::{debug, instrument, warn};

use crate::error::Result;

/// Attaches `Latitude` and `Longitude` columns by looking every row's
/// region up in the static coordinate table.
///
/// Regions without an entry get null in both columns. Misses are logged
/// once per distinct region and never fail the load.
#[instrument(skip(df), fields(rows = df.height()))]
pub fn enrich(mut df: DataFrame) -> Result<DataFrame> {
    let (latitudes, longitudes, unmapped) = {
        let regions = df.column(columns::STATE)?.as_materialized_series().str()?;

        let mut latitudes = Vec::with_capacity(regions.len());
        let mut longitudes = Vec::with_capacity(regions.len());
        let mut unmapped = BTreeSet::new();

        for region in regions.into_iter() {
            let coordinate = region.and_then(lookup);
            if coordinate.is_none() {
                if let Some(name) = region {
                    unmapped.insert(name.to_string());
                }
            }
            latitudes.push(coordinate.map(|c: RegionCoordinate| c.latitude));
            longitudes.push(coordinate.map(|c: RegionCoordinate| c.longitude));
        }

        (latitudes, longitudes, unmapped)
    };

    if !unmapped.is_empty() {
        warn!(
            "{} region(s) have no coordinate and will be left off maps: {:?}",
            unmapped.len(),
            unmapped
        );
    }

    df.with_column(Series::new(columns::LATITUDE.into(), latitudes))?;
    df.with_column(Series::new(columns::LONGITUDE.into(), longitudes))?;
    debug!("Attached coordinate columns");

    Ok(df)
}
