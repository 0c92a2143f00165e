//! Domain types for the India COVID-19 case dataset.
//!
//! A [`CaseRecord`] is one row of the dataset after loading and geocoding.
//! The static [`RegionCoordinate`] table maps every known state or union
//! territory to the point used to place it on a map.

pub mod coordinates;
pub mod record;

pub use coordinates::{RegionCoordinate, lookup, REGION_COORDINATES};
pub use record::{CaseRecord, columns};
