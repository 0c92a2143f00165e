use chrono::NaiveDate;
use model::{CaseRecord, columns};
use polars::prelude::*;
use std::collections::HashSet;
use tracing::trace;

use crate::error::{ComputeError, Result};

/// Immutable handle over the enriched case table.
///
/// Every query returns a new table; the wrapped frame is never modified.
/// Row order is the order rows appeared in the source file unless a method
/// says otherwise.
#[derive(Debug, Clone)]
pub struct CaseTable {
    df: DataFrame,
}

impl CaseTable {
    /// Wraps an enriched frame, checking that every canonical column exists.
    pub fn new(df: DataFrame) -> Result<Self> {
        for name in [
            columns::STATE,
            columns::DATE,
            columns::CONFIRMED,
            columns::RECOVERED,
            columns::DEATH,
            columns::LATITUDE,
            columns::LONGITUDE,
        ] {
            if df.column(name).is_err() {
                return Err(ComputeError::DataFrame(format!(
                    "Case table is missing column '{}'",
                    name
                )));
            }
        }
        Ok(Self { df })
    }

    /// Builds a table from records, keeping their coordinates as given.
    pub fn from_records(records: &[CaseRecord]) -> Result<Self> {
        let df = DataFrame::new(vec![
            Series::new(
                columns::STATE.into(),
                records.iter().map(|r| r.region.clone()).collect::<Vec<_>>(),
            )
            .into(),
            Series::new(
                columns::DATE.into(),
                records.iter().map(|r| r.date).collect::<Vec<NaiveDate>>(),
            )
            .into(),
            Series::new(
                columns::CONFIRMED.into(),
                records.iter().map(|r| r.confirmed).collect::<Vec<i64>>(),
            )
            .into(),
            Series::new(
                columns::RECOVERED.into(),
                records.iter().map(|r| r.recovered).collect::<Vec<i64>>(),
            )
            .into(),
            Series::new(
                columns::DEATH.into(),
                records.iter().map(|r| r.deaths).collect::<Vec<i64>>(),
            )
            .into(),
            Series::new(
                columns::LATITUDE.into(),
                records.iter().map(|r| r.latitude).collect::<Vec<Option<f64>>>(),
            )
            .into(),
            Series::new(
                columns::LONGITUDE.into(),
                records.iter().map(|r| r.longitude).collect::<Vec<Option<f64>>>(),
            )
            .into(),
        ])?;
        Self::new(df)
    }

    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    pub fn height(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    fn series(&self, name: &str) -> Result<&Series> {
        Ok(self.df.column(name)?.as_materialized_series())
    }

    fn derive(&self, query: impl FnOnce(LazyFrame) -> LazyFrame) -> Result<CaseTable> {
        let df = query(self.df.clone().lazy()).collect()?;
        trace!("Derived table with {} rows", df.height());
        Ok(CaseTable { df })
    }

    /// Rows for one region, in table order.
    pub fn for_region(&self, region: &str) -> Result<CaseTable> {
        self.derive(|lf| lf.filter(col(columns::STATE).eq(lit(region))))
    }

    /// Rows for one region, failing when there are none.
    pub fn require_region(&self, region: &str) -> Result<CaseTable> {
        let rows = self.for_region(region)?;
        if rows.is_empty() {
            return Err(ComputeError::EmptySelection {
                region: region.to_string(),
            });
        }
        Ok(rows)
    }

    /// Rows dated on the most recent date present anywhere in the table.
    pub fn latest_snapshot(&self) -> Result<CaseTable> {
        self.derive(|lf| lf.filter(col(columns::DATE).eq(col(columns::DATE).max())))
    }

    /// Stable sort by date ascending; rows sharing a date keep table order.
    pub fn sorted_by_date(&self) -> Result<CaseTable> {
        self.derive(|lf| {
            lf.sort(
                [columns::DATE],
                SortMultipleOptions::default().with_maintain_order(true),
            )
        })
    }

    /// Distinct region names in order of first appearance.
    pub fn regions(&self) -> Result<Vec<String>> {
        let mut seen = HashSet::new();
        Ok(self
            .series(columns::STATE)?
            .str()?
            .into_iter()
            .flatten()
            .filter(|region| seen.insert(*region))
            .map(str::to_string)
            .collect())
    }

    pub fn max_date(&self) -> Result<Option<NaiveDate>> {
        Ok(self
            .series(columns::DATE)?
            .date()?
            .as_date_iter()
            .flatten()
            .max())
    }

    /// Last row in table order, which is not necessarily the latest date.
    pub fn last_record(&self) -> Result<Option<CaseRecord>> {
        if self.is_empty() {
            return Ok(None);
        }
        let tail = CaseTable {
            df: self.df.tail(Some(1)),
        };
        Ok(tail.records()?.pop())
    }

    /// Converts the table into typed rows.
    pub fn records(&self) -> Result<Vec<CaseRecord>> {
        let regions = self.series(columns::STATE)?.str()?;
        let dates: Vec<Option<NaiveDate>> =
            self.series(columns::DATE)?.date()?.as_date_iter().collect();
        let confirmed = self.series(columns::CONFIRMED)?.i64()?;
        let recovered = self.series(columns::RECOVERED)?.i64()?;
        let deaths = self.series(columns::DEATH)?.i64()?;
        let latitudes = self.series(columns::LATITUDE)?.f64()?;
        let longitudes = self.series(columns::LONGITUDE)?.f64()?;

        (0..self.height())
            .map(|row| {
                let region = regions.get(row).ok_or_else(|| null_cell(columns::STATE, row))?;
                let date = dates[row].ok_or_else(|| null_cell(columns::DATE, row))?;
                Ok(CaseRecord {
                    region: region.to_string(),
                    date,
                    confirmed: confirmed
                        .get(row)
                        .ok_or_else(|| null_cell(columns::CONFIRMED, row))?,
                    recovered: recovered
                        .get(row)
                        .ok_or_else(|| null_cell(columns::RECOVERED, row))?,
                    deaths: deaths.get(row).ok_or_else(|| null_cell(columns::DEATH, row))?,
                    latitude: latitudes.get(row),
                    longitude: longitudes.get(row),
                })
            })
            .collect()
    }
}

fn null_cell(column: &str, row: usize) -> ComputeError {
    ComputeError::Series(format!("Unexpected null in '{}' at row {}", column, row))
}
