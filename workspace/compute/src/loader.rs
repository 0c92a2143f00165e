//! Dataset loading.
//!
//! Reads the delimited case file, renames the source columns to their
//! canonical names, parses report dates day-first and hands the result to
//! the geocode enricher. The outcome is an immutable [`CaseTable`] that is
//! built once and shared by reference.

use chrono::NaiveDate;
use model::columns;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, trace};

use crate::enrich::enrich;
use crate::error::{ComputeError, Result};
use crate::table::CaseTable;

/// Rows scanned by the CSV reader before it settles on column types.
const INFER_SCHEMA_LENGTH: usize = 10_000;

/// Anything that can produce the enriched case table.
pub trait CaseSource {
    fn load(&self) -> Result<CaseTable>;
}

/// Loads the case table from a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvCaseSource {
    path: PathBuf,
}

impl CsvCaseSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CaseSource for CsvCaseSource {
    fn load(&self) -> Result<CaseTable> {
        load_case_table(&self.path)
    }
}

/// Reads, canonicalizes and enriches the dataset at `path`.
#[instrument]
pub fn load_case_table(path: &Path) -> Result<CaseTable> {
    info!("Loading case dataset from {}", path.display());

    if !path.is_file() {
        return Err(ComputeError::DataLoad(format!(
            "Dataset file not found: {}",
            path.display()
        )));
    }

    let raw = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_LENGTH))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|e| {
            ComputeError::DataLoad(format!("Failed to read {}: {}", path.display(), e))
        })?;
    debug!(
        "Read {} rows with columns {:?}",
        raw.height(),
        raw.get_column_names()
    );

    let table = CaseTable::new(enrich(canonicalize(&raw)?)?)?;
    info!(
        "Loaded {} case rows covering {} regions",
        table.height(),
        table.regions()?.len()
    );
    Ok(table)
}

/// Selects the five source columns and returns them under their canonical
/// names with typed values. Other source columns are dropped.
pub fn canonicalize(raw: &DataFrame) -> Result<DataFrame> {
    let missing: Vec<&str> = columns::SOURCE_RENAMES
        .iter()
        .map(|(source, _)| *source)
        .filter(|source| raw.column(source).is_err())
        .collect();
    if !missing.is_empty() {
        return Err(ComputeError::DataLoad(format!(
            "Missing expected column(s): {}",
            missing.join(", ")
        )));
    }

    let mut canonical = Vec::with_capacity(columns::SOURCE_RENAMES.len());
    for (source, target) in columns::SOURCE_RENAMES {
        trace!("Mapping column '{}' to '{}'", source, target);
        let column = raw.column(source)?;
        let series = match target {
            columns::STATE => Series::new(target.into(), region_values(column, source)?),
            columns::DATE => Series::new(target.into(), date_values(column, source)?),
            _ => Series::new(target.into(), count_values(column, source)?),
        };
        canonical.push(series.into());
    }

    Ok(DataFrame::new(canonical)?)
}

fn region_values(column: &Column, source: &str) -> Result<Vec<String>> {
    let column = column.cast(&DataType::String)?;
    column
        .as_materialized_series()
        .str()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| match value.map(str::trim) {
            Some(name) if !name.is_empty() => Ok(name.to_string()),
            _ => Err(ComputeError::DataLoad(format!(
                "Empty '{}' value at row {}",
                source, row
            ))),
        })
        .collect()
}

fn date_values(column: &Column, source: &str) -> Result<Vec<NaiveDate>> {
    let column = column.cast(&DataType::String)?;
    column
        .as_materialized_series()
        .str()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value.and_then(parse_day_first).ok_or_else(|| {
                ComputeError::DataLoad(format!(
                    "Unparseable '{}' value {:?} at row {}",
                    source, value, row
                ))
            })
        })
        .collect()
}

fn count_values(column: &Column, source: &str) -> Result<Vec<i64>> {
    // Casting floats to Int64 truncates instead of failing.
    if column.dtype().is_float() {
        return Err(ComputeError::DataLoad(format!(
            "Column '{}' holds fractional values ({}), expected integer counts",
            source,
            column.dtype()
        )));
    }
    let column = column.strict_cast(&DataType::Int64).map_err(|e| {
        ComputeError::DataLoad(format!("Column '{}' is not an integer count: {}", source, e))
    })?;
    column
        .as_materialized_series()
        .i64()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| match value {
            Some(count) if count >= 0 => Ok(count),
            _ => Err(ComputeError::DataLoad(format!(
                "Invalid '{}' count {:?} at row {}",
                source, value, row
            ))),
        })
        .collect()
}

/// Parses a report date, reading ambiguous numeric dates day-first.
///
/// Accepts ISO `YYYY-MM-DD` plus `DD/MM/YYYY`, `DD-MM-YYYY` and `DD.MM.YYYY`,
/// each also with a two-digit year.
pub fn parse_day_first(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    let separator = value.chars().find(|c| matches!(c, '/' | '-' | '.'))?;
    let year = value.rsplit(separator).next()?;
    let year_format = if year.len() == 2 { "%y" } else { "%Y" };
    let format = format!("%d{separator}%m{separator}{year_format}");
    NaiveDate::parse_from_str(value, &format).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Sno,Date,Time,State/UnionTerritory,ConfirmedIndianNational,ConfirmedForeignNational,Cured,Deaths,Confirmed";

    fn write_csv(rows: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_day_first_formats() {
        let expected = NaiveDate::from_ymd_opt(2020, 1, 30).unwrap();
        assert_eq!(parse_day_first("30/01/20"), Some(expected));
        assert_eq!(parse_day_first("30/01/2020"), Some(expected));
        assert_eq!(parse_day_first("30-01-2020"), Some(expected));
        assert_eq!(parse_day_first("30.01.2020"), Some(expected));
        assert_eq!(parse_day_first("2020-01-30"), Some(expected));
        assert_eq!(parse_day_first(" 30/01/2020 "), Some(expected));
    }

    #[test]
    fn test_parse_day_first_prefers_day_before_month() {
        let date = parse_day_first("03/04/2020").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 4, 3).unwrap());
    }

    #[test]
    fn test_parse_day_first_rejects_garbage() {
        assert_eq!(parse_day_first("yesterday"), None);
        assert_eq!(parse_day_first("31/02/2020"), None);
        assert_eq!(parse_day_first(""), None);
    }

    #[test]
    fn test_load_renames_and_enriches() {
        let file = write_csv(&[
            "1,30/01/20,6:00 PM,Kerala,1,0,0,0,1",
            "2,31/01/20,6:00 PM,Kerala,1,0,0,0,1",
            "3,31/01/20,6:00 PM,Unassigned,0,0,0,0,3",
            "4,01/02/20,6:00 PM,Kerala,2,0,1,0,2",
        ]);

        let table = CsvCaseSource::new(file.path()).load().unwrap();
        assert_eq!(table.height(), 4);

        let names: Vec<String> = table
            .frame()
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(
            names,
            vec!["State", "Recovered", "Death", "Confirmed", "Date", "Latitude", "Longitude"]
        );

        let records = table.records().unwrap();
        assert_eq!(records[0].region, "Kerala");
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2020, 1, 30).unwrap());
        assert_eq!(records[3].recovered, 1);
        assert_eq!(records[3].confirmed, 2);
        assert_eq!(records[0].latitude, Some(10.8505));
        assert_eq!(records[2].latitude, None);
        assert_eq!(records[2].longitude, None);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_case_table(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, ComputeError::DataLoad(_)));
        assert_eq!(err.code(), "DATA_LOAD_ERROR");
    }

    #[test]
    fn test_load_missing_columns() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Date,State,Confirmed").unwrap();
        writeln!(file, "30/01/20,Kerala,1").unwrap();
        file.flush().unwrap();

        let err = load_case_table(file.path()).unwrap_err();
        match err {
            ComputeError::DataLoad(message) => {
                assert!(message.contains("State/UnionTerritory"));
                assert!(message.contains("Cured"));
                assert!(message.contains("Deaths"));
            }
            other => panic!("Expected DataLoad error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_bad_date() {
        let file = write_csv(&["1,not-a-date,6:00 PM,Kerala,1,0,0,0,1"]);
        let err = load_case_table(file.path()).unwrap_err();
        assert!(matches!(err, ComputeError::DataLoad(_)));
    }

    #[test]
    fn test_load_rejects_fractional_count() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Date,State/UnionTerritory,Cured,Deaths,Confirmed").unwrap();
        writeln!(file, "30/01/20,Kerala,0,0,12.7").unwrap();
        file.flush().unwrap();

        match load_case_table(file.path()).unwrap_err() {
            ComputeError::DataLoad(message) => assert!(message.contains("Confirmed")),
            other => panic!("Expected DataLoad error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_negative_count() {
        let file = write_csv(&["1,30/01/20,6:00 PM,Kerala,1,0,0,0,-4"]);
        let err = load_case_table(file.path()).unwrap_err();
        assert!(matches!(err, ComputeError::DataLoad(_)));
    }
}
