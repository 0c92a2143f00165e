#[cfg(test)]
pub mod test_utils {
    use crate::config::app_state;
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use chrono::NaiveDate;
    use compute::CaseTable;
    use model::CaseRecord;
    use std::path::{Path, PathBuf};
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Build a small enriched case table.
    ///
    /// Kerala has ten days of steadily rising confirmed cases, Goa has three
    /// and "Unassigned" has one row with no coordinate.
    pub fn setup_test_table() -> CaseTable {
        let start = NaiveDate::from_ymd_opt(2021, 4, 1).unwrap();
        let mut records = Vec::new();
        for day in 0..10i64 {
            let date = start + chrono::Duration::days(day);
            records.push(CaseRecord::new("Kerala", date, day + 1, day, 0));
            if day < 3 {
                records.push(CaseRecord::new("Goa", date, 100 + day, 90, 1));
            }
        }
        records.push(CaseRecord::new("Unassigned", start + chrono::Duration::days(9), 7, 0, 0));

        let records: Vec<CaseRecord> = records
            .into_iter()
            .map(|record| {
                let coordinate = model::lookup(&record.region);
                record.with_coordinate(coordinate)
            })
            .collect();
        CaseTable::from_records(&records).expect("Failed to build test table")
    }

    /// Create AppState for testing, serving assets from `asset_dir`
    pub fn setup_test_app_state_with_assets(asset_dir: &Path) -> AppState {
        app_state(setup_test_table(), asset_dir.to_path_buf())
    }

    /// Create AppState for testing
    pub fn setup_test_app_state() -> AppState {
        app_state(setup_test_table(), PathBuf::from("assets"))
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    ///
    /// # Returns
    ///
    /// A guard that will clean up the subscriber when dropped.
    pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub fn setup_test_app() -> Router {
        let _ = init_test_tracing();
        create_router(setup_test_app_state())
    }
}
