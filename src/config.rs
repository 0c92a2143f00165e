use anyhow::Result;
use common::{Artifact, PageRequest};
use compute::{CaseSource, CaseTable, CsvCaseSource};
use moka::future::Cache;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use crate::schemas::AppState;

pub const DEFAULT_DATA_PATH: &str = "covid_19_india.csv";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
pub const DEFAULT_ASSET_DIR: &str = "assets";
pub const DEFAULT_LOG_FILTER: &str = "covidash=debug,compute=debug,tower_http=debug";

/// Load `.env` into the process environment, if present
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Bounded, time-limited cache of rendered pages
pub fn build_cache() -> Cache<PageRequest, Artifact> {
    Cache::builder()
        .max_capacity(1000)
        .time_to_live(Duration::from_secs(300)) // 5 minutes
        .build()
}

/// Load the case table once from `data_path`
pub fn load_table(data_path: &Path) -> Result<CaseTable> {
    info!("Loading dataset: {}", data_path.display());
    Ok(CsvCaseSource::new(data_path).load()?)
}

/// Wrap an already loaded table into the shared application state
pub fn app_state(table: CaseTable, asset_dir: PathBuf) -> AppState {
    AppState {
        table: Arc::new(table),
        cache: build_cache(),
        asset_dir,
    }
}

/// Initialize application state from the dataset on disk
pub fn initialize_app_state(data_path: &Path, asset_dir: &Path) -> Result<AppState> {
    let table = load_table(data_path)?;
    Ok(app_state(table, asset_dir.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cache_keeps_regions_containing_colons_apart() {
        let cache = build_cache();
        let first = PageRequest::Comparison {
            first: "A".to_string(),
            second: "B:C".to_string(),
        };
        let second = PageRequest::Comparison {
            first: "A:B".to_string(),
            second: "C".to_string(),
        };

        cache.insert(first.clone(), compute::view::render_overview()).await;

        assert!(cache.get(&first).await.is_some());
        assert!(cache.get(&second).await.is_none());
    }
}
