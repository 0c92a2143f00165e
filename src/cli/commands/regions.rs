use anyhow::Result;
use std::path::Path;
use tracing::debug;

use crate::config::load_table;

/// Print every region in first-appearance order, one per line.
pub fn list_regions(data_path: &Path) -> Result<()> {
    let table = load_table(data_path)?;
    let regions = table.regions()?;
    debug!("Listing {} regions", regions.len());

    for region in regions {
        println!("{}", region);
    }
    Ok(())
}
