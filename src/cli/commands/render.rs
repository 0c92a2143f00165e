use anyhow::Result;
use std::path::Path;
use tracing::{debug, error, info};

use crate::config::load_table;

/// Render a single page from the dataset and print the artifact as JSON.
pub fn render_page(
    data_path: &Path,
    page: &str,
    region: Option<&str>,
    region_b: Option<&str>,
    pretty: bool,
) -> Result<()> {
    let table = load_table(data_path)?;

    let page = compute::parse_page(page)?;
    let request = compute::resolve_request(&table, page, region, region_b)?;
    debug!(?request, "Rendering from the command line");

    let artifact = match compute::render(&table, &request) {
        Ok(artifact) => artifact,
        Err(e) => {
            error!("Failed to render {}: {}", page, e);
            return Err(e.into());
        }
    };
    info!("Rendered '{}'", artifact.title());

    let json = if pretty {
        serde_json::to_string_pretty(&artifact)?
    } else {
        serde_json::to_string(&artifact)?
    };
    println!("{}", json);
    Ok(())
}
