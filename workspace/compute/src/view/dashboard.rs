use common::{Artifact, ChartArtifact};
use model::columns;
use plotly::Plot;
use tracing::{debug, instrument};

use super::chart::{cases_layout, date_labels, figure, line_trace};
use crate::error::Result;
use crate::table::CaseTable;

/// Confirmed, recovered and death trends for one region, in table order.
#[instrument(skip(table))]
pub fn render_dashboard(table: &CaseTable, region: &str) -> Result<Artifact> {
    let rows = table.require_region(region)?.records()?;
    debug!("Charting {} rows for {}", rows.len(), region);

    let dates = date_labels(&rows);
    let mut plot = Plot::new();
    plot.add_trace(line_trace(
        dates.clone(),
        rows.iter().map(|r| r.confirmed).collect(),
        columns::CONFIRMED,
    ));
    plot.add_trace(line_trace(
        dates.clone(),
        rows.iter().map(|r| r.recovered).collect(),
        columns::RECOVERED,
    ));
    plot.add_trace(line_trace(
        dates,
        rows.iter().map(|r| r.deaths).collect(),
        columns::DEATH,
    ));
    plot.set_layout(cases_layout(&format!("Trend of COVID-19 in {}", region)));

    Ok(Artifact::Chart(ChartArtifact {
        heading: Some("COVID-19 Dashboard for India".to_string()),
        title: format!("COVID-19 Trend in {}", region),
        figure: figure(&plot)?,
    }))
}
