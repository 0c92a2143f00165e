use common::{Artifact, ComparisonArtifact, MetricCard, RegionMetrics};
use model::CaseRecord;
use plotly::common::Title;
use plotly::layout::themes::PLOTLY_DARK;
use plotly::layout::Legend;
use plotly::Plot;
use tracing::{debug, instrument};

use super::chart::{cases_layout, colored_line, date_labels, figure, line_trace};
use crate::error::{ComputeError, Result};
use crate::table::CaseTable;

/// Latest metrics for two regions plus their six overlaid trend lines.
///
/// The regions may be the same. The second region's lines are dashed.
#[instrument(skip(table))]
pub fn render_comparison(table: &CaseTable, first: &str, second: &str) -> Result<Artifact> {
    let first_rows = table.require_region(first)?;
    let second_rows = table.require_region(second)?;

    let first_metrics = latest_metrics(&first_rows, first)?;
    let second_metrics = latest_metrics(&second_rows, second)?;
    debug!(
        "Comparing {} ({}) with {} ({})",
        first, first_metrics.date, second, second_metrics.date
    );

    let mut plot = Plot::new();
    add_region_traces(&mut plot, first, &first_rows.records()?, false);
    add_region_traces(&mut plot, second, &second_rows.records()?, true);
    plot.set_layout(
        cases_layout(&format!("COVID-19 Comparison: {} vs {}", first, second))
            .legend(Legend::new().title(Title::with_text("Legend")))
            .template(&*PLOTLY_DARK),
    );

    Ok(Artifact::Comparison(ComparisonArtifact {
        title: format!("Compare COVID-19 Trends: {} vs {}", first, second),
        first: first_metrics,
        second: second_metrics,
        figure: figure(&plot)?,
    }))
}

/// Metric cards from the region's last row in table order.
fn latest_metrics(rows: &CaseTable, region: &str) -> Result<RegionMetrics> {
    let latest = rows
        .last_record()?
        .ok_or_else(|| ComputeError::EmptySelection {
            region: region.to_string(),
        })?;

    Ok(RegionMetrics {
        region: region.to_string(),
        date: latest.date,
        cards: vec![
            MetricCard::new("Confirmed Cases", latest.confirmed),
            MetricCard::new("Recovered Cases", latest.recovered),
            MetricCard::new("Deaths", latest.deaths),
        ],
    })
}

fn add_region_traces(plot: &mut Plot, region: &str, rows: &[CaseRecord], dashed: bool) {
    let dates = date_labels(rows);
    let series: [(&str, &'static str, Vec<i64>); 3] = [
        ("Confirmed", "blue", rows.iter().map(|r| r.confirmed).collect()),
        ("Recovered", "green", rows.iter().map(|r| r.recovered).collect()),
        ("Deaths", "red", rows.iter().map(|r| r.deaths).collect()),
    ];

    for (label, color, values) in series {
        let name = format!("{} - {}", region, label);
        plot.add_trace(
            line_trace(dates.clone(), values, name.as_str()).line(colored_line(color, dashed)),
        );
    }
}
