use common::{Artifact, ChartArtifact};
use model::columns;
use plotly::common::{Marker, Mode};
use plotly::Plot;
use tracing::{debug, instrument};

use super::chart::{cases_layout, date_labels, figure, line_trace};
use crate::error::Result;
use crate::sma::{simple_moving_average, SMA_COLUMN, SMA_WINDOW};
use crate::table::CaseTable;

const MARKER_SIZE: usize = 3;

/// Confirmed cases for one region overlaid with their 7-row trailing
/// average. Rows keep table order; the first six averages are blank.
#[instrument(skip(table))]
pub fn render_sma_forecast(table: &CaseTable, region: &str) -> Result<Artifact> {
    let region_rows = table.require_region(region)?;
    let smoothed = simple_moving_average(&region_rows, SMA_WINDOW)?;
    let rows = region_rows.records()?;
    debug!(
        "{} of {} rows for {} have a moving average",
        smoothed.iter().filter(|v| v.is_some()).count(),
        rows.len(),
        region
    );

    let dates = date_labels(&rows);
    let mut plot = Plot::new();
    plot.add_trace(
        line_trace(
            dates.clone(),
            rows.iter().map(|r| r.confirmed).collect(),
            columns::CONFIRMED,
        )
        .mode(Mode::LinesMarkers)
        .marker(Marker::new().size(MARKER_SIZE)),
    );
    plot.add_trace(
        line_trace(dates, smoothed, SMA_COLUMN)
            .mode(Mode::LinesMarkers)
            .marker(Marker::new().size(MARKER_SIZE)),
    );
    plot.set_layout(cases_layout(&format!("Predicted Trend in {} (SMA)", region)));

    Ok(Artifact::Chart(ChartArtifact {
        heading: Some("COVID-19 Trend Prediction (SMA)".to_string()),
        title: format!("7-Day Moving Average Prediction for {}", region),
        figure: figure(&plot)?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComputeError;
    use crate::table::fixtures::table;
    use serde_json::json;

    #[test]
    fn test_confirmed_and_sma_traces() {
        let rows: Vec<(&str, u32, i64, i64, i64)> =
            (1..=10).map(|i| ("Kerala", i as u32, i as i64, 0, 0)).collect();

        let Artifact::Chart(chart) = render_sma_forecast(&table(&rows), "Kerala").unwrap() else {
            panic!("Expected a chart artifact");
        };
        assert_eq!(chart.heading.as_deref(), Some("COVID-19 Trend Prediction (SMA)"));
        assert_eq!(chart.title, "7-Day Moving Average Prediction for Kerala");
        assert_eq!(
            chart.figure["layout"]["title"]["text"],
            "Predicted Trend in Kerala (SMA)"
        );

        let traces = chart.figure["data"].as_array().unwrap();
        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0]["name"], "Confirmed");
        assert_eq!(traces[1]["name"], "SMA_7");
        assert_eq!(traces[1]["marker"]["size"], 3);

        let sma = traces[1]["y"].as_array().unwrap();
        assert_eq!(sma.len(), 10);
        assert!(sma[..6].iter().all(|v| v.is_null()));
        assert_eq!(sma[9], json!(7.0));
    }

    #[test]
    fn test_only_selected_region_is_smoothed() {
        let mut rows: Vec<(&str, u32, i64, i64, i64)> = Vec::new();
        for i in 0..7u32 {
            rows.push(("Goa", i, 1_000, 0, 0));
            rows.push(("Kerala", i, 7, 0, 0));
        }

        let Artifact::Chart(chart) = render_sma_forecast(&table(&rows), "Kerala").unwrap() else {
            panic!("Expected a chart artifact");
        };
        let sma = chart.figure["data"][1]["y"].as_array().unwrap();
        assert_eq!(sma[6], json!(7.0));
    }

    #[test]
    fn test_unknown_region_is_empty_selection() {
        let err = render_sma_forecast(&table(&[("Goa", 0, 1, 0, 0)]), "Kerala").unwrap_err();
        assert!(matches!(err, ComputeError::EmptySelection { .. }));
    }
}
