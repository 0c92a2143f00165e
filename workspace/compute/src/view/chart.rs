use model::CaseRecord;
use plotly::common::{Line, Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Plot, Scatter};
use serde::Serialize;

use crate::error::Result;

/// X values for a time-series trace.
pub(crate) fn date_labels(records: &[CaseRecord]) -> Vec<String> {
    records.iter().map(|r| r.date.to_string()).collect()
}

pub(crate) fn line_trace<Y>(dates: Vec<String>, values: Vec<Y>, name: &str) -> Box<Scatter<String, Y>>
where
    Y: Serialize + Clone + 'static,
{
    Scatter::new(dates, values).mode(Mode::Lines).name(name)
}

pub(crate) fn colored_line(color: &'static str, dashed: bool) -> Line {
    let line = Line::new().color(color);
    if dashed {
        line.dash(plotly::common::DashType::Dash)
    } else {
        line
    }
}

/// Layout shared by every case chart: dates on x, case counts on y.
pub(crate) fn cases_layout(title: &str) -> Layout {
    Layout::new()
        .title(Title::with_text(title))
        .x_axis(Axis::new().title(Title::with_text("Date")))
        .y_axis(Axis::new().title(Title::with_text("Cases")))
        .height(500)
}

/// Serializes a plot into the JSON figure handed to UI layers.
pub(crate) fn figure(plot: &Plot) -> Result<serde_json::Value> {
    Ok(serde_json::from_str(&plot.to_json())?)
}
