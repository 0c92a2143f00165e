use model::columns;
use polars::prelude::*;
use tracing::instrument;

use crate::error::Result;
use crate::table::CaseTable;

/// Window of the trailing moving average, in rows.
pub const SMA_WINDOW: usize = 7;

/// Name of the smoothed series.
pub const SMA_COLUMN: &str = "SMA_7";

/// Trailing simple moving average of `Confirmed` over `window` rows, in
/// table order.
///
/// `result[i]` is the mean of rows `i + 1 - window ..= i`; the first
/// `window - 1` entries are `None`. Rows are not re-sorted, so callers pass
/// a table already in the order they want smoothed.
#[instrument(skip(table), fields(rows = table.height()))]
pub fn simple_moving_average(table: &CaseTable, window: usize) -> Result<Vec<Option<f64>>> {
    let window = window.max(1);
    let smoothed = table
        .frame()
        .clone()
        .lazy()
        .select([col(columns::CONFIRMED)
            .cast(DataType::Float64)
            .rolling_mean(RollingOptionsFixedWindow {
                window_size: window,
                min_periods: window,
                ..Default::default()
            })
            .alias(SMA_COLUMN)])
        .collect()?;

    Ok(smoothed
        .column(SMA_COLUMN)?
        .as_materialized_series()
        .f64()?
        .into_iter()
        .collect())
}
