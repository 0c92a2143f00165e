//! Page dispatch.
//!
//! Turns a page name plus optional region parameters into a fully resolved
//! [`PageRequest`], then renders it with the matching view.

use common::{Artifact, Page, PageRequest};
use std::str::FromStr;
use tracing::{debug, instrument};

use crate::error::{ComputeError, Result};
use crate::table::CaseTable;
use crate::view;

/// Parses a page title or slug, ignoring ASCII case.
pub fn parse_page(name: &str) -> Result<Page> {
    Page::from_str(name.trim()).map_err(|_| ComputeError::UnknownPage(name.to_string()))
}

/// Fills in the parameters a page needs.
///
/// A missing `region` defaults to the first region in table order. For the
/// comparison page a missing `region_b` defaults to the second region.
#[instrument(skip(table))]
pub fn resolve_request(
    table: &CaseTable,
    page: Page,
    region: Option<&str>,
    region_b: Option<&str>,
) -> Result<PageRequest> {
    let request = match page {
        Page::Overview => PageRequest::Overview,
        Page::Map => PageRequest::Map,
        Page::TimeLapse => PageRequest::TimeLapse,
        Page::HowToUse => PageRequest::HowToUse,
        Page::Dashboard => PageRequest::Dashboard {
            region: region_or_default(table, region, 0, "region")?,
        },
        Page::SmaForecast => PageRequest::SmaForecast {
            region: region_or_default(table, region, 0, "region")?,
        },
        Page::Comparison => PageRequest::Comparison {
            first: region_or_default(table, region, 0, "region")?,
            second: region_or_default(table, region_b, 1, "region_b")?,
        },
    };
    debug!(?request, "Resolved page request");
    Ok(request)
}

fn region_or_default(
    table: &CaseTable,
    supplied: Option<&str>,
    default_index: usize,
    parameter: &'static str,
) -> Result<String> {
    if let Some(region) = supplied.map(str::trim).filter(|r| !r.is_empty()) {
        return Ok(region.to_string());
    }
    table
        .regions()?
        .into_iter()
        .nth(default_index)
        .ok_or(ComputeError::MissingParameter(parameter))
}

/// Renders exactly one artifact for a resolved request.
#[instrument(skip(table))]
pub fn render(table: &CaseTable, request: &PageRequest) -> Result<Artifact> {
    match request {
        PageRequest::Overview => Ok(view::render_overview()),
        PageRequest::Dashboard { region } => view::render_dashboard(table, region),
        PageRequest::Comparison { first, second } => view::render_comparison(table, first, second),
        PageRequest::Map => view::render_map(table),
        PageRequest::SmaForecast { region } => view::render_sma_forecast(table, region),
        PageRequest::TimeLapse => view::render_time_lapse(table),
        PageRequest::HowToUse => Ok(view::render_how_to_use()),
    }
}
