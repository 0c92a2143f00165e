use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use utoipa::ToSchema;

/// The pages offered by the navigation menu.
///
/// Parsing accepts either the display title or the slug, ignoring ASCII
/// case. Anything else fails instead of rendering nothing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum Page {
    #[strum(to_string = "Overview")]
    Overview,
    #[strum(to_string = "COVID-19 Dashboard", serialize = "dashboard")]
    Dashboard,
    #[strum(to_string = "Comparison Chart", serialize = "comparison")]
    Comparison,
    #[strum(to_string = "COVID-19 Map", serialize = "map")]
    Map,
    #[strum(to_string = "SMA Forecast", serialize = "sma-forecast")]
    SmaForecast,
    #[strum(to_string = "Time-Lapse Map", serialize = "time-lapse")]
    TimeLapse,
    #[strum(to_string = "How to Use & Tools", serialize = "how-to-use")]
    HowToUse,
}

impl Page {
    /// URL-safe identifier, identical to the serde representation.
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Overview => "overview",
            Page::Dashboard => "dashboard",
            Page::Comparison => "comparison",
            Page::Map => "map",
            Page::SmaForecast => "sma-forecast",
            Page::TimeLapse => "time-lapse",
            Page::HowToUse => "how-to-use",
        }
    }

    /// Names of the query parameters the page reads.
    pub fn parameters(&self) -> &'static [&'static str] {
        match self {
            Page::Dashboard | Page::SmaForecast => &["region"],
            Page::Comparison => &["region", "region_b"],
            Page::Overview | Page::Map | Page::TimeLapse | Page::HowToUse => &[],
        }
    }

    /// Menu entries in display order.
    pub fn menu() -> Vec<PageInfo> {
        Page::iter().map(PageInfo::from).collect()
    }
}

/// Menu entry describing a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageInfo {
    pub page: Page,
    pub title: String,
    pub slug: String,
    pub parameters: Vec<String>,
}

impl From<Page> for PageInfo {
    fn from(page: Page) -> Self {
        Self {
            page,
            title: page.to_string(),
            slug: page.slug().to_string(),
            parameters: page.parameters().iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// A fully resolved render request: the page plus every parameter it needs.
///
/// Also the key under which rendered artifacts are memoised.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(tag = "page", rename_all = "kebab-case")]
pub enum PageRequest {
    Overview,
    Dashboard { region: String },
    Comparison { first: String, second: String },
    Map,
    SmaForecast { region: String },
    TimeLapse,
    HowToUse,
}

impl PageRequest {
    pub fn page(&self) -> Page {
        match self {
            PageRequest::Overview => Page::Overview,
            PageRequest::Dashboard { .. } => Page::Dashboard,
            PageRequest::Comparison { .. } => Page::Comparison,
            PageRequest::Map => Page::Map,
            PageRequest::SmaForecast { .. } => Page::SmaForecast,
            PageRequest::TimeLapse => Page::TimeLapse,
            PageRequest::HowToUse => Page::HowToUse,
        }
    }
}
