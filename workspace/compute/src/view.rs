//! Page renderers.
//!
//! Each renderer reads the shared case table, derives the subset it needs
//! and returns exactly one [`common::Artifact`]. No renderer feeds another.

mod chart;
mod geo;

pub mod comparison;
pub mod dashboard;
pub mod forecast;
pub mod info;
pub mod map;
pub mod time_lapse;

pub use comparison::render_comparison;
pub use dashboard::render_dashboard;
pub use forecast::render_sma_forecast;
pub use info::{render_how_to_use, render_overview};
pub use map::{marker_radius, render_map};
pub use time_lapse::render_time_lapse;
