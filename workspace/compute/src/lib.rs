//! Case table loading, enrichment and page rendering.

pub mod enrich;
pub mod error;
pub mod loader;
pub mod router;
pub mod sma;
pub mod table;
pub mod view;

pub use error::{ComputeError, Result};
pub use loader::{load_case_table, CaseSource, CsvCaseSource};
pub use router::{parse_page, render, resolve_request};
pub use sma::{simple_moving_average, SMA_COLUMN, SMA_WINDOW};
pub use table::CaseTable;
