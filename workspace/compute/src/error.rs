use thiserror::Error;
use tracing::error;

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// The dataset could not be read or does not have the expected shape
    #[error("Data load error: {0}")]
    DataLoad(String),

    /// Error from Polars DataFrame operations
    #[error("DataFrame error: {0}")]
    DataFrame(String),

    /// Error from Polars Series operations
    #[error("Series error: {0}")]
    Series(String),

    /// A region selection matched no rows where at least one is required
    #[error("No rows found for region '{region}'")]
    EmptySelection { region: String },

    /// The requested page is not one of the menu pages
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// A page parameter was not supplied and has no default
    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),

    /// Error while building a chart or map artifact
    #[error("Render error: {0}")]
    Render(String),
}

impl ComputeError {
    /// Machine-readable code for API error payloads.
    pub fn code(&self) -> &'static str {
        match self {
            ComputeError::DataLoad(_) => "DATA_LOAD_ERROR",
            ComputeError::DataFrame(_) | ComputeError::Series(_) => "COMPUTE_ERROR",
            ComputeError::EmptySelection { .. } => "EMPTY_SELECTION",
            ComputeError::UnknownPage(_) => "UNKNOWN_PAGE",
            ComputeError::MissingParameter(_) => "MISSING_PARAMETER",
            ComputeError::Render(_) => "RENDER_ERROR",
        }
    }
}

// Implement From<polars::error::PolarsError> for ComputeError
impl From<polars::error::PolarsError> for ComputeError {
    fn from(error: polars::error::PolarsError) -> Self {
        match error {
            polars::error::PolarsError::ColumnNotFound(_) => {
                let err = ComputeError::DataFrame(format!("Column not found: {}", error));
                error!(?err, "DataFrame error: Column not found");
                err
            }
            polars::error::PolarsError::ShapeMismatch(_) => {
                let err = ComputeError::DataFrame(format!("Shape mismatch: {}", error));
                error!(?err, "DataFrame error: Shape mismatch");
                err
            }
            polars::error::PolarsError::SchemaMismatch(_) => {
                let err = ComputeError::DataFrame(format!("Schema mismatch: {}", error));
                error!(?err, "DataFrame error: Schema mismatch");
                err
            }
            polars::error::PolarsError::ComputeError(_) => {
                let err = ComputeError::DataFrame(format!("Compute error: {}", error));
                error!(?err, "DataFrame error: Compute error");
                err
            }
            _ => {
                let err = ComputeError::Series(format!("Series error: {}", error));
                error!(?err, "Series error");
                err
            }
        }
    }
}

impl From<serde_json::Error> for ComputeError {
    fn from(error: serde_json::Error) -> Self {
        ComputeError::Render(format!("Figure serialization failed: {}", error))
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
