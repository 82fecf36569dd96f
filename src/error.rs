use thiserror::Error;
use tracing::error;

/// Error types for figure assembly
#[derive(Error, Debug)]
pub enum PlotError {
    /// Error from Polars DataFrame operations (including missing columns)
    #[error("DataFrame error: {0}")]
    DataFrame(String),

    /// Error from Polars Series operations
    #[error("Series error: {0}")]
    Series(String),

    /// Error from date conversion
    #[error("Date error: {0}")]
    Date(String),
}

// Implement From<polars::error::PolarsError> for PlotError
impl From<polars::error::PolarsError> for PlotError {
    fn from(error: polars::error::PolarsError) -> Self {
        let plot_error = match error {
            polars::error::PolarsError::ColumnNotFound(_) => {
                let err = PlotError::DataFrame(format!("Column not found: {}", error));
                error!(?err, "DataFrame error: Column not found");
                err
            }
            polars::error::PolarsError::NoData(_) => {
                let err = PlotError::DataFrame(format!("No data: {}", error));
                error!(?err, "DataFrame error: No data");
                err
            }
            polars::error::PolarsError::ShapeMismatch(_) => {
                let err = PlotError::DataFrame(format!("Shape mismatch: {}", error));
                error!(?err, "DataFrame error: Shape mismatch");
                err
            }
            polars::error::PolarsError::SchemaMismatch(_) => {
                let err = PlotError::DataFrame(format!("Schema mismatch: {}", error));
                error!(?err, "DataFrame error: Schema mismatch");
                err
            }
            polars::error::PolarsError::OutOfBounds(_) => {
                let err = PlotError::DataFrame(format!("Out of bounds: {}", error));
                error!(?err, "DataFrame error: Out of bounds");
                err
            }
            _ => {
                let err = PlotError::Series(format!("Series error: {}", error));
                error!(?err, "Series error");
                err
            }
        };
        plot_error
    }
}

/// Type alias for Result with PlotError
pub type Result<T> = std::result::Result<T, PlotError>;
