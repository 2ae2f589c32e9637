//! Error type shared by table loading, document building and rendering.

use thiserror::Error;

/// Everything that can go wrong while shaping or rendering a map.
#[derive(Error, Debug)]
pub enum GeovizError {
    /// A column named by the caller does not exist in the table.
    #[error("column not found: {column}")]
    ColumnNotFound { column: String },

    /// A row is shorter than the column being read.
    #[error("row {row} has no value for column '{column}'")]
    MissingCell { column: String, row: usize },

    /// A coordinate cell could not be read as a number.
    #[error("row {row}, column '{column}': '{value}' is not a number")]
    InvalidNumber {
        column: String,
        row: usize,
        value: String,
    },

    /// A render asked for a series the document does not carry.
    #[error("missing series: {0}")]
    MissingSeries(String),

    /// The rendering backend refused the document or could not write it.
    #[error("render backend error: {0}")]
    RenderBackend(String),

    /// The requested render path is not available in this configuration.
    #[error("unsupported mode: {0}")]
    UnsupportedMode(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GeovizError {
    pub(crate) fn column_not_found(column: &str) -> Self {
        GeovizError::ColumnNotFound {
            column: column.to_string(),
        }
    }
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, GeovizError>;
