//! Error types for grid ingestion.

use thiserror::Error;

/// Errors that can occur while cleaning or profiling a grid.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Grid has fewer than two rows, so there is no header/data split.
    #[error("grid has {rows} row(s); at least 2 are required")]
    InsufficientData { rows: usize },

    /// A heuristic setting is out of range.
    #[error("invalid config value for {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
