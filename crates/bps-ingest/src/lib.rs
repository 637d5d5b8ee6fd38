//! Header reconstruction and column profiling for statistical spreadsheets.
//!
//! Spreadsheets published by statistical agencies carry title rows, stacked
//! merged-cell headers and jagged rows. This crate takes a decoded
//! [`Grid`](bps_model::Grid) and
//!
//! 1. finds the first data row ([`classify`]),
//! 2. merges the header rows above it into one flat header ([`merge`]),
//! 3. infers a type and a short summary for each column ([`profile_column`]).
//!
//! # Example
//!
//! ```
//! use bps_ingest::{HeuristicConfig, clean_grid};
//! use bps_model::{Cell, Grid};
//!
//! let grid = Grid::new(vec![
//!     vec![Cell::from("Provinsi"), Cell::from("2020"), Cell::from("2021")],
//!     vec![Cell::from("Jawa Barat"), Cell::from(120), Cell::from(130)],
//!     vec![Cell::from("Jawa Timur"), Cell::from(140), Cell::from(150)],
//! ]);
//! let table = clean_grid(&grid, &HeuristicConfig::default())?;
//! assert_eq!(table.headers, ["Provinsi", "2020", "2021"]);
//! assert_eq!(table.rows.len(), 2);
//! # Ok::<(), bps_ingest::IngestError>(())
//! ```

mod classify;
mod config;
mod error;
mod merge;
mod numeric;
mod pipeline;
mod profile;
mod unique;

// === Error Types ===
pub use error::{IngestError, Result};

// === Configuration ===
pub use config::{
    CATEGORICAL_SAMPLE_COUNT, CATEGORICAL_THRESHOLD, CLASSIFY_SCAN_LIMIT, HEADER_KEYWORDS,
    HEADER_SEPARATOR, HeuristicConfig, MAX_HEADER_ROWS, MIN_DENSE_FILLED, MIN_WIDTH_RATIO,
    NUMERIC_MAJORITY_RATIO, PLACEHOLDER_PREFIX, PROFILE_SAMPLE_ROWS, RAW_PREVIEW_ROWS,
    TEXT_SAMPLE_COUNT, YEAR_LOWER_BOUND, YEAR_MAJORITY_RATIO, YEAR_UPPER_BOUND,
};

// === Row Classification ===
pub use classify::{
    Classification, DataStartRule, RowStats, classify, classify_detailed, is_explicit_header,
    row_stats,
};

// === Header Merging ===
pub use merge::{DataBlock, HeaderMerge, collect_header_rows, merge, merge_header_rows};

// === Column Profiling ===
pub use profile::{NO_VALUES, profile_column, profile_columns};

// === Numeric Coercion ===
pub use numeric::{
    coerce_lenient, coerce_strict, format_number, is_integral, parse_f64, parse_leading_float,
};

// === Pipeline ===
pub use pipeline::{
    MIN_GRID_ROWS, TableLayout, clean_grid, detect_layout, profile_sheet, profile_workbook,
};

// === Utilities ===
pub use unique::OrderedUnique;
