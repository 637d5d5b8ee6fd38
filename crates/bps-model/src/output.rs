//! Engine outputs handed to downstream serializers and renderers.

use serde::{Deserialize, Serialize};

use crate::grid::Row;
use crate::profile::ColumnProfile;

/// Cleaning result: one flat header row plus the untouched data rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanedTable {
    pub headers: Vec<String>,
    /// Data rows in source order. Rows are not padded to the header width.
    pub rows: Vec<Row>,
    /// Number of stacked header rows that were merged.
    pub header_row_count: usize,
    pub original_row_count: usize,
    /// Rows above the first data row (equals the data-start index).
    pub skipped_row_count: usize,
}

impl CleanedTable {
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn data_row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Profiling result for one sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetProfile {
    pub sheet_name: String,
    pub columns: Vec<ColumnProfile>,
    /// Number of data rows (all of them, not only the profiled sample).
    pub row_count: usize,
    /// First raw rows of the sheet, titles included.
    pub raw_preview: Vec<Row>,
}
