//! Flattening of stacked, merged-cell header rows.
//!
//! Statistical tables often spread one header over several rows, with a
//! group label written once in the left-most cell of a merged span:
//!
//! ```text
//! |        | Gender |       |
//! | Region | Male   | Female|
//! ```
//!
//! Header rows above the data start are collected (up to a cap, stopping at
//! a blank separator row), group labels are forward-filled to the right on
//! every row except the last one, and the parts of each column are joined
//! after removing repeated labels.

use std::collections::VecDeque;

use bps_model::{Cell, Grid, Row};
use tracing::debug;

use crate::config::HeuristicConfig;
use crate::unique::OrderedUnique;

static EMPTY_CELL: Cell = Cell::Empty;

/// Data rows below the header, read positionally up to `col_count`.
#[derive(Debug, Clone, Copy)]
pub struct DataBlock<'a> {
    rows: &'a [Row],
    col_count: usize,
}

impl<'a> DataBlock<'a> {
    pub fn new(rows: &'a [Row], col_count: usize) -> Self {
        Self { rows, col_count }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn col_count(&self) -> usize {
        self.col_count
    }

    /// Rows exactly as they appear in the grid.
    pub fn rows(&self) -> &'a [Row] {
        self.rows
    }

    /// Cell at (`row`, `column`); `Empty` outside the row or the header width.
    pub fn cell(&self, row: usize, column: usize) -> &'a Cell {
        if column >= self.col_count {
            return &EMPTY_CELL;
        }
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(&EMPTY_CELL)
    }

    /// Row `row` truncated or padded with `Empty` to `col_count` cells.
    pub fn padded_row(&self, row: usize) -> Row {
        (0..self.col_count)
            .map(|column| self.cell(row, column).clone())
            .collect()
    }

    /// The first `count` rows as a smaller block.
    pub fn head(&self, count: usize) -> DataBlock<'a> {
        DataBlock {
            rows: &self.rows[..count.min(self.rows.len())],
            col_count: self.col_count,
        }
    }

    /// Owned copy of the rows, unpadded.
    pub fn to_rows(&self) -> Vec<Row> {
        self.rows.to_vec()
    }
}

/// Result of merging the header block above the data start.
#[derive(Debug, Clone)]
pub struct HeaderMerge<'a> {
    /// One header per column; its length is the column count.
    pub headers: Vec<String>,
    /// Number of header candidate rows that took part in the merge.
    pub header_row_count: usize,
    pub data: DataBlock<'a>,
}

/// Collects up to `max_rows` header rows ending just above `data_start`.
///
/// Rows are owned copies in top-to-bottom order. Blank rows are skipped
/// until a header row has been found; after that a blank row ends the
/// block. When nothing is found, row 0 is used.
pub fn collect_header_rows(grid: &Grid, data_start: usize, max_rows: usize) -> Vec<Row> {
    let mut candidates: VecDeque<Row> = VecDeque::new();
    for index in (0..data_start).rev() {
        if candidates.len() >= max_rows {
            break;
        }
        let Some(row) = grid.row(index) else {
            continue;
        };
        let has_content = row.iter().any(|cell| !cell.is_blank());
        if !has_content {
            if candidates.is_empty() {
                continue;
            }
            break;
        }
        candidates.push_front(row.clone());
    }
    if candidates.is_empty()
        && let Some(first) = grid.row(0)
    {
        candidates.push_back(first.clone());
    }
    candidates.into()
}

/// Merges `candidates` into one header per column.
///
/// The column count is the larger of `max_cols` and the width of the first
/// candidate. Candidate rows are consumed as scratch buffers for
/// forward-filling.
pub fn merge_header_rows(
    mut candidates: Vec<Row>,
    max_cols: usize,
    config: &HeuristicConfig,
) -> Vec<String> {
    let col_count = max_cols.max(candidates.first().map_or(0, Vec::len));
    for row in &mut candidates {
        row.resize(col_count.max(row.len()), Cell::Empty);
    }
    let last = candidates.len().saturating_sub(1);

    let mut headers = Vec::with_capacity(col_count);
    for column in 0..col_count {
        let mut parts = OrderedUnique::new();
        for (index, row) in candidates.iter_mut().enumerate() {
            if index != last && column > 0 && row[column].is_blank() && !row[column - 1].is_blank()
            {
                // Persist the fill so the next column chains off it.
                row[column] = row[column - 1].clone();
            }
            let value = row[column].display_trimmed();
            if !value.is_empty() {
                parts.push(value);
            }
        }
        headers.push(if parts.is_empty() {
            config.placeholder(column)
        } else {
            parts.into_vec().join(&config.header_separator)
        });
    }
    headers
}

/// Builds the flat header and the data block for `grid`.
pub fn merge<'a>(
    grid: &'a Grid,
    data_start: usize,
    max_cols: usize,
    config: &HeuristicConfig,
) -> HeaderMerge<'a> {
    let candidates = collect_header_rows(grid, data_start, config.max_header_rows);
    let header_row_count = candidates.len();
    let headers = merge_header_rows(candidates, max_cols, config);
    debug!(
        data_start,
        header_rows = header_row_count,
        columns = headers.len(),
        "merged header rows"
    );
    let rows = grid.rows();
    let data = DataBlock::new(&rows[data_start.min(rows.len())..], headers.len());
    HeaderMerge {
        headers,
        header_row_count,
        data,
    }
}
