//! Raw cell grids as produced by a spreadsheet decoder.

use serde::{Deserialize, Serialize};

use crate::cell::Cell;

/// One grid row. Rows in a grid may differ in length.
pub type Row = Vec<Cell>;

/// Ordered, possibly jagged sequence of rows for one sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Width of the widest row among the first `limit` rows.
    pub fn max_width(&self, limit: usize) -> usize {
        self.rows
            .iter()
            .take(limit)
            .map(Vec::len)
            .max()
            .unwrap_or(0)
    }

    /// Owned copy of the first `count` rows, untouched.
    pub fn preview(&self, count: usize) -> Vec<Row> {
        self.rows.iter().take(count).cloned().collect()
    }
}

impl From<Vec<Row>> for Grid {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

impl FromIterator<Row> for Grid {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
