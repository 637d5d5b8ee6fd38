//! End-to-end cleaning and profiling of one grid or a workbook of grids.

use bps_model::{CleanedTable, Grid, SheetProfile};
use tracing::{debug, info, info_span, warn};

use crate::classify::{DataStartRule, classify_detailed};
use crate::config::HeuristicConfig;
use crate::error::{IngestError, Result};
use crate::merge::{DataBlock, merge};
use crate::profile::profile_columns;

/// Minimum number of rows for a grid to have a header and a body.
pub const MIN_GRID_ROWS: usize = 2;

/// Detected structure of a grid.
#[derive(Debug, Clone)]
pub struct TableLayout<'a> {
    pub data_start: usize,
    pub rule: DataStartRule,
    /// Widest row among the scanned rows.
    pub max_cols: usize,
    pub headers: Vec<String>,
    pub header_row_count: usize,
    pub data: DataBlock<'a>,
}

impl TableLayout<'_> {
    /// Number of reconstructed columns.
    pub fn col_count(&self) -> usize {
        self.headers.len()
    }
}

/// Classifies the grid and merges its header rows.
///
/// # Errors
///
/// Returns [`IngestError::InvalidConfig`] for an unusable configuration and
/// [`IngestError::InsufficientData`] for grids with fewer than two rows.
pub fn detect_layout<'a>(grid: &'a Grid, config: &HeuristicConfig) -> Result<TableLayout<'a>> {
    config.validate()?;
    if grid.len() < MIN_GRID_ROWS {
        return Err(IngestError::InsufficientData { rows: grid.len() });
    }
    let classification = classify_detailed(grid, config);
    let merged = merge(
        grid,
        classification.data_start,
        classification.max_cols,
        config,
    );
    debug!(
        data_start = classification.data_start,
        rule = classification.rule.as_str(),
        columns = merged.headers.len(),
        "layout detected"
    );
    Ok(TableLayout {
        data_start: classification.data_start,
        rule: classification.rule,
        max_cols: classification.max_cols,
        headers: merged.headers,
        header_row_count: merged.header_row_count,
        data: merged.data,
    })
}

/// Produces flat headers and data rows for `grid`.
///
/// # Errors
///
/// See [`detect_layout`].
pub fn clean_grid(grid: &Grid, config: &HeuristicConfig) -> Result<CleanedTable> {
    let span = info_span!("clean_grid", rows = grid.len());
    let _guard = span.enter();
    let layout = detect_layout(grid, config)?;
    info!(
        data_rows = layout.data.len(),
        header_rows = layout.header_row_count,
        skipped = layout.data_start,
        "grid cleaned"
    );
    Ok(CleanedTable {
        rows: layout.data.to_rows(),
        headers: layout.headers,
        header_row_count: layout.header_row_count,
        original_row_count: grid.len(),
        skipped_row_count: layout.data_start,
    })
}

/// Profiles every column of `grid`.
///
/// # Errors
///
/// See [`detect_layout`].
pub fn profile_sheet(
    sheet_name: &str,
    grid: &Grid,
    config: &HeuristicConfig,
) -> Result<SheetProfile> {
    let span = info_span!("profile_sheet", sheet = sheet_name, rows = grid.len());
    let _guard = span.enter();
    let layout = detect_layout(grid, config)?;
    let columns = profile_columns(&layout.headers, &layout.data, config);
    info!(
        columns = columns.len(),
        data_rows = layout.data.len(),
        "sheet profiled"
    );
    Ok(SheetProfile {
        sheet_name: sheet_name.to_string(),
        columns,
        row_count: layout.data.len(),
        raw_preview: grid.preview(config.raw_preview_rows),
    })
}

/// Profiles each `(name, grid)` sheet, skipping sheets that are too small.
///
/// # Errors
///
/// Returns [`IngestError::InvalidConfig`] for an unusable configuration.
pub fn profile_workbook<'a, I>(sheets: I, config: &HeuristicConfig) -> Result<Vec<SheetProfile>>
where
    I: IntoIterator<Item = (&'a str, &'a Grid)>,
{
    let span = info_span!("profile_workbook");
    let _guard = span.enter();
    config.validate()?;
    let mut profiles = Vec::new();
    for (name, grid) in sheets {
        match profile_sheet(name, grid, config) {
            Ok(profile) => profiles.push(profile),
            Err(IngestError::InsufficientData { rows }) => {
                warn!(sheet = name, rows, "skipping sheet without enough rows");
            }
            Err(error) => return Err(error),
        }
    }
    Ok(profiles)
}
