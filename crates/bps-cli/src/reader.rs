//! CSV decoding into cell grids.
//!
//! Records keep their own length, so jagged exports survive as jagged rows.
//! The `csv` crate drops fully empty lines; rows of empty fields are kept.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use bps_ingest::parse_f64;
use bps_model::{Cell, Grid, Row};
use csv::ReaderBuilder;
use tracing::debug;

const UTF8_BOM: char = '\u{feff}';

/// Name used for a sheet read from `path`.
pub fn sheet_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Converts a delimiter argument to the single byte the CSV reader expects.
///
/// # Errors
///
/// Fails for characters outside ASCII.
pub fn delimiter_byte(delimiter: char) -> Result<u8> {
    match u8::try_from(delimiter) {
        Ok(byte) if byte.is_ascii() => Ok(byte),
        _ => bail!("delimiter must be a single ASCII character, got {delimiter:?}"),
    }
}

/// Decodes one raw CSV field.
pub fn parse_cell(raw: &str) -> Cell {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Cell::Empty
    } else if let Some(value) = parse_f64(trimmed) {
        Cell::Number(value)
    } else {
        Cell::Text(trimmed.to_string())
    }
}

/// Reads every record of `reader` as one grid row.
///
/// # Errors
///
/// Fails on malformed CSV or input that is not UTF-8.
pub fn read_grid<R: Read>(reader: R, delimiter: u8) -> Result<Grid> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut rows: Vec<Row> = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record.with_context(|| format!("read CSV record {}", index + 1))?;
        let row = record
            .iter()
            .enumerate()
            .map(|(column, raw)| {
                if index == 0 && column == 0 {
                    parse_cell(raw.trim_start_matches(UTF8_BOM))
                } else {
                    parse_cell(raw)
                }
            })
            .collect();
        rows.push(row);
    }
    Ok(Grid::new(rows))
}

/// Opens and decodes the CSV file at `path`.
///
/// # Errors
///
/// Fails when the file cannot be opened or decoded.
pub fn read_grid_file(path: &Path, delimiter: u8) -> Result<Grid> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let grid = read_grid(file, delimiter).with_context(|| format!("decode {}", path.display()))?;
    debug!(
        path = %path.display(),
        rows = grid.len(),
        "read grid"
    );
    Ok(grid)
}
