//! Data model for statistical table cleaning.
//!
//! A [`Grid`] is the raw, possibly jagged cell matrix handed over by a
//! spreadsheet decoder. The engine in `bps-ingest` turns it into a
//! [`CleanedTable`] (flat headers plus data rows) or a [`SheetProfile`]
//! (one [`ColumnProfile`] per reconstructed column).

pub mod cell;
pub mod grid;
pub mod output;
pub mod profile;

pub use cell::{Cell, format_number};
pub use grid::{Grid, Row};
pub use output::{CleanedTable, SheetProfile};
pub use profile::{ColumnProfile, ColumnType};
