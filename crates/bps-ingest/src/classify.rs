//! Data-start detection for raw statistical tables.
//!
//! Agency spreadsheets put titles, notes and stacked header rows above the
//! table body. The classifier scans the top of the grid for the first row
//! that looks like data (decimal values, or a dense run of non-year
//! integers) and skips rows containing explicit header keywords.

use bps_model::{Cell, Grid};
use tracing::{debug, trace};

use crate::config::HeuristicConfig;
use crate::numeric::{coerce_lenient, is_integral};

/// Which rule produced the data-start index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataStartRule {
    /// Row contains non-integer values and is not a year header.
    DecimalValues,
    /// Row is mostly non-year integers with more than a couple of cells.
    DenseNumeric,
    /// No row matched; data starts right after the densest row.
    DensestRow,
}

impl DataStartRule {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DataStartRule::DecimalValues => "decimal_values",
            DataStartRule::DenseNumeric => "dense_numeric",
            DataStartRule::DensestRow => "densest_row",
        }
    }
}

/// Classifier result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Index of the first data row, always at least 1.
    pub data_start: usize,
    pub rule: DataStartRule,
    /// Widest row among the scanned rows.
    pub max_cols: usize,
}

/// Cell counts for one row.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RowStats {
    pub width: usize,
    pub filled: usize,
    pub numeric: usize,
    pub year_like: usize,
    pub float: usize,
}

impl RowStats {
    fn is_year_header(self, config: &HeuristicConfig) -> bool {
        self.year_like as f64 > self.filled as f64 * config.year_majority_ratio
    }

    fn has_decimal_values(self, config: &HeuristicConfig) -> bool {
        self.float > 0 && !self.is_year_header(config)
    }

    fn is_dense_numeric(self, config: &HeuristicConfig) -> bool {
        self.numeric as f64 > self.filled as f64 * config.numeric_majority_ratio
            && !self.is_year_header(config)
            && self.filled > config.min_dense_filled
    }
}

/// Counts filled, numeric, year-like and fractional cells of `row`.
pub fn row_stats(row: &[Cell], config: &HeuristicConfig) -> RowStats {
    let mut stats = RowStats {
        width: row.len(),
        ..RowStats::default()
    };
    for cell in row {
        if !cell.is_empty() {
            stats.filled += 1;
        }
        let Some(value) = coerce_lenient(cell) else {
            continue;
        };
        stats.numeric += 1;
        if is_integral(value) {
            if value > config.year_lower_bound && value < config.year_upper_bound {
                stats.year_like += 1;
            }
        } else {
            stats.float += 1;
        }
    }
    stats
}

/// Returns true when the lower-cased row text contains any of `keywords`.
///
/// `keywords` must already be lower-cased.
pub fn is_explicit_header(row: &[Cell], keywords: &[String]) -> bool {
    let row_text = row
        .iter()
        .map(|cell| cell.display().to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    keywords.iter().any(|kw| row_text.contains(kw.as_str()))
}

/// Index of the first data row of `grid` (at least 1).
pub fn classify(grid: &Grid, config: &HeuristicConfig) -> usize {
    classify_detailed(grid, config).data_start
}

/// Like [`classify`], also reporting the rule that fired.
pub fn classify_detailed(grid: &Grid, config: &HeuristicConfig) -> Classification {
    let limit = grid.len().min(config.scan_limit);
    let max_cols = grid.max_width(limit);
    let min_width = max_cols as f64 * config.min_width_ratio;
    let keywords = config.normalized_keywords();

    let mut matched = None;
    for (index, row) in grid.rows().iter().take(limit).enumerate() {
        if (row.len() as f64) < min_width {
            trace!(row = index, width = row.len(), "skipping narrow row");
            continue;
        }
        if is_explicit_header(row, &keywords) {
            trace!(row = index, "explicit header keyword");
            continue;
        }
        let stats = row_stats(row, config);
        let rule = if stats.has_decimal_values(config) {
            Some(DataStartRule::DecimalValues)
        } else if stats.is_dense_numeric(config) {
            Some(DataStartRule::DenseNumeric)
        } else {
            None
        };
        if let Some(rule) = rule {
            debug!(
                row = index,
                filled = stats.filled,
                numeric = stats.numeric,
                year_like = stats.year_like,
                float = stats.float,
                rule = rule.as_str(),
                "data row found"
            );
            matched = Some((index, rule));
            break;
        }
    }

    let (data_start, rule) = matched.unwrap_or_else(|| {
        let start = densest_row(grid, limit).map_or(0, |index| index + 1);
        debug!(data_start = start, "no data row matched, using densest row");
        (start, DataStartRule::DensestRow)
    });

    Classification {
        data_start: data_start.max(1),
        rule,
        max_cols,
    }
}

/// First row with the highest non-empty cell count, if any row has content.
fn densest_row(grid: &Grid, limit: usize) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (index, row) in grid.rows().iter().take(limit).enumerate() {
        let filled = row.iter().filter(|cell| !cell.is_empty()).count();
        if filled > best.map_or(0, |(_, count)| count) {
            best = Some((index, filled));
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_row(values: &[&str]) -> Vec<Cell> {
        values.iter().map(|v| Cell::from(*v)).collect()
    }

    #[test]
    fn test_row_stats_counts() {
        let config = HeuristicConfig::default();
        let row = vec![
            Cell::from("Aceh"),
            Cell::from(2020),
            Cell::from("12,5"),
            Cell::Empty,
            Cell::from(7),
        ];
        let stats = row_stats(&row, &config);
        assert_eq!(stats.width, 5);
        assert_eq!(stats.filled, 4);
        assert_eq!(stats.numeric, 3);
        assert_eq!(stats.year_like, 1);
        assert_eq!(stats.float, 1);
    }

    #[test]
    fn test_year_bounds_are_exclusive() {
        let config = HeuristicConfig::default();
        let row = vec![Cell::from(1900), Cell::from(2100), Cell::from(1901)];
        assert_eq!(row_stats(&row, &config).year_like, 1);
    }

    #[test]
    fn test_explicit_header_case_insensitive() {
        let keywords = HeuristicConfig::default().normalized_keywords();
        assert!(is_explicit_header(&text_row(&["PROVINSI", "2020"]), &keywords));
        assert!(is_explicit_header(&text_row(&["Nama Kabupaten/Kota"]), &keywords));
        assert!(!is_explicit_header(&text_row(&["Jawa Barat", "12"]), &keywords));
    }

    #[test]
    fn test_keyword_row_with_decimals_is_skipped() {
        let config = HeuristicConfig::default();
        let grid = Grid::new(vec![
            text_row(&["Nama", "A", "B"]),
            vec![Cell::from("Keterangan"), Cell::from(1.5), Cell::from(2.5)],
            vec![Cell::from("Kota A"), Cell::from(3.5), Cell::from(4.5)],
        ]);
        let result = classify_detailed(&grid, &config);
        assert_eq!(result.data_start, 2);
        assert_eq!(result.rule, DataStartRule::DecimalValues);

        // Without the keyword the same row is data.
        let relaxed = config.with_header_keywords(["provinsi"]);
        assert_eq!(classify(&grid, &relaxed), 1);
    }

    #[test]
    fn test_year_row_is_not_data() {
        let config = HeuristicConfig::default();
        let grid = Grid::new(vec![
            text_row(&["Region", "2019", "2020", "2021"]),
            vec![
                Cell::from("North"),
                Cell::from(1.5),
                Cell::from(2.5),
                Cell::from(3.5),
            ],
        ]);
        let result = classify_detailed(&grid, &config);
        assert_eq!(result.data_start, 1);
        assert_eq!(result.rule, DataStartRule::DecimalValues);
        assert_eq!(result.max_cols, 4);
    }

    #[test]
    fn test_narrow_rows_skipped() {
        let config = HeuristicConfig::default();
        // The title row holds a decimal but is too narrow to be table data.
        let grid = Grid::new(vec![
            vec![Cell::from("Edition 2.5")],
            text_row(&["Name", "A", "B", "C"]),
            vec![
                Cell::from("x"),
                Cell::from(10),
                Cell::from(20),
                Cell::from(30),
            ],
        ]);
        let result = classify_detailed(&grid, &config);
        assert_eq!(result.data_start, 2);
        assert_eq!(result.rule, DataStartRule::DenseNumeric);
    }

    #[test]
    fn test_fallback_densest_row() {
        let config = HeuristicConfig::default();
        let grid = Grid::new(vec![
            text_row(&["Daftar Nama"]),
            text_row(&["Nama", "Alamat", "Kota"]),
            text_row(&["Budi", "Jl. Merdeka", "Bandung"]),
        ]);
        let result = classify_detailed(&grid, &config);
        // Rows 1 and 2 are equally dense; the first one wins.
        assert_eq!(result.data_start, 2);
        assert_eq!(result.rule, DataStartRule::DensestRow);
    }

    #[test]
    fn test_clamped_to_one() {
        let config = HeuristicConfig::default();
        let grid = Grid::new(vec![
            vec![Cell::from(1.5), Cell::from(2.5)],
            vec![Cell::from(3.5), Cell::from(4.5)],
        ]);
        let result = classify_detailed(&grid, &config);
        assert_eq!(result.data_start, 1);
        assert_eq!(result.rule, DataStartRule::DecimalValues);
    }

    #[test]
    fn test_all_blank_grid() {
        let config = HeuristicConfig::default();
        let grid = Grid::new(vec![vec![Cell::Empty; 3], vec![Cell::Empty; 3]]);
        assert_eq!(classify(&grid, &config), 1);
    }
}
