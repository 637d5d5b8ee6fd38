//! Heuristic thresholds for header detection and column profiling.
//!
//! Every threshold is a named constant and is carried in [`HeuristicConfig`],
//! which deserializes from a partial JSON document (missing fields fall back
//! to the defaults below).

use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

/// Rows scanned from the top of the grid when looking for the first data row.
pub const CLASSIFY_SCAN_LIMIT: usize = 25;
/// Rows narrower than `max_cols * MIN_WIDTH_RATIO` are title fragments.
pub const MIN_WIDTH_RATIO: f64 = 0.5;
/// Share of filled cells that must be numeric for the dense-integer rule.
pub const NUMERIC_MAJORITY_RATIO: f64 = 0.5;
/// Share of filled cells that must be year-like to mark a year header row.
pub const YEAR_MAJORITY_RATIO: f64 = 0.5;
/// Exclusive lower bound for year-like integers.
pub const YEAR_LOWER_BOUND: f64 = 1900.0;
/// Exclusive upper bound for year-like integers.
pub const YEAR_UPPER_BOUND: f64 = 2100.0;
/// The dense-integer rule needs strictly more filled cells than this.
pub const MIN_DENSE_FILLED: usize = 2;
/// Substrings that mark a row as an explicit header, whatever its content.
pub const HEADER_KEYWORDS: [&str; 5] = ["provinsi", "kabupaten", "wilayah", "tabel", "keterangan"];
/// Maximum number of stacked header rows merged into one header.
pub const MAX_HEADER_ROWS: usize = 4;
/// Joiner between the parts of a merged header.
pub const HEADER_SEPARATOR: &str = " - ";
/// Prefix of generated names for columns without any header text.
pub const PLACEHOLDER_PREFIX: &str = "Column";
/// Data rows sampled by the column profiler.
pub const PROFILE_SAMPLE_ROWS: usize = 50;
/// Maximum distinct values for a column to count as categorical.
pub const CATEGORICAL_THRESHOLD: usize = 20;
/// Distinct values listed in a categorical summary.
pub const CATEGORICAL_SAMPLE_COUNT: usize = 5;
/// Raw values listed in a free-text summary.
pub const TEXT_SAMPLE_COUNT: usize = 3;
/// Raw rows kept in a sheet profile preview.
pub const RAW_PREVIEW_ROWS: usize = 10;

/// Tunable heuristic settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeuristicConfig {
    pub scan_limit: usize,
    pub min_width_ratio: f64,
    pub numeric_majority_ratio: f64,
    pub year_majority_ratio: f64,
    pub year_lower_bound: f64,
    pub year_upper_bound: f64,
    pub min_dense_filled: usize,
    /// Matched case-insensitively against the lower-cased row text.
    pub header_keywords: Vec<String>,
    pub max_header_rows: usize,
    pub header_separator: String,
    pub placeholder_prefix: String,
    pub profile_sample_rows: usize,
    pub categorical_threshold: usize,
    pub categorical_sample_count: usize,
    pub text_sample_count: usize,
    pub raw_preview_rows: usize,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            scan_limit: CLASSIFY_SCAN_LIMIT,
            min_width_ratio: MIN_WIDTH_RATIO,
            numeric_majority_ratio: NUMERIC_MAJORITY_RATIO,
            year_majority_ratio: YEAR_MAJORITY_RATIO,
            year_lower_bound: YEAR_LOWER_BOUND,
            year_upper_bound: YEAR_UPPER_BOUND,
            min_dense_filled: MIN_DENSE_FILLED,
            header_keywords: HEADER_KEYWORDS.iter().map(|kw| (*kw).to_string()).collect(),
            max_header_rows: MAX_HEADER_ROWS,
            header_separator: HEADER_SEPARATOR.to_string(),
            placeholder_prefix: PLACEHOLDER_PREFIX.to_string(),
            profile_sample_rows: PROFILE_SAMPLE_ROWS,
            categorical_threshold: CATEGORICAL_THRESHOLD,
            categorical_sample_count: CATEGORICAL_SAMPLE_COUNT,
            text_sample_count: TEXT_SAMPLE_COUNT,
            raw_preview_rows: RAW_PREVIEW_ROWS,
        }
    }
}

impl HeuristicConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix used for placeholder column names.
    #[must_use]
    pub fn with_placeholder_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.placeholder_prefix = prefix.into();
        self
    }

    /// Set the number of data rows sampled for profiling.
    #[must_use]
    pub fn with_profile_sample_rows(mut self, rows: usize) -> Self {
        self.profile_sample_rows = rows;
        self
    }

    /// Set the number of rows scanned by the classifier.
    #[must_use]
    pub fn with_scan_limit(mut self, rows: usize) -> Self {
        self.scan_limit = rows;
        self
    }

    /// Replace the explicit-header keywords.
    #[must_use]
    pub fn with_header_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Generated name for the zero-based column `index`.
    pub fn placeholder(&self, index: usize) -> String {
        format!("{} {}", self.placeholder_prefix, index + 1)
    }

    /// Lower-cased keywords, ready for matching.
    pub fn normalized_keywords(&self) -> Vec<String> {
        self.header_keywords
            .iter()
            .map(|kw| kw.to_lowercase())
            .collect()
    }

    /// Checks that every setting is usable.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        check_ratio("min_width_ratio", self.min_width_ratio)?;
        check_ratio("numeric_majority_ratio", self.numeric_majority_ratio)?;
        check_ratio("year_majority_ratio", self.year_majority_ratio)?;
        check_positive("scan_limit", self.scan_limit)?;
        check_positive("max_header_rows", self.max_header_rows)?;
        check_positive("profile_sample_rows", self.profile_sample_rows)?;
        check_positive("categorical_sample_count", self.categorical_sample_count)?;
        check_positive("text_sample_count", self.text_sample_count)?;
        if self.year_lower_bound >= self.year_upper_bound {
            return Err(IngestError::InvalidConfig {
                field: "year_lower_bound",
                reason: format!(
                    "must be below year_upper_bound ({} >= {})",
                    self.year_lower_bound, self.year_upper_bound
                ),
            });
        }
        if self.header_separator.is_empty() {
            return Err(IngestError::InvalidConfig {
                field: "header_separator",
                reason: "must not be empty".to_string(),
            });
        }
        if self.header_keywords.iter().any(|kw| kw.trim().is_empty()) {
            // An empty keyword is a substring of every row.
            return Err(IngestError::InvalidConfig {
                field: "header_keywords",
                reason: "keywords must not be blank".to_string(),
            });
        }
        Ok(())
    }
}

fn check_ratio(field: &'static str, value: f64) -> Result<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(IngestError::InvalidConfig {
            field,
            reason: format!("must be within (0, 1], got {value}"),
        })
    }
}

fn check_positive(field: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        Err(IngestError::InvalidConfig {
            field,
            reason: "must be greater than 0".to_string(),
        })
    } else {
        Ok(())
    }
}
