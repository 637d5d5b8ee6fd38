//! Column type inference and display summaries.

use bps_model::{Cell, ColumnProfile, ColumnType, Row, format_number};

use crate::config::HeuristicConfig;
use crate::merge::DataBlock;
use crate::numeric::coerce_strict;
use crate::unique::OrderedUnique;

/// Summary used when a column has no values in the sample.
pub const NO_VALUES: &str = "-";

/// Profiles column `column_index` over `sample_rows`.
///
/// - no non-blank values: `text`, summary `"-"`
/// - every value numeric: `numeric`, summary `"min - max"`
/// - at most `categorical_threshold` distinct values: `categorical`, first
///   distinct values in first-seen order
/// - otherwise `text`, first raw values
pub fn profile_column(
    column_index: usize,
    name: &str,
    sample_rows: &[Row],
    config: &HeuristicConfig,
) -> ColumnProfile {
    let values: Vec<&Cell> = sample_rows
        .iter()
        .filter_map(|row| row.get(column_index))
        .filter(|cell| !cell.is_blank())
        .collect();

    let (column_type, sample_values) = summarize(&values, config);
    ColumnProfile {
        name: name.to_string(),
        column_type,
        sample_values,
    }
}

fn summarize(values: &[&Cell], config: &HeuristicConfig) -> (ColumnType, String) {
    if values.is_empty() {
        return (ColumnType::Text, NO_VALUES.to_string());
    }

    if let Some((min, max)) = numeric_range(values) {
        return (
            ColumnType::Numeric,
            format!("{} - {}", format_number(min), format_number(max)),
        );
    }

    let distinct: OrderedUnique<String> = values.iter().map(|cell| cell.display_trimmed()).collect();
    if distinct.len() <= config.categorical_threshold {
        let shown = distinct
            .as_slice()
            .iter()
            .take(config.categorical_sample_count)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        return (ColumnType::Categorical, shown);
    }

    let shown = values
        .iter()
        .take(config.text_sample_count)
        .map(|cell| cell.display())
        .collect::<Vec<_>>()
        .join(", ");
    (ColumnType::Text, shown)
}

/// Min and max when every value coerces to a finite number.
fn numeric_range(values: &[&Cell]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for cell in values {
        let value = coerce_strict(cell)?;
        min = min.min(value);
        max = max.max(value);
    }
    Some((min, max))
}

/// Profiles every header column over the first `profile_sample_rows` data rows.
pub fn profile_columns(
    headers: &[String],
    data: &DataBlock<'_>,
    config: &HeuristicConfig,
) -> Vec<ColumnProfile> {
    let sample = data.head(config.profile_sample_rows);
    headers
        .iter()
        .enumerate()
        .map(|(index, name)| profile_column(index, name, sample.rows(), config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(values: Vec<Cell>) -> Vec<Row> {
        values.into_iter().map(|cell| vec![cell]).collect()
    }

    #[test]
    fn test_numeric_range() {
        let config = HeuristicConfig::default();
        let rows = column(vec![Cell::from(10), Cell::from("20"), Cell::from(30.5)]);
        let profile = profile_column(0, "Luas", &rows, &config);
        assert_eq!(profile.column_type, ColumnType::Numeric);
        assert_eq!(profile.sample_values, "10 - 30.5");
    }

    #[test]
    fn test_extreme_magnitudes_use_exponent_form() {
        let config = HeuristicConfig::default();
        let rows = column(vec![Cell::from(1e21), Cell::from("1e-7")]);
        let profile = profile_column(0, "Rasio", &rows, &config);
        assert_eq!(profile.column_type, ColumnType::Numeric);
        assert_eq!(profile.sample_values, "1e-7 - 1e+21");
    }

    #[test]
    fn test_negative_numbers() {
        let config = HeuristicConfig::default();
        let rows = column(vec![Cell::from("-2.5"), Cell::from(" 4 ")]);
        let profile = profile_column(0, "Delta", &rows, &config);
        assert_eq!(profile.sample_values, "-2.5 - 4");
    }

    #[test]
    fn test_blank_and_missing_cells_ignored() {
        let config = HeuristicConfig::default();
        let rows = vec![
            vec![Cell::from("a"), Cell::from(1)],
            vec![Cell::from("b")],
            vec![Cell::from("c"), Cell::from("  ")],
            vec![Cell::from("d"), Cell::Empty],
            vec![Cell::from("e"), Cell::from(3)],
        ];
        let profile = profile_column(1, "Value", &rows, &config);
        assert_eq!(profile.column_type, ColumnType::Numeric);
        assert_eq!(profile.sample_values, "1 - 3");
    }

    #[test]
    fn test_empty_column() {
        let config = HeuristicConfig::default();
        let rows = column(vec![Cell::Empty, Cell::from(" ")]);
        let profile = profile_column(0, "Column 4", &rows, &config);
        assert_eq!(profile.column_type, ColumnType::Text);
        assert_eq!(profile.sample_values, "-");
    }

    #[test]
    fn test_categorical_first_seen_order() {
        let config = HeuristicConfig::default();
        let values = ["L", "P", "L", " P ", "X", "Y", "Z", "W"];
        let rows = column(values.iter().map(|v| Cell::from(*v)).collect());
        let profile = profile_column(0, "Gender", &rows, &config);
        assert_eq!(profile.column_type, ColumnType::Categorical);
        assert_eq!(profile.sample_values, "L, P, X, Y, Z");
    }

    #[test]
    fn test_mixed_numbers_and_text_is_categorical() {
        let config = HeuristicConfig::default();
        let rows = column(vec![Cell::from(1), Cell::from("n/a"), Cell::from(2)]);
        let profile = profile_column(0, "Score", &rows, &config);
        assert_eq!(profile.column_type, ColumnType::Categorical);
        assert_eq!(profile.sample_values, "1, n/a, 2");
    }

    #[test]
    fn test_threshold_boundary() {
        let config = HeuristicConfig::default();
        let twenty: Vec<Cell> = (0..20).map(|i| Cell::from(format!("v{i}"))).collect();
        let profile = profile_column(0, "Code", &column(twenty), &config);
        assert_eq!(profile.column_type, ColumnType::Categorical);

        let twenty_one: Vec<Cell> = (0..21).map(|i| Cell::from(format!("v{i}"))).collect();
        let profile = profile_column(0, "Code", &column(twenty_one), &config);
        assert_eq!(profile.column_type, ColumnType::Text);
        assert_eq!(profile.sample_values, "v0, v1, v2");
    }

    #[test]
    fn test_text_sample_is_untrimmed() {
        let config = HeuristicConfig::default();
        let mut values: Vec<Cell> = vec![Cell::from(" padded ")];
        values.extend((0..24).map(|i| Cell::from(format!("name {i}"))));
        let profile = profile_column(0, "Nama", &column(values), &config);
        assert_eq!(profile.column_type, ColumnType::Text);
        assert_eq!(profile.sample_values, " padded , name 0, name 1");
    }

    #[test]
    fn test_profile_columns_uses_sample_cap() {
        let config = HeuristicConfig::default().with_profile_sample_rows(2);
        let rows = column(vec![Cell::from(1), Cell::from(2), Cell::from(99)]);
        let data = DataBlock::new(&rows, 1);
        let profiles = profile_columns(&["N".to_string()], &data, &config);
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].sample_values, "1 - 2");
    }
}
