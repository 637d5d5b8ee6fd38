//! Integration tests for the command layer, using CSV fixtures in `tests/data`.

use std::path::PathBuf;

use bps_cli::cli::HeuristicArgs;
use bps_cli::commands::{clean_file, load_config, profile_files};
use bps_cli::summary::{clean_summary, render_clean, render_profiles};
use bps_ingest::HeuristicConfig;
use bps_model::{Cell, ColumnType};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn heuristic_args(config: Option<&str>) -> HeuristicArgs {
    HeuristicArgs {
        config: config.map(fixture),
        placeholder_prefix: None,
        sample_rows: None,
        delimiter: ',',
    }
}

#[test]
fn test_clean_file_merges_year_header() {
    let cleaned = clean_file(&fixture("penduduk.csv"), b',', &HeuristicConfig::default())
        .expect("clean fixture");
    assert_eq!(
        cleaned.headers,
        vec!["Kecamatan", "Tahun - 2019", "Tahun - 2020", "Tahun - 2021"]
    );
    assert_eq!(cleaned.rows.len(), 3);
    assert_eq!(cleaned.rows[0][0], Cell::from("Andir"));
    assert_eq!(cleaned.rows[0][1], Cell::from(95321));

    insta::assert_snapshot!(clean_summary(&cleaned), @r"
    Original rows: 7
    Skipped rows:  4
    Header rows:   2
    Data rows:     3
    Columns:       4
    ");
}

#[test]
fn test_render_clean_lists_headers_and_preview() {
    let cleaned = clean_file(&fixture("penduduk.csv"), b',', &HeuristicConfig::default())
        .expect("clean fixture");
    let report = render_clean(&cleaned, 2);
    assert!(report.contains("Tahun - 2021"));
    assert!(report.contains("Preview (2 of 3 data rows):"));
    assert!(report.contains("Astanaanyar"));
    assert!(!report.contains("Bojongloa Kaler"));

    let without_preview = render_clean(&cleaned, 0);
    assert!(!without_preview.contains("Preview"));
}

#[test]
fn test_clean_single_row_file_fails() {
    let err = clean_file(&fixture("cover.csv"), b',', &HeuristicConfig::default()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("cover.csv"), "{message}");
    assert!(message.contains("at least 2"), "{message}");
}

#[test]
fn test_missing_file_reports_path() {
    let err = clean_file(&fixture("missing.csv"), b',', &HeuristicConfig::default()).unwrap_err();
    assert!(format!("{err:#}").contains("missing.csv"));
}

#[test]
fn test_profile_files_skips_small_sheets() {
    let paths = [fixture("cover.csv"), fixture("penduduk.csv")];
    let profiles =
        profile_files(&paths, b',', &HeuristicConfig::default()).expect("profile fixtures");
    assert_eq!(profiles.len(), 1);

    let profile = &profiles[0];
    assert_eq!(profile.sheet_name, "penduduk");
    assert_eq!(profile.row_count, 3);
    assert_eq!(profile.raw_preview.len(), 7);
    assert_eq!(profile.columns[0].column_type, ColumnType::Categorical);
    assert_eq!(
        profile.columns[0].sample_values,
        "Andir, Astanaanyar, Bojongloa Kaler"
    );
    assert_eq!(profile.columns[1].column_type, ColumnType::Numeric);
    assert_eq!(profile.columns[1].sample_values, "68213 - 121345");

    let report = render_profiles(&profiles);
    assert!(report.starts_with("Sheet: penduduk (3 data rows, 4 columns)"));
    assert!(report.contains("categorical"));
}

#[test]
fn test_render_profiles_without_sheets() {
    insta::assert_snapshot!(render_profiles(&[]), @"No sheets with enough rows to profile.");
}

#[test]
fn test_config_file_and_overrides() {
    let config = load_config(&heuristic_args(Some("kolom.json"))).expect("load config");
    assert_eq!(config.placeholder_prefix, "Kolom");
    assert_eq!(config.profile_sample_rows, 2);
    assert_eq!(config.scan_limit, HeuristicConfig::default().scan_limit);

    let mut args = heuristic_args(Some("kolom.json"));
    args.placeholder_prefix = Some("Kol".to_string());
    args.sample_rows = Some(5);
    let config = load_config(&args).expect("load config");
    assert_eq!(config.placeholder_prefix, "Kol");
    assert_eq!(config.profile_sample_rows, 5);

    let cleaned = clean_file(
        &fixture("nilai.csv"),
        b',',
        &load_config(&heuristic_args(Some("kolom.json"))).expect("load config"),
    )
    .expect("clean fixture");
    assert_eq!(cleaned.headers, vec!["Nama", "Kolom 2", "Total"]);
}

#[test]
fn test_config_rejects_unknown_fields_and_bad_values() {
    let err = load_config(&heuristic_args(Some("unknown_field.json"))).unwrap_err();
    assert!(format!("{err:#}").contains("unknown field"));

    let mut args = heuristic_args(None);
    args.sample_rows = Some(0);
    let err = load_config(&args).unwrap_err();
    assert!(format!("{err:#}").contains("profile_sample_rows"));
}

#[test]
fn test_profile_sample_rows_limit_sampling() {
    let mut args = heuristic_args(None);
    args.sample_rows = Some(2);
    let config = load_config(&args).expect("load config");
    let profiles = profile_files(&[fixture("nilai.csv")], b',', &config).expect("profile");
    assert_eq!(profiles[0].columns[1].sample_values, "1.5 - 2.5");
    assert_eq!(profiles[0].columns[2].sample_values, "2 - 3");
}
