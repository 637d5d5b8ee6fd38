use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bps_ingest::{HeuristicConfig, clean_grid, profile_workbook};
use bps_model::{CleanedTable, Grid, SheetProfile};
use tracing::{debug, info, info_span};

use crate::cli::{CleanArgs, HeuristicArgs, ProfileArgs};
use crate::logging::redact_value;
use crate::reader::{delimiter_byte, read_grid_file, sheet_name};
use crate::summary::{render_clean, render_profiles};

/// Builds the heuristic settings from `--config` and the override flags.
///
/// # Errors
///
/// Fails when the config file cannot be read or parsed, or when the
/// resulting settings are invalid.
pub fn load_config(args: &HeuristicArgs) -> Result<HeuristicConfig> {
    let mut config = match &args.config {
        Some(path) => read_config_file(path)?,
        None => HeuristicConfig::default(),
    };
    if let Some(prefix) = &args.placeholder_prefix {
        config = config.with_placeholder_prefix(prefix.as_str());
    }
    if let Some(rows) = args.sample_rows {
        config = config.with_profile_sample_rows(rows);
    }
    config.validate().context("invalid heuristic settings")?;
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<HeuristicConfig> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse config {}", path.display()))
}

/// Cleans the single sheet in `path`.
///
/// # Errors
///
/// Fails when the file cannot be decoded or has fewer than two rows.
pub fn clean_file(path: &Path, delimiter: u8, config: &HeuristicConfig) -> Result<CleanedTable> {
    let grid = read_grid_file(path, delimiter)?;
    let cleaned =
        clean_grid(&grid, config).with_context(|| format!("clean {}", path.display()))?;
    debug!(
        headers = %redact_value(&cleaned.headers.join(" | ")),
        "merged headers"
    );
    Ok(cleaned)
}

/// Profiles every file as one sheet, skipping files with too few rows.
///
/// # Errors
///
/// Fails when a file cannot be decoded or the settings are invalid.
pub fn profile_files<P: AsRef<Path>>(
    paths: &[P],
    delimiter: u8,
    config: &HeuristicConfig,
) -> Result<Vec<SheetProfile>> {
    let mut sheets: Vec<(String, Grid)> = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        sheets.push((sheet_name(path), read_grid_file(path, delimiter)?));
    }
    let profiles = profile_workbook(
        sheets.iter().map(|(name, grid)| (name.as_str(), grid)),
        config,
    )
    .context("profile sheets")?;
    info!(
        files = paths.len(),
        profiled = profiles.len(),
        "profiling complete"
    );
    Ok(profiles)
}

pub fn run_clean(args: &CleanArgs) -> Result<()> {
    let span = info_span!("clean", file = %args.file.display());
    let _guard = span.enter();
    let config = load_config(&args.heuristics)?;
    let delimiter = delimiter_byte(args.heuristics.delimiter)?;
    let cleaned = clean_file(&args.file, delimiter, &config)?;
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&cleaned).context("serialize cleaned table")?
        );
    } else {
        println!("{}", render_clean(&cleaned, args.preview));
    }
    Ok(())
}

pub fn run_profile(args: &ProfileArgs) -> Result<()> {
    let span = info_span!("profile", files = args.files.len());
    let _guard = span.enter();
    let config = load_config(&args.heuristics)?;
    let delimiter = delimiter_byte(args.heuristics.delimiter)?;
    let profiles = profile_files(&args.files, delimiter, &config)?;
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&profiles).context("serialize sheet profiles")?
        );
    } else {
        println!("{}", render_profiles(&profiles));
    }
    Ok(())
}

pub fn run_defaults() -> Result<()> {
    let json = serde_json::to_string_pretty(&HeuristicConfig::default())
        .context("serialize default settings")?;
    println!("{json}");
    Ok(())
}
