use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use bps_ingest::{DataBlock, NO_VALUES};
use bps_model::{CleanedTable, ColumnType, SheetProfile};

/// Row counts of a cleaned table, one `label: value` line each.
pub fn clean_summary(table: &CleanedTable) -> String {
    let lines = [
        ("Original rows", table.original_row_count),
        ("Skipped rows", table.skipped_row_count),
        ("Header rows", table.header_row_count),
        ("Data rows", table.data_row_count()),
        ("Columns", table.column_count()),
    ];
    lines
        .iter()
        .map(|(label, value)| format!("{:<14} {value}", format!("{label}:")))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn sheet_heading(profile: &SheetProfile) -> String {
    format!(
        "Sheet: {} ({} data rows, {} columns)",
        profile.sheet_name,
        profile.row_count,
        profile.columns.len()
    )
}

/// Numbered list of the merged headers.
pub fn headers_table(headers: &[String]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Header")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, header) in headers.iter().enumerate() {
        table.add_row(vec![dim_cell(index + 1), Cell::new(header)]);
    }
    table
}

/// The first `count` data rows, padded to the header width.
pub fn preview_table(cleaned: &CleanedTable, count: usize) -> Table {
    let mut table = Table::new();
    table.set_header(cleaned.headers.iter().map(|h| header_cell(h)));
    apply_table_style(&mut table);
    let data = DataBlock::new(&cleaned.rows, cleaned.column_count()).head(count);
    for index in 0..data.len() {
        table.add_row(data.padded_row(index).into_iter().map(|cell| {
            if cell.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(cell.display())
            }
        }));
    }
    table
}

pub fn profile_table(profile: &SheetProfile) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Sample values"),
    ]);
    apply_profile_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for (index, column) in profile.columns.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(&column.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            type_cell(column.column_type),
            sample_cell(&column.sample_values),
        ]);
    }
    table
}

/// Full text report for `bps clean`.
pub fn render_clean(cleaned: &CleanedTable, preview: usize) -> String {
    let mut out = clean_summary(cleaned);
    out.push_str("\n\nHeaders:\n");
    out.push_str(&headers_table(&cleaned.headers).to_string());
    if preview > 0 && !cleaned.rows.is_empty() {
        let shown = preview.min(cleaned.rows.len());
        out.push_str(&format!(
            "\n\nPreview ({shown} of {} data rows):\n",
            cleaned.data_row_count()
        ));
        out.push_str(&preview_table(cleaned, preview).to_string());
    }
    out
}

/// Full text report for `bps profile`.
pub fn render_profiles(profiles: &[SheetProfile]) -> String {
    if profiles.is_empty() {
        return "No sheets with enough rows to profile.".to_string();
    }
    profiles
        .iter()
        .map(|profile| format!("{}\n{}", sheet_heading(profile), profile_table(profile)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_profile_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
            ColumnConstraint::LowerBoundary(Width::Fixed(13)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn type_cell(column_type: ColumnType) -> Cell {
    let color = match column_type {
        ColumnType::Numeric => Color::Green,
        ColumnType::Categorical => Color::Yellow,
        ColumnType::Text => Color::Magenta,
    };
    Cell::new(column_type.as_str()).fg(color)
}

fn sample_cell(values: &str) -> Cell {
    if values == NO_VALUES {
        dim_cell(values)
    } else {
        Cell::new(values)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
