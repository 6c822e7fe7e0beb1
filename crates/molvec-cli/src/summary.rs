//! Terminal tables for command results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use molvec_normalization::{Axis, DEFAULT_BATCH_SIZE, NormalizationMethod};

use crate::commands::{DenormalizeReport, NormalizeReport, PadReport};
use crate::config::FileConfig;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

/// Registered normalization methods and their inverses.
pub fn methods_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Method"),
        header_cell("Invertible"),
        header_cell("Default"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Center);
    for method in NormalizationMethod::ALL {
        table.add_row(vec![
            Cell::new(method.as_str()),
            flag_cell(method.is_invertible()),
            flag_cell(method == NormalizationMethod::default()),
        ]);
    }
    table
}

/// Effective configuration after merging the config file with defaults.
pub fn config_table(config: &FileConfig) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Setting"), header_cell("Value")]);
    apply_table_style(&mut table);
    let axis = config.normalize.axis.map_or("global", Axis::as_str);
    let batch_size = if config.normalize.batch_size == DEFAULT_BATCH_SIZE {
        format!("{} (default)", config.normalize.batch_size)
    } else {
        config.normalize.batch_size.to_string()
    };
    table.add_row(vec![
        Cell::new("normalize.method"),
        Cell::new(config.normalize.method),
    ]);
    table.add_row(vec![Cell::new("normalize.axis"), Cell::new(axis)]);
    table.add_row(vec![Cell::new("normalize.batch_size"), Cell::new(batch_size)]);
    table.add_row(vec![
        Cell::new("convert.nprocs"),
        Cell::new(config.convert.nprocs),
    ]);
    table.add_row(vec![
        Cell::new("convert.verbose"),
        Cell::new(config.convert.verbose),
    ]);
    table
}

pub fn normalize_table(report: &NormalizeReport) -> Table {
    let mut table = report_table();
    table.add_row(vec![Cell::new("Vectors"), Cell::new(report.rows)]);
    table.add_row(vec![Cell::new("Method"), Cell::new(report.options.method)]);
    table.add_row(vec![
        Cell::new("Axis"),
        Cell::new(report.options.axis.map_or("global", Axis::as_str)),
    ]);
    table.add_row(vec![Cell::new("Statistic groups"), Cell::new(report.groups)]);
    table.add_row(vec![
        Cell::new("Output"),
        Cell::new(report.output.display()),
    ]);
    table.add_row(vec![
        Cell::new("Parameters"),
        Cell::new(report.params.display()),
    ]);
    table
}

pub fn denormalize_table(report: &DenormalizeReport) -> Table {
    let mut table = report_table();
    table.add_row(vec![Cell::new("Vectors"), Cell::new(report.rows)]);
    table.add_row(vec![Cell::new("Method"), Cell::new(report.method)]);
    table.add_row(vec![
        Cell::new("Output"),
        Cell::new(report.output.display()),
    ]);
    table
}

pub fn pad_table(report: &PadReport) -> Table {
    let mut table = report_table();
    table.add_row(vec![Cell::new("Vectors"), Cell::new(report.rows)]);
    table.add_row(vec![Cell::new("Padded length"), Cell::new(report.width)]);
    table.add_row(vec![Cell::new("Padded rows"), count_cell(report.padded_rows)]);
    table.add_row(vec![
        Cell::new("Output"),
        Cell::new(report.output.display()),
    ]);
    table
}

fn report_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Item"), header_cell("Value")]);
    apply_table_style(&mut table);
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn flag_cell(value: bool) -> Cell {
    if value {
        Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        Cell::new("-").add_attribute(Attribute::Dim)
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count).add_attribute(Attribute::Dim)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
