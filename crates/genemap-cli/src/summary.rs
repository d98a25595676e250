use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use genemap_model::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    println!("Source: {}", summary.source.display());
    println!("Output: {}", summary.output.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Family"),
        header_cell("Rows"),
        header_cell("Found"),
        header_cell("Not found"),
    ]);
    apply_table_style(&mut table);
    for column in 1..4 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for (family, counts) in &summary.families {
        table.add_row(vec![
            Cell::new(family.label()).fg(Color::Green),
            Cell::new(counts.total()),
            Cell::new(counts.found),
            count_cell(counts.not_found, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.rows_written()).add_attribute(Attribute::Bold),
        Cell::new(summary.total_found()).add_attribute(Attribute::Bold),
        count_cell(summary.total_not_found(), Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!(
        "{} lines read, {} without a recognised gene id",
        summary.lines_read, summary.skipped
    );
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    let cell = Cell::new(count);
    if count > 0 { cell.fg(color) } else { cell }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
