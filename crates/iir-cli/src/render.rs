//! Terminal rendering sink.
//!
//! Receives page views already computed by the session and prints them as
//! comfy-table tables, plain text lines, or JSON. Cells with an explanation
//! get a `*` marker and the explanation is listed under the table, since a
//! terminal has no hover.

use std::io::{self, Write};

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use iir_model::{Column, FieldMapping};
use iir_query::{DatasetStats, DisplayCell, DisplayRow, PageView, Vocabularies, VocabularyEntry};

const TOOLTIP_MARKER: &str = " *";

/// Cells of `row` restricted to `columns` (all cells when `columns` is empty).
fn selected_cells<'a>(row: &'a DisplayRow, columns: &[Column]) -> Vec<&'a DisplayCell> {
    if columns.is_empty() {
        return row.cells.iter().collect();
    }
    columns.iter().filter_map(|&column| row.cell(column)).collect()
}

/// Results table for one page, or `None` when the page is empty.
pub fn page_table(view: &PageView, columns: &[Column]) -> Option<Table> {
    let first = view.rows.first()?;
    let mut table = Table::new();
    let mut header = vec![header_cell("#")];
    header.extend(
        selected_cells(first, columns)
            .into_iter()
            .map(|cell| header_cell(&cell.label)),
    );
    table.set_header(header);
    apply_results_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);

    for (offset, row) in view.rows.iter().enumerate() {
        let mut cells = vec![dim_cell(view.first_item + offset)];
        cells.extend(selected_cells(row, columns).into_iter().map(value_cell));
        table.add_row(cells);
    }
    Some(table)
}

fn value_cell(cell: &DisplayCell) -> Cell {
    let mut text = cell.value.clone();
    if cell.tooltip.is_some() {
        text.push_str(TOOLTIP_MARKER);
    }
    if let Some(annotation) = &cell.annotation {
        text.push('\n');
        text.push_str(annotation);
    }
    match cell.column {
        Column::IngredientName => Cell::new(text).add_attribute(Attribute::Bold),
        _ => Cell::new(text),
    }
}

/// Distinct `code: explanation` notes for cells that carry a tooltip.
pub fn tooltip_notes(view: &PageView, columns: &[Column]) -> Vec<String> {
    let mut notes: Vec<String> = Vec::new();
    for row in &view.rows {
        for cell in selected_cells(row, columns) {
            let Some(tooltip) = &cell.tooltip else {
                continue;
            };
            let code = cell.annotation.as_deref().unwrap_or(&cell.value);
            let note = format!("{code}: {tooltip}");
            if !notes.contains(&note) {
                notes.push(note);
            }
        }
    }
    notes
}

/// Navigation hint reflecting previous/next availability.
pub fn navigation_hint(view: &PageView) -> String {
    let previous = if view.has_previous { "[p] 上一页" } else { "上一页" };
    let next = if view.has_next { "[n] 下一页" } else { "下一页" };
    format!("{previous} | {next}")
}

/// Page as plain text: summary lines, then one ` | `-separated line per row.
pub fn render_plain(view: &PageView, columns: &[Column]) -> String {
    let mut lines = vec![view.results_summary(), view.page_summary()];
    for row in &view.rows {
        let cells: Vec<String> = selected_cells(row, columns)
            .into_iter()
            .map(|cell| match &cell.annotation {
                Some(annotation) => format!("{} ({})", cell.value, annotation),
                None => cell.value.clone(),
            })
            .collect();
        lines.push(cells.join(" | "));
    }
    lines.join("\n")
}

/// Write a page in the table layout: summaries, table, then explanation notes.
pub fn write_page<W: Write>(out: &mut W, view: &PageView, columns: &[Column]) -> io::Result<()> {
    writeln!(out, "{}", view.results_summary())?;
    writeln!(out, "{}", view.page_summary())?;
    let Some(table) = page_table(view, columns) else {
        return Ok(());
    };
    writeln!(out, "{table}")?;
    let notes = tooltip_notes(view, columns);
    if !notes.is_empty() {
        writeln!(out, "*")?;
        for note in notes {
            writeln!(out, "  {note}")?;
        }
    }
    Ok(())
}

/// Print a page in the table layout.
pub fn print_page_table(view: &PageView, columns: &[Column]) -> io::Result<()> {
    write_page(&mut io::stdout().lock(), view, columns)
}

pub fn vocabulary_table(title: &str, entries: &[VocabularyEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(title), header_cell("Code"), header_cell("标签")]);
    apply_table_style(&mut table);
    for entry in entries {
        let label = if entry.label.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(&entry.label)
        };
        table.add_row(vec![
            Cell::new(entry.to_string()),
            Cell::new(&entry.code).fg(Color::Blue),
            label,
        ]);
    }
    table
}

/// One vocabulary table per filterable column, titled from the translation table.
pub fn vocabulary_tables(
    vocabularies: &Vocabularies,
    mapping: &FieldMapping,
    columns: &[Column],
) -> Vec<Table> {
    columns
        .iter()
        .filter_map(|&column| {
            let entries = vocabularies.for_column(column)?;
            Some(vocabulary_table(mapping.column_label(column), entries))
        })
        .collect()
}

pub fn stats_table(stats: &DatasetStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("统计"), header_cell("值")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let rows = [
        ("总记录数", stats.total_records),
        ("唯一成分数", stats.unique_ingredients),
        ("唯一给药途径数", stats.unique_routes),
        ("唯一剂型数", stats.unique_dosage_forms),
        ("字段数", stats.columns.len()),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), count_cell(value)]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_results_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(180);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
