//! Row projection: one record to one display row.

use serde::Serialize;

use iir_model::{Column, FieldMapping, Record};

/// One cell of a display row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayCell {
    pub column: Column,
    /// Column header from the translation table.
    pub label: String,
    /// Main display text. Empty when the record has no value.
    pub value: String,
    /// English value kept under a Chinese display value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
    /// Explanation shown on hover for coded columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

impl DisplayCell {
    /// Value and annotation on separate lines.
    pub fn text(&self) -> String {
        match &self.annotation {
            Some(annotation) => format!("{}\n{}", self.value, annotation),
            None => self.value.clone(),
        }
    }
}

/// Presentation-ready projection of one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub cells: Vec<DisplayCell>,
}

impl DisplayRow {
    pub fn cell(&self, column: Column) -> Option<&DisplayCell> {
        self.cells.iter().find(|cell| cell.column == column)
    }
}

/// Project `record` into every column, in table order.
pub fn project(record: &Record, mapping: &FieldMapping) -> DisplayRow {
    project_columns(record, mapping, &Column::ALL)
}

/// Project `record` into the given columns only.
pub fn project_columns(record: &Record, mapping: &FieldMapping, columns: &[Column]) -> DisplayRow {
    DisplayRow {
        cells: columns
            .iter()
            .map(|&column| project_cell(record, mapping, column))
            .collect(),
    }
}

fn project_cell(record: &Record, mapping: &FieldMapping, column: Column) -> DisplayCell {
    let primary = record.text(column.field());
    let translated = column
        .translation_field()
        .map(|field| record.text(field))
        .filter(|text| !text.is_empty());

    // Chinese first when present; the English value moves to the annotation.
    let (value, annotation) = match translated {
        Some(chinese) => {
            let annotation = (!primary.is_empty()).then_some(primary);
            (chinese, annotation)
        }
        None => (primary, None),
    };

    let tooltip = column
        .explanation_field()
        .map(|field| record.text(field))
        .filter(|text| !text.is_empty());

    DisplayCell {
        column,
        label: mapping.column_label(column).to_string(),
        value,
        annotation,
        tooltip,
    }
}
