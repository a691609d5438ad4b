//! Dataset summary counts.

use std::collections::BTreeSet;

use serde::Serialize;

use iir_model::{Field, Record};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    pub total_records: usize,
    pub unique_ingredients: usize,
    pub unique_routes: usize,
    pub unique_dosage_forms: usize,
    /// Keys holding at least one value: known fields first, then extras.
    pub columns: Vec<String>,
}

impl DatasetStats {
    pub fn compute(records: &[Record]) -> Self {
        let mut columns: Vec<String> = Field::ALL
            .into_iter()
            .filter(|&field| records.iter().any(|record| record.get(field).is_some()))
            .map(|field| field.key().to_string())
            .collect();
        let extras: BTreeSet<&str> = records
            .iter()
            .flat_map(|record| record.extra.keys().map(String::as_str))
            .collect();
        columns.extend(extras.into_iter().map(str::to_string));

        Self {
            total_records: records.len(),
            unique_ingredients: distinct(records, Field::IngredientName),
            unique_routes: distinct(records, Field::Route),
            unique_dosage_forms: distinct(records, Field::DosageForm),
            columns,
        }
    }

    /// Replace the derived column list with a known header row.
    #[must_use]
    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = columns;
        self
    }
}

fn distinct(records: &[Record], field: Field) -> usize {
    records
        .iter()
        .filter_map(|record| record.get(field))
        .map(ToString::to_string)
        .collect::<BTreeSet<_>>()
        .len()
}
