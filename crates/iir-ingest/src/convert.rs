//! CSV to dataset-document conversion.
//!
//! Spreadsheet exports arrive as CSV. Each row becomes one JSON object keyed
//! by the header row. Empty cells and non-finite markers (`NaN`, `inf`, ...)
//! become `null`. A column is emitted as numbers only when every non-null
//! cell in it parses as a finite number, so identifier columns such as UNII
//! (`1E5...`-like codes) stay text.

use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use serde::Serialize;
use serde_json::{Map, Number, Value};
use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// Result of converting one CSV file.
#[derive(Debug, Clone)]
pub struct CsvConversion {
    /// Normalized header names, in file order.
    pub columns: Vec<String>,
    /// Columns emitted as numbers.
    pub numeric_columns: Vec<String>,
    /// One JSON object per data row.
    pub records: Vec<Map<String, Value>>,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_null_marker(cell: &str) -> bool {
    cell.is_empty()
        || matches!(
            cell.to_ascii_lowercase().as_str(),
            "nan" | "inf" | "-inf" | "+inf" | "infinity" | "-infinity" | "+infinity" | "null"
        )
}

fn parse_finite(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn numeric_value(cell: &str) -> Option<Value> {
    if let Ok(value) = cell.parse::<i64>() {
        return Some(Value::Number(value.into()));
    }
    parse_finite(cell)
        .and_then(Number::from_f64)
        .map(Value::Number)
}

/// Convert a CSV export into dataset records.
pub fn convert_csv(path: &Path) -> Result<CsvConversion> {
    let csv_error = |source: csv::Error| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;
    let columns: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(normalize_header)
        .collect();
    if columns.iter().all(String::is_empty) {
        return Err(IngestError::MissingHeader {
            path: path.to_path_buf(),
        });
    }

    let mut rows: Vec<Vec<Option<String>>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let row = (0..columns.len())
            .map(|idx| {
                let cell = record.get(idx).unwrap_or("").trim();
                (!is_null_marker(cell)).then(|| cell.to_string())
            })
            .collect();
        rows.push(row);
    }

    let numeric: Vec<bool> = (0..columns.len())
        .map(|idx| {
            let mut cells = rows.iter().filter_map(|row| row[idx].as_deref()).peekable();
            cells.peek().is_some() && cells.all(|cell| parse_finite(cell).is_some())
        })
        .collect();

    let records = rows
        .into_iter()
        .map(|row| {
            let mut object = Map::new();
            for (idx, cell) in row.into_iter().enumerate() {
                let name = &columns[idx];
                if name.is_empty() {
                    continue;
                }
                let value = match cell {
                    None => Value::Null,
                    Some(cell) if numeric[idx] => {
                        numeric_value(&cell).unwrap_or(Value::String(cell))
                    }
                    Some(cell) => Value::String(cell),
                };
                object.insert(name.clone(), value);
            }
            object
        })
        .collect::<Vec<_>>();

    let numeric_columns = columns
        .iter()
        .zip(&numeric)
        .filter(|(_, is_numeric)| **is_numeric)
        .map(|(name, _)| name.clone())
        .collect::<Vec<_>>();

    info!(
        path = %path.display(),
        rows = records.len(),
        columns = columns.len(),
        numeric_columns = numeric_columns.len(),
        "csv converted"
    );
    Ok(CsvConversion {
        columns,
        numeric_columns,
        records,
    })
}

/// Write a value as pretty-printed UTF-8 JSON, creating parent directories.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| IngestError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(value).map_err(|e| IngestError::json(path, e))?;
    fs::write(path, json).map_err(|source| IngestError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "json written");
    Ok(())
}
