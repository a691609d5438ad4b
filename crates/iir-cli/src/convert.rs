//! Dataset documents written by `iir convert`.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use iir_ingest::{CsvConversion, MAPPING_FILE, RECORDS_FILE, STATS_FILE, write_json};
use iir_model::{FieldMapping, Record};
use iir_query::DatasetStats;

/// Optional documents written next to `data.json`.
#[derive(Debug, Clone, Copy)]
pub struct ConvertOutputs {
    pub mapping: bool,
    pub stats: bool,
}

impl Default for ConvertOutputs {
    fn default() -> Self {
        Self {
            mapping: true,
            stats: true,
        }
    }
}

/// Write the converted records and the selected companion documents into
/// `output_dir`. The returned stats list every CSV header as a column,
/// including headers whose cells are all empty.
pub fn write_documents(
    conversion: &CsvConversion,
    output_dir: &Path,
    outputs: ConvertOutputs,
) -> Result<DatasetStats> {
    write_json(&output_dir.join(RECORDS_FILE), &conversion.records).context("write records")?;

    if outputs.mapping {
        write_json(
            &output_dir.join(MAPPING_FILE),
            &FieldMapping::default_document(),
        )
        .context("write field mapping")?;
    }

    let records: Vec<Record> = serde_json::from_value(Value::Array(
        conversion.records.iter().cloned().map(Value::Object).collect(),
    ))
    .context("read converted records")?;
    let columns = conversion
        .columns
        .iter()
        .filter(|name| !name.is_empty())
        .cloned()
        .collect();
    let stats = DatasetStats::compute(&records).with_columns(columns);

    if outputs.stats {
        write_json(&output_dir.join(STATS_FILE), &stats).context("write stats")?;
    }
    Ok(stats)
}
