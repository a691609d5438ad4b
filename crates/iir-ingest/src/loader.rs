//! Session loading: the record document and the translation table.
//!
//! The two documents are read concurrently and joined before the store is
//! built. A missing or malformed record document is fatal; a missing or
//! malformed translation table only costs the column labels, so it is logged
//! and replaced with an empty table.

use std::path::Path;
use std::thread;
use std::time::Instant;

use serde::de::DeserializeOwned;
use tracing::{debug, info, info_span, warn};

use iir_model::{DatasetStore, FieldMapping, Record};

use crate::error::{IngestError, Result};
use crate::paths::DataPaths;
use crate::sanitize::repair_non_finite;

/// Read and parse the record document.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let records: Vec<Record> = read_json_document(path)?;
    debug!(path = %path.display(), count = records.len(), "records parsed");
    Ok(records)
}

/// Read and parse the field translation table.
pub fn load_field_mapping(path: &Path) -> Result<FieldMapping> {
    let mapping: FieldMapping = read_json_document(path)?;
    debug!(path = %path.display(), entries = mapping.len(), "field mapping parsed");
    Ok(mapping)
}

/// Build the session store from both documents.
///
/// # Errors
///
/// Returns [`IngestError::RecordsUnavailable`] when the record document cannot
/// be read or parsed. Translation-table failures never surface as errors.
pub fn load_dataset(paths: &DataPaths) -> Result<DatasetStore> {
    let span = info_span!(
        "load_dataset",
        records = %paths.records.display(),
        mapping = %paths.mapping.display()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let (records, mapping) = thread::scope(|scope| {
        let mapping = scope.spawn(|| load_field_mapping(&paths.mapping));
        let records = scope.spawn(|| load_records(&paths.records));
        (
            records.join().unwrap_or(Err(IngestError::LoaderPanicked {
                task: "record",
            })),
            mapping.join().unwrap_or(Err(IngestError::LoaderPanicked {
                task: "field mapping",
            })),
        )
    });

    let records = records.map_err(|source| IngestError::RecordsUnavailable {
        path: paths.records.clone(),
        source: Box::new(source),
    })?;

    let mapping = match mapping {
        Ok(mapping) => mapping,
        Err(error) => {
            warn!(%error, "field mapping unavailable, continuing without translations");
            FieldMapping::new()
        }
    };

    info!(
        record_count = records.len(),
        mapping_entries = mapping.len(),
        duration_ms = start.elapsed().as_millis(),
        "dataset loaded"
    );
    Ok(DatasetStore::new(records, mapping))
}

fn read_json_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path).map_err(|e| IngestError::read(path, e))?;
    let contents = contents.trim_start_matches('\u{feff}');
    let repaired = repair_non_finite(contents);
    serde_json::from_str(&repaired).map_err(|e| IngestError::json(path, e))
}
