//! Session-wide read-only dataset.

use crate::mapping::FieldMapping;
use crate::record::Record;

/// The loaded record list and translation table.
///
/// Built once at startup and never mutated; the query engine only reads
/// through the accessors.
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    records: Vec<Record>,
    mapping: FieldMapping,
}

impl DatasetStore {
    pub fn new(records: Vec<Record>, mapping: FieldMapping) -> Self {
        Self { records, mapping }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn field_mapping(&self) -> &FieldMapping {
        &self.mapping
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
