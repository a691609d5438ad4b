//! Loading boundary for the ingredient browser.
//!
//! Everything that touches the filesystem lives here: resolving where the
//! dataset documents are, reading and repairing them, and converting CSV
//! exports into the JSON documents the browser consumes.

pub mod convert;
pub mod error;
pub mod loader;
pub mod paths;
pub mod sanitize;

pub use convert::{CsvConversion, convert_csv, write_json};
pub use error::{IngestError, Result};
pub use loader::{load_dataset, load_field_mapping, load_records};
pub use paths::{
    DATA_DIR_ENV_VAR, DataPaths, MAPPING_FILE, RECORDS_FILE, STATS_FILE, default_data_dir,
};
pub use sanitize::repair_non_finite;
