//! Dataset location resolution.

use std::path::{Path, PathBuf};

/// Environment variable naming the directory that holds the dataset documents.
pub const DATA_DIR_ENV_VAR: &str = "IIR_DATA_DIR";

/// Directory used when neither a flag nor the environment names one.
pub const DEFAULT_DATA_DIR: &str = "web_app";

pub const RECORDS_FILE: &str = "data.json";
pub const MAPPING_FILE: &str = "field_mapping.json";
pub const STATS_FILE: &str = "stats.json";

/// Get the data directory.
///
/// Resolution order:
/// 1. `IIR_DATA_DIR` environment variable
/// 2. `web_app/` relative to the working directory
pub fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV_VAR)
        && !dir.trim().is_empty()
    {
        return PathBuf::from(dir);
    }
    PathBuf::from(DEFAULT_DATA_DIR)
}

/// Locations of the two documents a session is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub records: PathBuf,
    pub mapping: PathBuf,
}

impl DataPaths {
    /// Both documents under one directory, with their standard file names.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            records: dir.join(RECORDS_FILE),
            mapping: dir.join(MAPPING_FILE),
        }
    }

    /// Explicit file paths win, then `data_dir`, then [`default_data_dir`].
    pub fn resolve(
        data_dir: Option<PathBuf>,
        records: Option<PathBuf>,
        mapping: Option<PathBuf>,
    ) -> Self {
        let defaults = Self::in_dir(data_dir.unwrap_or_else(default_data_dir));
        Self {
            records: records.unwrap_or(defaults.records),
            mapping: mapping.unwrap_or(defaults.mapping),
        }
    }
}
