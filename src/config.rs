use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable naming the directory that holds the shape files
pub const STORE_DIR_ENV: &str = "SHAPE_STORE_DIR";

/// Where `<Kind>.json` and `<Kind>.csv` live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub directory: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

impl StoreConfig {
    pub fn with_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Read the directory from `SHAPE_STORE_DIR`, falling back to the
    /// current directory when unset or empty
    pub fn from_env() -> Self {
        match std::env::var_os(STORE_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Self::with_directory(dir),
            _ => Self::default(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}
