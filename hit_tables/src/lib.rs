mod config;
mod knife;
mod registry;
mod selector;
mod table;

pub use config::{EntryConfig, TableConfig, TableFileConfig};
pub use knife::{select_knife_torso_contact, KnifeContactChances};
pub use registry::HitTableRegistry;
pub use selector::HitSelector;
pub use table::{select_by_probability_table, HitTable, WeightedLimb};

use std::path::PathBuf;
use thiserror::Error;

/// Error loading hit table configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Parse error in '{path}': {error}")]
    Parse {
        error: toml::de::Error,
        path: PathBuf,
    },
    #[error("Validation error in '{path}': {message}")]
    Validation { message: String, path: PathBuf },
}

/// Error building or looking up a hit table
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Unknown table: {0}")]
    UnknownTable(String),
    #[error("Invalid table '{id}': {reason}")]
    InvalidTable { id: String, reason: String },
}
