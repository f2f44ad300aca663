use crate::knife::KnifeContactChances;
use crate::ConfigError;
use body_core::LimbType;
use serde::Deserialize;
use std::path::Path;

/// TOML configuration for a hit table file
#[derive(Debug, Deserialize)]
pub struct TableFileConfig {
    pub table: TableConfig,
    /// Weighted entries, walked in file order
    #[serde(default)]
    pub entries: Vec<EntryConfig>,
    /// Knife-to-torso contact weights; mutually exclusive with `entries`
    #[serde(default)]
    pub knife: Option<KnifeContactChances>,
}

impl TableFileConfig {
    /// Read and parse one table file; errors carry the file path
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
            error,
            path: Some(path.to_path_buf()),
        })?;
        toml::from_str(&content).map_err(|error| ConfigError::Parse {
            error,
            path: path.to_path_buf(),
        })
    }
}

/// Configuration for the table itself
#[derive(Debug, Deserialize)]
pub struct TableConfig {
    pub id: String,
}

/// A single limb and its chance of being struck
#[derive(Debug, Deserialize)]
pub struct EntryConfig {
    pub limb: LimbType,
    #[serde(default)]
    pub chance: f64,
}
