use crate::config::TableFileConfig;
use crate::table::HitTable;
use crate::{ConfigError, TableError};
use body_core::LimbType;
use rand::Rng;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Registry of all hit tables, loaded from TOML files
#[derive(Debug, Default)]
pub struct HitTableRegistry {
    tables: HashMap<String, HitTable>,
}

impl HitTableRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `.toml` table under `dir`, descending into subdirectories.
    ///
    /// Files are read in path order, so a duplicate id is always reported
    /// against the same file. A missing directory yields an empty registry.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        for path in table_files(dir)? {
            let table = HitTable::from_config(TableFileConfig::load(&path)?).map_err(|e| {
                ConfigError::Validation {
                    message: e.to_string(),
                    path: path.clone(),
                }
            })?;
            if registry.contains(&table.id) {
                return Err(ConfigError::Validation {
                    message: format!("duplicate table id '{}'", table.id),
                    path,
                });
            }
            registry.insert(table);
        }
        tracing::debug!(
            "Loaded {} hit tables from {}",
            registry.tables.len(),
            dir.display()
        );
        Ok(registry)
    }

    /// Add or replace a table
    pub fn insert(&mut self, table: HitTable) {
        self.tables.insert(table.id.clone(), table);
    }

    /// Get a table by ID
    pub fn get(&self, id: &str) -> Option<&HitTable> {
        self.tables.get(id)
    }

    /// Check if a table exists
    pub fn contains(&self, id: &str) -> bool {
        self.tables.contains_key(id)
    }

    /// List all table IDs
    pub fn table_ids(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(|s| s.as_str())
    }

    /// Roll a table by ID
    pub fn select<R: Rng>(&self, table_id: &str, rng: &mut R) -> Result<LimbType, TableError> {
        let table = self
            .get(table_id)
            .ok_or_else(|| TableError::UnknownTable(table_id.to_string()))?;

        Ok(table.select(rng))
    }
}

/// Every `.toml` file under `dir`, sorted by path
fn table_files(dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(current) = pending.pop() {
        if !current.is_dir() {
            continue;
        }
        let io_error = |error| ConfigError::Io {
            error,
            path: Some(current.clone()),
        };
        for entry in std::fs::read_dir(&current).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "toml") {
                files.push(path);
            }
        }
    }
    files.sort();
    Ok(files)
}
