//! Configuration loading: tuning constants, body layouts, clothing mitigation

mod body;
mod clothing;
mod constants;

pub use body::{BodyConfig, LimbConfig};
pub use clothing::{ClothingConfig, MitigationEntry};
pub use constants::{
    constants, constants_initialized, ensure_constants_initialized, init_constants,
    init_constants_default, MitigationConstants, PainConstants, SeverityConstants,
    VitalityConstants, VulnerabilityConstants,
};

use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;

/// Error loading vitality configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Read and deserialize a TOML file
pub(crate) fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_toml(&content)
}

/// Deserialize a TOML string
pub(crate) fn parse_toml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn shipped(relative: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../config")
            .join(relative)
    }

    #[test]
    fn test_shipped_constants_match_defaults() {
        let loaded = VitalityConstants::load_from_path(&shipped("vitality.toml")).unwrap();
        assert_eq!(loaded, VitalityConstants::default());
    }

    #[test]
    fn test_shipped_humanoid_matches_builtin() {
        let loaded = BodyConfig::load_from_path(&shipped("body/humanoid.toml")).unwrap();
        let mut expected = BodyConfig::humanoid().limbs;
        let mut limbs = loaded.limbs.clone();
        expected.sort_by_key(|l| l.limb);
        limbs.sort_by_key(|l| l.limb);
        assert_eq!(limbs, expected);
        assert!((loaded.torso_max_health - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shipped_partial_body_loads() {
        let loaded = BodyConfig::load_from_path(&shipped("body/crawler.toml")).unwrap();
        assert_eq!(loaded.limbs.len(), 3);
    }

    #[test]
    fn test_shipped_clothing_loads() {
        let loaded = ClothingConfig::load_from_path(&shipped("clothing.toml")).unwrap();
        assert!(!loaded.mitigation.is_empty());
    }

    #[test]
    fn test_parse_error_surfaces() {
        let result: Result<VitalityConstants, _> = parse_toml("[pain\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
