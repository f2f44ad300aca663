//! Table-driven clothing mitigation

use super::ConfigError;
use crate::damage::ClothingMitigation;
use body_core::{DamageType, LimbType};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Worn-item mitigation values, one entry per (limb, damage type)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClothingConfig {
    #[serde(default)]
    pub mitigation: Vec<MitigationEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MitigationEntry {
    pub limb: LimbType,
    pub damage_type: DamageType,
    /// -1.0 doubles damage, 0.0 is neutral, 1.0 blocks all but the floor
    pub value: f64,
}

impl ClothingConfig {
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let config: ClothingConfig = super::load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        let config: ClothingConfig = super::parse_toml(toml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for entry in &self.mitigation {
            if !entry.value.is_finite() {
                return Err(ConfigError::ValidationError(format!(
                    "mitigation for {} / {} is not a number",
                    entry.limb, entry.damage_type
                )));
            }
            if !seen.insert((entry.limb, entry.damage_type)) {
                return Err(ConfigError::ValidationError(format!(
                    "mitigation for {} / {} listed more than once",
                    entry.limb, entry.damage_type
                )));
            }
        }
        Ok(())
    }

    /// Build the lookup the damage pipeline queries
    pub fn to_provider(&self) -> ClothingMitigation {
        let mut provider = ClothingMitigation::new();
        for entry in &self.mitigation {
            provider.set(entry.limb, entry.damage_type, entry.value);
        }
        provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::damage::MitigationProvider;

    #[test]
    fn test_parse_clothing() {
        let toml = r#"
[[mitigation]]
limb = "torso"
damage_type = "slash"
value = 0.4

[[mitigation]]
limb = "head"
damage_type = "blunt"
value = -0.25
"#;

        let config = ClothingConfig::parse(toml).unwrap();
        let provider = config.to_provider();
        assert!((provider.mitigation(LimbType::Torso, DamageType::Slash) - 0.4).abs() < f64::EPSILON);
        assert!((provider.mitigation(LimbType::Head, DamageType::Blunt) + 0.25).abs() < f64::EPSILON);
        assert!(provider.mitigation(LimbType::Head, DamageType::Stab).abs() < f64::EPSILON);
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        let toml = r#"
[[mitigation]]
limb = "neck"
damage_type = "stab"
value = 4.0
"#;
        let provider = ClothingConfig::parse(toml).unwrap().to_provider();
        assert!((provider.mitigation(LimbType::Neck, DamageType::Stab) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_duplicate_entry_rejected() {
        let toml = r#"
[[mitigation]]
limb = "neck"
damage_type = "stab"
value = 0.1

[[mitigation]]
limb = "neck"
damage_type = "stab"
value = 0.2
"#;
        assert!(matches!(
            ClothingConfig::parse(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
