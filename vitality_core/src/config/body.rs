//! Body layout: which limb slots a character has and how tough they are

use super::ConfigError;
use body_core::LimbType;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Body layout for one kind of character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    #[serde(default = "default_torso_max_health")]
    pub torso_max_health: f64,
    /// One entry per populated limb slot; missing slots are simply absent
    #[serde(default)]
    pub limbs: Vec<LimbConfig>,
}

/// A single populated limb slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimbConfig {
    pub limb: LimbType,
    #[serde(default = "default_limb_max_health")]
    pub max_health: f64,
    /// Whether this limb counts toward the character-wide health value
    #[serde(default = "default_affects_character_health")]
    pub affects_character_health: bool,
}

impl LimbConfig {
    pub fn new(limb: LimbType, max_health: f64, affects_character_health: bool) -> Self {
        LimbConfig {
            limb,
            max_health,
            affects_character_health,
        }
    }
}

fn default_torso_max_health() -> f64 {
    100.0
}
fn default_limb_max_health() -> f64 {
    50.0
}
fn default_affects_character_health() -> bool {
    true
}

impl Default for BodyConfig {
    fn default() -> Self {
        BodyConfig::humanoid()
    }
}

impl BodyConfig {
    /// A torso with no limbs attached
    pub fn torso_only(torso_max_health: f64) -> Self {
        BodyConfig {
            torso_max_health,
            limbs: Vec::new(),
        }
    }

    /// Full human body. Hands and feet do not count toward character health.
    pub fn humanoid() -> Self {
        let limbs = LimbType::all()
            .iter()
            .filter(|limb| !limb.is_torso())
            .map(|&limb| {
                let (max_health, affects) = match limb {
                    LimbType::Head => (40.0, true),
                    LimbType::Neck => (30.0, true),
                    LimbType::RightBicep | LimbType::LeftBicep => (50.0, true),
                    LimbType::RightForearm | LimbType::LeftForearm => (40.0, true),
                    LimbType::RightThigh | LimbType::LeftThigh => (60.0, true),
                    LimbType::RightCalf | LimbType::LeftCalf => (45.0, true),
                    _ => (25.0, false),
                };
                LimbConfig::new(limb, max_health, affects)
            })
            .collect();

        BodyConfig {
            torso_max_health: 100.0,
            limbs,
        }
    }

    /// Add a limb slot
    pub fn with_limb(mut self, limb: LimbType, max_health: f64, affects: bool) -> Self {
        self.limbs.push(LimbConfig::new(limb, max_health, affects));
        self
    }

    /// Load a body layout from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let config: BodyConfig = super::load_toml(path)?;
        config.validate()?;
        tracing::debug!(
            "Loaded body layout with {} limbs from {}",
            config.limbs.len(),
            path.display()
        );
        Ok(config)
    }

    /// Parse a body layout from a TOML string
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        let config: BodyConfig = super::parse_toml(toml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.torso_max_health.is_finite() || self.torso_max_health <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "torso_max_health must be positive, got {}",
                self.torso_max_health
            )));
        }

        let mut seen = HashSet::new();
        for entry in &self.limbs {
            if entry.limb.is_torso() {
                return Err(ConfigError::ValidationError(
                    "torso is configured through torso_max_health, not as a limb".to_string(),
                ));
            }
            if !seen.insert(entry.limb) {
                return Err(ConfigError::ValidationError(format!(
                    "limb {} listed more than once",
                    entry.limb
                )));
            }
            if !entry.max_health.is_finite() || entry.max_health <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "max_health for {} must be positive, got {}",
                    entry.limb, entry.max_health
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanoid_has_every_limb() {
        let body = BodyConfig::humanoid();
        assert_eq!(body.limbs.len(), 14);
        assert!(body.validate().is_ok());
        assert!(body.limbs.iter().all(|l| !l.limb.is_torso()));
    }

    #[test]
    fn test_parse_body() {
        let toml = r#"
torso_max_health = 120

[[limbs]]
limb = "head"
max_health = 40

[[limbs]]
limb = "left_hand"
max_health = 20
affects_character_health = false
"#;

        let body = BodyConfig::parse(toml).unwrap();
        assert!((body.torso_max_health - 120.0).abs() < f64::EPSILON);
        assert_eq!(body.limbs.len(), 2);
        assert!(body.limbs[0].affects_character_health);
        assert!(!body.limbs[1].affects_character_health);
    }

    #[test]
    fn test_limb_defaults() {
        let body = BodyConfig::parse("[[limbs]]\nlimb = \"neck\"\n").unwrap();
        assert!((body.torso_max_health - 100.0).abs() < f64::EPSILON);
        assert!((body.limbs[0].max_health - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_torso_limb_rejected() {
        let toml = "[[limbs]]\nlimb = \"torso\"\nmax_health = 10\n";
        assert!(matches!(
            BodyConfig::parse(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_duplicate_limb_rejected() {
        let body = BodyConfig::torso_only(100.0)
            .with_limb(LimbType::Head, 40.0, true)
            .with_limb(LimbType::Head, 40.0, true);
        assert!(body.validate().is_err());
    }

    #[test]
    fn test_zero_health_rejected() {
        let body = BodyConfig::torso_only(100.0).with_limb(LimbType::LeftFoot, 0.0, false);
        assert!(body.validate().is_err());
        assert!(BodyConfig::torso_only(0.0).validate().is_err());
    }
}
