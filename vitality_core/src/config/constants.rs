//! Vitality tuning constants

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

use super::ConfigError;

/// Global vitality constants instance
static VITALITY_CONSTANTS: OnceLock<VitalityConstants> = OnceLock::new();

/// Initialize the global vitality constants from a TOML file
///
/// Call once at startup, before any character is created.
/// Returns error if already initialized or if loading fails.
pub fn init_constants(path: &Path) -> Result<(), ConfigError> {
    let constants = VitalityConstants::load_from_path(path)?;
    VITALITY_CONSTANTS.set(constants).map_err(|_| {
        ConfigError::ValidationError("VitalityConstants already initialized".to_string())
    })
}

/// Initialize the global vitality constants with default values
pub fn init_constants_default() -> Result<(), ConfigError> {
    VITALITY_CONSTANTS
        .set(VitalityConstants::default())
        .map_err(|_| {
            ConfigError::ValidationError("VitalityConstants already initialized".to_string())
        })
}

/// Get a reference to the global vitality constants
///
/// Falls back to (and locks in) the defaults if nothing was initialized.
pub fn constants() -> &'static VitalityConstants {
    VITALITY_CONSTANTS.get_or_init(VitalityConstants::default)
}

/// Check if constants have been initialized
pub fn constants_initialized() -> bool {
    VITALITY_CONSTANTS.get().is_some()
}

/// Ensure constants are initialized with defaults (idempotent, useful for tests)
pub fn ensure_constants_initialized() {
    VITALITY_CONSTANTS.get_or_init(VitalityConstants::default);
}

/// Tunable vitality constants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VitalityConstants {
    #[serde(default)]
    pub vulnerability: VulnerabilityConstants,
    #[serde(default)]
    pub mitigation: MitigationConstants,
    #[serde(default)]
    pub pain: PainConstants,
    #[serde(default)]
    pub severity: SeverityConstants,
}

impl VitalityConstants {
    /// Load constants from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let constants: VitalityConstants = super::load_toml(path)?;
        constants.validate()?;
        tracing::debug!("Loaded vitality constants from {}", path.display());
        Ok(constants)
    }

    /// Parse constants from a TOML string
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        let constants: VitalityConstants = super::parse_toml(toml)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Reject values that would make the damage pipeline misbehave
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::ValidationError(msg));

        let non_negative = [
            ("vulnerability.scale", self.vulnerability.scale),
            ("vulnerability.cap", self.vulnerability.cap),
            ("mitigation.min_multiplier", self.mitigation.min_multiplier),
            ("mitigation.max_multiplier", self.mitigation.max_multiplier),
            ("pain.per_damage", self.pain.per_damage),
            ("pain.max_per_limb", self.pain.max_per_limb),
            ("pain.display_headroom", self.pain.display_headroom),
            ("pain.decay_per_second", self.pain.decay_per_second),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return invalid(format!("{} must be a non-negative number, got {}", name, value));
            }
        }

        if self.mitigation.min_multiplier > self.mitigation.max_multiplier {
            return invalid(format!(
                "mitigation.min_multiplier ({}) exceeds max_multiplier ({})",
                self.mitigation.min_multiplier, self.mitigation.max_multiplier
            ));
        }

        let light = self.severity.light_threshold;
        let heavy = self.severity.heavy_threshold;
        if !(0.0..=1.0).contains(&light) || !(0.0..=1.0).contains(&heavy) {
            return invalid(format!(
                "severity thresholds must lie in [0, 1], got light {} heavy {}",
                light, heavy
            ));
        }
        if heavy > light {
            return invalid(format!(
                "severity.heavy_threshold ({}) exceeds light_threshold ({})",
                heavy, light
            ));
        }

        Ok(())
    }
}

/// Blunt trauma makes a limb take more damage from every later hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VulnerabilityConstants {
    /// Extra damage per unit of trauma-to-max-health ratio
    #[serde(default = "default_vulnerability_scale")]
    pub scale: f64,
    /// Ceiling on the extra damage fraction (0.5 = at most 1.5x damage)
    #[serde(default = "default_vulnerability_cap")]
    pub cap: f64,
}

impl Default for VulnerabilityConstants {
    fn default() -> Self {
        VulnerabilityConstants {
            scale: 0.5,
            cap: 0.5,
        }
    }
}

fn default_vulnerability_scale() -> f64 {
    0.5
}
fn default_vulnerability_cap() -> f64 {
    0.5
}

/// Bounds on the clothing mitigation multiplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MitigationConstants {
    /// Floor so that no clothing grants full immunity
    #[serde(default = "default_min_multiplier")]
    pub min_multiplier: f64,
    /// Ceiling for negative mitigation (vulnerable clothing)
    #[serde(default = "default_max_multiplier")]
    pub max_multiplier: f64,
}

impl Default for MitigationConstants {
    fn default() -> Self {
        MitigationConstants {
            min_multiplier: 0.01,
            max_multiplier: 2.0,
        }
    }
}

fn default_min_multiplier() -> f64 {
    0.01
}
fn default_max_multiplier() -> f64 {
    2.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PainConstants {
    /// Pain gained per point of damage taken
    #[serde(default = "default_pain_per_damage")]
    pub per_damage: f64,
    /// Pain at which a limb reads as 100%
    #[serde(default = "default_max_pain_per_limb")]
    pub max_per_limb: f64,
    /// Stored pain may exceed the maximum by this factor so that it stays
    /// pinned at 100% for a while before decaying into view
    #[serde(default = "default_display_headroom")]
    pub display_headroom: f64,
    #[serde(default = "default_decay_per_second")]
    pub decay_per_second: f64,
}

impl PainConstants {
    /// Upper bound on stored pain for a single limb
    pub fn ceiling(&self) -> f64 {
        self.max_per_limb * self.display_headroom
    }
}

impl Default for PainConstants {
    fn default() -> Self {
        PainConstants {
            per_damage: 1.0,
            max_per_limb: 100.0,
            display_headroom: 1.5,
            decay_per_second: 5.0,
        }
    }
}

fn default_pain_per_damage() -> f64 {
    1.0
}
fn default_max_pain_per_limb() -> f64 {
    100.0
}
fn default_display_headroom() -> f64 {
    1.5
}
fn default_decay_per_second() -> f64 {
    5.0
}

/// Health-percent thresholds for laceration severity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityConstants {
    /// Above this fraction a wound is light
    #[serde(default = "default_light_threshold")]
    pub light_threshold: f64,
    /// At or below this fraction a wound is heavy
    #[serde(default = "default_heavy_threshold")]
    pub heavy_threshold: f64,
}

impl Default for SeverityConstants {
    fn default() -> Self {
        SeverityConstants {
            light_threshold: 0.66,
            heavy_threshold: 0.33,
        }
    }
}

fn default_light_threshold() -> f64 {
    0.66
}
fn default_heavy_threshold() -> f64 {
    0.33
}
