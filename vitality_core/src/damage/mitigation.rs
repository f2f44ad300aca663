//! Damage multipliers - blunt trauma vulnerability and clothing mitigation
//!
//! Formulas:
//! - vulnerability = 1 + min(trauma / max(max_health, 1) * scale, cap)
//! - mitigation multiplier = clamp(1 - mitigation, min_multiplier, max_multiplier)
//!
//! Mitigation runs from -1 (double damage) to 1 (blocked down to the floor).

use crate::config::{MitigationConstants, VulnerabilityConstants};
use body_core::{DamageType, LimbType};
use std::collections::HashMap;

/// Source of worn-item mitigation, queried on every damage application.
///
/// Implementations must be side-effect free lookups.
pub trait MitigationProvider {
    /// Mitigation in `[-1, 1]` for a hit of `damage_type` on `limb`
    fn mitigation(&self, limb: LimbType, damage_type: DamageType) -> f64;
}

/// Nothing worn
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMitigation;

impl MitigationProvider for NoMitigation {
    fn mitigation(&self, _limb: LimbType, _damage_type: DamageType) -> f64 {
        0.0
    }
}

/// Fixed mitigation per (limb, damage type); unlisted pairs are neutral
#[derive(Debug, Clone, Default)]
pub struct ClothingMitigation {
    values: HashMap<(LimbType, DamageType), f64>,
}

impl ClothingMitigation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mitigation for a pair, clamped to `[-1, 1]`
    pub fn set(&mut self, limb: LimbType, damage_type: DamageType, value: f64) {
        self.values.insert((limb, damage_type), value.clamp(-1.0, 1.0));
    }

    /// Same value against every damage type on one limb
    pub fn set_all_types(&mut self, limb: LimbType, value: f64) {
        for &damage_type in DamageType::all() {
            self.set(limb, damage_type, value);
        }
    }

    pub fn clear(&mut self, limb: LimbType, damage_type: DamageType) {
        self.values.remove(&(limb, damage_type));
    }
}

impl MitigationProvider for ClothingMitigation {
    fn mitigation(&self, limb: LimbType, damage_type: DamageType) -> f64 {
        self.values.get(&(limb, damage_type)).copied().unwrap_or(0.0)
    }
}

/// Damage multiplier from accumulated blunt trauma
///
/// # Arguments
/// * `trauma` - Blunt damage the limb has absorbed so far
/// * `max_health` - The limb's max health (floored at 1 for the ratio)
pub fn calculate_vulnerability_multiplier(
    trauma: f64,
    max_health: f64,
    constants: &VulnerabilityConstants,
) -> f64 {
    if trauma <= 0.0 {
        return 1.0;
    }

    let ratio = trauma / max_health.max(1.0);
    let extra = (ratio * constants.scale).min(constants.cap).max(0.0);
    1.0 + extra
}

/// Damage multiplier from a mitigation value
///
/// Out-of-range or non-numeric mitigation is clamped first, so a misbehaving
/// provider can never flip the sign of damage or blow it up.
pub fn calculate_mitigation_multiplier(mitigation: f64, constants: &MitigationConstants) -> f64 {
    let mitigation = if mitigation.is_finite() {
        mitigation.clamp(-1.0, 1.0)
    } else {
        0.0
    };
    (1.0 - mitigation).clamp(constants.min_multiplier, constants.max_multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_trauma_no_vulnerability() {
        let constants = VulnerabilityConstants::default();
        let mult = calculate_vulnerability_multiplier(0.0, 100.0, &constants);
        assert!((mult - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_trauma_scales_damage() {
        // 30 trauma on a 100 hp limb: 1 + min(0.3 * 0.5, 0.5) = 1.15
        let constants = VulnerabilityConstants::default();
        let mult = calculate_vulnerability_multiplier(30.0, 100.0, &constants);
        assert!((mult - 1.15).abs() < 1e-12);
    }

    #[test]
    fn test_vulnerability_capped() {
        // 500 trauma on 100 hp would be +2.5, capped at +0.5
        let constants = VulnerabilityConstants::default();
        let mult = calculate_vulnerability_multiplier(500.0, 100.0, &constants);
        assert!((mult - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tiny_max_health_floored_at_one() {
        // Ratio uses max(max_health, 1): 0.5 / 1 * 0.5 = 0.25
        let constants = VulnerabilityConstants::default();
        let mult = calculate_vulnerability_multiplier(0.5, 0.2, &constants);
        assert!((mult - 1.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_positive_mitigation() {
        let constants = MitigationConstants::default();
        let mult = calculate_mitigation_multiplier(0.5, &constants);
        assert!((mult - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_mitigation_amplifies() {
        let constants = MitigationConstants::default();
        let mult = calculate_mitigation_multiplier(-0.5, &constants);
        assert!((mult - 1.5).abs() < f64::EPSILON);
        let mult = calculate_mitigation_multiplier(-1.0, &constants);
        assert!((mult - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_full_mitigation_keeps_floor() {
        let constants = MitigationConstants::default();
        let mult = calculate_mitigation_multiplier(1.0, &constants);
        assert!((mult - 0.01).abs() < f64::EPSILON);
    }

    #[test]
    fn test_out_of_range_mitigation_clamped() {
        let constants = MitigationConstants::default();
        assert!((calculate_mitigation_multiplier(7.0, &constants) - 0.01).abs() < f64::EPSILON);
        assert!((calculate_mitigation_multiplier(-7.0, &constants) - 2.0).abs() < f64::EPSILON);
        assert!((calculate_mitigation_multiplier(f64::NAN, &constants) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clothing_lookup() {
        let mut clothing = ClothingMitigation::new();
        clothing.set_all_types(LimbType::Head, 0.3);
        clothing.set(LimbType::Head, DamageType::Stab, -2.0);

        assert!((clothing.mitigation(LimbType::Head, DamageType::Blunt) - 0.3).abs() < f64::EPSILON);
        assert!((clothing.mitigation(LimbType::Head, DamageType::Stab) + 1.0).abs() < f64::EPSILON);
        assert!(clothing.mitigation(LimbType::Neck, DamageType::Blunt).abs() < f64::EPSILON);

        clothing.clear(LimbType::Head, DamageType::Blunt);
        assert!(clothing.mitigation(LimbType::Head, DamageType::Blunt).abs() < f64::EPSILON);
    }
}
