//! Limb health entities and the per-character registry that owns them

use crate::config::{BodyConfig, LimbConfig};
use body_core::LimbType;
use std::collections::BTreeMap;

/// Health pool for a single body part
#[derive(Debug, Clone, PartialEq)]
pub struct Limb {
    limb_type: LimbType,
    current_health: f64,
    max_health: f64,
    affects_character_health: bool,
}

impl Limb {
    /// Create a limb at full health
    pub fn new(limb_type: LimbType, max_health: f64, affects_character_health: bool) -> Self {
        let max_health = max_health.max(0.0);
        Limb {
            limb_type,
            current_health: max_health,
            max_health,
            affects_character_health,
        }
    }

    pub fn from_config(config: &LimbConfig) -> Self {
        Limb::new(
            config.limb,
            config.max_health,
            config.affects_character_health,
        )
    }

    pub fn limb_type(&self) -> LimbType {
        self.limb_type
    }

    pub fn current_health(&self) -> f64 {
        self.current_health
    }

    pub fn max_health(&self) -> f64 {
        self.max_health
    }

    pub fn affects_character_health(&self) -> bool {
        self.affects_character_health
    }

    /// Current health as a fraction of max, in `[0, 1]`
    pub fn health_percent(&self) -> f64 {
        health_fraction(self.current_health, self.max_health)
    }

    /// Remove health, flooring at zero. Returns the health actually removed.
    pub fn damage(&mut self, amount: f64) -> f64 {
        if amount.is_nan() || amount <= 0.0 {
            return 0.0;
        }
        let old = self.current_health;
        self.current_health = (old - amount).max(0.0);
        old - self.current_health
    }

    /// Restore health, capping at max. Returns the health actually restored.
    pub fn heal(&mut self, amount: f64) -> f64 {
        if amount.is_nan() || amount <= 0.0 {
            return 0.0;
        }
        let old = self.current_health;
        self.current_health = (old + amount).min(self.max_health);
        self.current_health - old
    }

    /// Set health directly, clamped to `[0, max]`. Returns the signed change.
    pub fn set_health(&mut self, value: f64) -> f64 {
        if !value.is_finite() {
            return 0.0;
        }
        let old = self.current_health;
        self.current_health = value.clamp(0.0, self.max_health);
        self.current_health - old
    }
}

/// `current / max` clamped to `[0, 1]`; a pool with no max reads as empty
pub(crate) fn health_fraction(current: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (current / max).clamp(0.0, 1.0)
}

/// Every populated limb slot of one character.
///
/// The torso is a plain scalar on the character and never lives here.
#[derive(Debug, Clone, Default)]
pub struct LimbRegistry {
    limbs: BTreeMap<LimbType, Limb>,
}

impl LimbRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate one limb per configured slot, each at full health
    pub fn from_body(body: &BodyConfig) -> Self {
        let mut registry = Self::new();
        for config in &body.limbs {
            registry.insert(Limb::from_config(config));
        }
        registry
    }

    /// Add a limb, replacing any limb already in its slot.
    ///
    /// Returns false (and stores nothing) for a torso limb.
    pub fn insert(&mut self, limb: Limb) -> bool {
        if limb.limb_type.is_torso() {
            tracing::warn!("Ignoring torso limb; torso health is owned by the character");
            return false;
        }
        self.limbs.insert(limb.limb_type, limb);
        true
    }

    pub fn get(&self, limb_type: LimbType) -> Option<&Limb> {
        self.limbs.get(&limb_type)
    }

    pub fn get_mut(&mut self, limb_type: LimbType) -> Option<&mut Limb> {
        self.limbs.get_mut(&limb_type)
    }

    pub fn contains(&self, limb_type: LimbType) -> bool {
        self.limbs.contains_key(&limb_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Limb> {
        self.limbs.values()
    }

    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limbs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_limb_full_health() {
        let limb = Limb::new(LimbType::Head, 40.0, true);
        assert!((limb.current_health() - 40.0).abs() < f64::EPSILON);
        assert!((limb.health_percent() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_damage_floors_at_zero() {
        let mut limb = Limb::new(LimbType::LeftHand, 25.0, false);
        assert!((limb.damage(10.0) - 10.0).abs() < f64::EPSILON);
        // Only 15 left, so only 15 is actually removed
        assert!((limb.damage(40.0) - 15.0).abs() < f64::EPSILON);
        assert!(limb.current_health().abs() < f64::EPSILON);
        assert!(limb.damage(5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_positive_damage_is_noop() {
        let mut limb = Limb::new(LimbType::Neck, 30.0, true);
        assert_eq!(limb.damage(0.0), 0.0);
        assert_eq!(limb.damage(-5.0), 0.0);
        assert_eq!(limb.damage(f64::NAN), 0.0);
        assert!((limb.current_health() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut limb = Limb::new(LimbType::RightCalf, 45.0, true);
        limb.damage(20.0);
        assert!((limb.heal(50.0) - 20.0).abs() < f64::EPSILON);
        assert!((limb.current_health() - 45.0).abs() < f64::EPSILON);
        assert_eq!(limb.heal(-1.0), 0.0);
    }

    #[test]
    fn test_set_health_clamps() {
        let mut limb = Limb::new(LimbType::RightThigh, 60.0, true);
        assert!((limb.set_health(-10.0) + 60.0).abs() < f64::EPSILON);
        assert!((limb.set_health(1000.0) - 60.0).abs() < f64::EPSILON);
        assert_eq!(limb.set_health(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_registry_from_body() {
        let registry = LimbRegistry::from_body(&BodyConfig::humanoid());
        assert_eq!(registry.len(), 14);
        assert!(!registry.contains(LimbType::Torso));
        assert!(registry.contains(LimbType::LeftFoot));
    }

    #[test]
    fn test_registry_rejects_torso() {
        let mut registry = LimbRegistry::new();
        assert!(!registry.insert(Limb::new(LimbType::Torso, 100.0, true)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_health_fraction_zero_max() {
        assert_eq!(health_fraction(5.0, 0.0), 0.0);
        assert!((health_fraction(5.0, 10.0) - 0.5).abs() < f64::EPSILON);
    }
}
