//! Wound accumulators - secondary state left behind by damage
//!
//! - Blunt trauma: grows with blunt damage, makes later hits hurt more
//! - Pain: grows with any damage, decays over time
//! - History: which damage types a limb has taken, and the latest one

mod history;
mod pain;
mod trauma;

pub use history::WoundHistory;
pub use pain::PainTracker;
pub use trauma::BluntTrauma;

use crate::config::PainConstants;
use body_core::{DamageType, LimbType};

/// All accumulators for one character
#[derive(Debug, Clone, Default)]
pub struct WoundLedger {
    pub trauma: BluntTrauma,
    pub pain: PainTracker,
    pub history: WoundHistory,
}

impl WoundLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update every accumulator for damage that actually landed.
    ///
    /// Does nothing unless `actual_damage > 0`.
    pub fn record_damage(
        &mut self,
        limb: LimbType,
        actual_damage: f64,
        damage_type: DamageType,
        pain: &PainConstants,
    ) {
        if actual_damage.is_nan() || actual_damage <= 0.0 {
            return;
        }

        if damage_type == DamageType::Blunt {
            self.trauma.add(limb, actual_damage);
        }
        self.history.record(limb, damage_type);
        self.pain
            .add(limb, actual_damage * pain.per_damage, pain.ceiling());
    }

    /// Linear pain decay for one tick
    pub fn decay_pain(&mut self, delta_seconds: f64, pain: &PainConstants) {
        if !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            return;
        }
        self.pain.decay(pain.decay_per_second * delta_seconds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blunt_records_trauma() {
        let mut ledger = WoundLedger::new();
        ledger.record_damage(LimbType::Head, 12.0, DamageType::Blunt, &PainConstants::default());
        assert!((ledger.trauma.get(LimbType::Head) - 12.0).abs() < f64::EPSILON);
        assert!((ledger.pain.get(LimbType::Head) - 12.0).abs() < f64::EPSILON);
        assert_eq!(ledger.history.last(LimbType::Head), Some(DamageType::Blunt));
    }

    #[test]
    fn test_slash_skips_trauma() {
        let mut ledger = WoundLedger::new();
        ledger.record_damage(LimbType::Torso, 12.0, DamageType::Slash, &PainConstants::default());
        assert_eq!(ledger.trauma.get(LimbType::Torso), 0.0);
        assert_eq!(ledger.history.types(LimbType::Torso), vec![DamageType::Slash]);
    }

    #[test]
    fn test_zero_damage_records_nothing() {
        let mut ledger = WoundLedger::new();
        ledger.record_damage(LimbType::Torso, 0.0, DamageType::Blunt, &PainConstants::default());
        assert_eq!(ledger.history.last(LimbType::Torso), None);
        assert!(ledger.pain.is_empty());
    }

    #[test]
    fn test_pain_scaled_and_capped() {
        let pain = PainConstants {
            per_damage: 2.0,
            max_per_limb: 10.0,
            ..PainConstants::default()
        };
        let mut ledger = WoundLedger::new();
        ledger.record_damage(LimbType::Neck, 4.0, DamageType::Stab, &pain);
        assert!((ledger.pain.get(LimbType::Neck) - 8.0).abs() < f64::EPSILON);
        ledger.record_damage(LimbType::Neck, 4.0, DamageType::Stab, &pain);
        // Ceiling is 1.5 x 10
        assert!((ledger.pain.get(LimbType::Neck) - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_decay_uses_rate() {
        let pain = PainConstants::default();
        let mut ledger = WoundLedger::new();
        ledger.record_damage(LimbType::Torso, 20.0, DamageType::Slash, &pain);
        ledger.decay_pain(2.0, &pain);
        assert!((ledger.pain.get(LimbType::Torso) - 10.0).abs() < f64::EPSILON);
        ledger.decay_pain(f64::NAN, &pain);
        assert!((ledger.pain.get(LimbType::Torso) - 10.0).abs() < f64::EPSILON);
    }
}
