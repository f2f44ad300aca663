//! Damage report - what each pipeline stage did to a single hit

use body_core::{DamageType, LimbType};

/// Outcome of one damage application
#[derive(Debug, Clone, PartialEq)]
pub struct DamageReport {
    pub target: LimbType,
    pub damage_type: DamageType,
    /// Amount as passed in by the caller
    pub raw_amount: f64,
    /// Trauma vulnerability applied in stage one (1.0 = none)
    pub vulnerability_multiplier: f64,
    /// Mitigation value reported by the clothing provider
    pub mitigation: f64,
    /// Multiplier derived from `mitigation`
    pub mitigation_multiplier: f64,
    /// Amount handed to the health store after both multipliers
    pub net_amount: f64,
    /// Health actually removed; can be less than `net_amount` near zero health
    pub actual_damage: f64,
    pub health_before: f64,
    pub health_after: f64,
    /// False when the target slot is not populated
    pub target_present: bool,
}

impl DamageReport {
    pub(crate) fn new(target: LimbType, damage_type: DamageType, raw_amount: f64) -> Self {
        DamageReport {
            target,
            damage_type,
            raw_amount,
            vulnerability_multiplier: 1.0,
            mitigation: 0.0,
            mitigation_multiplier: 1.0,
            net_amount: 0.0,
            actual_damage: 0.0,
            health_before: 0.0,
            health_after: 0.0,
            target_present: false,
        }
    }

    /// Whether any health was removed
    pub fn was_applied(&self) -> bool {
        self.actual_damage > 0.0
    }

    /// Damage prevented by clothing (negative when clothing amplified it)
    pub fn mitigated_amount(&self) -> f64 {
        self.raw_amount * self.vulnerability_multiplier - self.net_amount
    }
}
