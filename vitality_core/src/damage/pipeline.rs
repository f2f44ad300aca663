//! Damage pipeline - raw hit to health loss
//!
//! Stages run in a fixed order; each sees the amount left by the previous:
//! 1. Blunt trauma vulnerability
//! 2. Clothing mitigation
//! 3. Application to torso or limb (floored at zero)
//! 4. Wound accumulators
//! 5. Aggregate recompute
//! 6. Damage-dealt notification

use super::mitigation::{calculate_mitigation_multiplier, calculate_vulnerability_multiplier};
use super::report::DamageReport;
use crate::contact::ContactMap;
use crate::events::{DamageDealt, VitalityEvent};
use crate::state::VitalityState;
use body_core::{ColliderId, DamageType, HitContext, LimbType};
use hit_tables::{HitTableRegistry, TableError};
use rand::Rng;

impl VitalityState {
    /// Apply a hit to a target. Returns the health actually removed.
    ///
    /// Empty slots and non-positive amounts are silent no-ops returning 0.
    /// Death is never declared here, even at zero health.
    pub fn apply_damage(
        &mut self,
        target: LimbType,
        raw_amount: f64,
        damage_type: DamageType,
        hit: Option<HitContext>,
    ) -> f64 {
        self.apply_damage_detailed(target, raw_amount, damage_type, hit)
            .actual_damage
    }

    /// Same as [`apply_damage`](Self::apply_damage) but reports every stage
    pub fn apply_damage_detailed(
        &mut self,
        target: LimbType,
        raw_amount: f64,
        damage_type: DamageType,
        hit: Option<HitContext>,
    ) -> DamageReport {
        let mut report = DamageReport::new(target, damage_type, raw_amount);

        if !raw_amount.is_finite() || raw_amount <= 0.0 {
            tracing::trace!("Ignoring non-positive damage {} on {}", raw_amount, target);
            return report;
        }
        let Some(max_health) = self.limb_max_health(target) else {
            tracing::trace!("Damage on empty slot {}", target);
            return report;
        };
        report.target_present = true;

        // Stage 1: trauma makes every later hit on this limb hurt more
        report.vulnerability_multiplier = calculate_vulnerability_multiplier(
            self.wounds.trauma.get(target),
            max_health,
            &self.constants.vulnerability,
        );

        // Stage 2: clothing
        report.mitigation = self.mitigation.mitigation(target, damage_type);
        report.mitigation_multiplier =
            calculate_mitigation_multiplier(report.mitigation, &self.constants.mitigation);

        report.net_amount =
            raw_amount * report.vulnerability_multiplier * report.mitigation_multiplier;

        // Stage 3: apply
        let affects_aggregate = if target.is_torso() {
            report.health_before = self.torso_health;
            self.torso_health = (self.torso_health - report.net_amount).max(0.0);
            report.health_after = self.torso_health;
            report.actual_damage = report.health_before - report.health_after;
            true
        } else {
            match self.limbs.get_mut(target) {
                Some(limb) => {
                    report.health_before = limb.current_health();
                    report.actual_damage = limb.damage(report.net_amount);
                    report.health_after = limb.current_health();
                    limb.affects_character_health()
                }
                None => return report,
            }
        };

        tracing::debug!(
            "{} {} damage on {}: raw {:.2} x{:.2} trauma x{:.2} mitigation -> {:.2} applied",
            if report.actual_damage > 0.0 { "Resolved" } else { "Absorbed" },
            damage_type,
            target,
            raw_amount,
            report.vulnerability_multiplier,
            report.mitigation_multiplier,
            report.actual_damage
        );

        if report.actual_damage <= 0.0 {
            return report;
        }

        self.notify_health_changed(target, -report.actual_damage);

        // Stage 4
        self.wounds.record_damage(
            target,
            report.actual_damage,
            damage_type,
            &self.constants.pain,
        );

        // Stage 5
        if affects_aggregate {
            self.recompute_aggregate();
        }

        // Stage 6: only directional hits produce blood
        if let Some(hit) = hit.filter(HitContext::has_direction) {
            self.events.dispatch(VitalityEvent::DamageDealt(DamageDealt {
                position: hit.position,
                direction: hit.direction,
                amount: report.actual_damage,
                damage_type,
                target,
                is_critical: hit.is_critical,
                contact: hit.contact,
            }));
        }

        report
    }

    /// Resolve a collider to a limb, then apply damage to it.
    ///
    /// A collider that belongs to none of this character's body parts is a
    /// no-op returning 0.
    pub fn apply_damage_to_contact(
        &mut self,
        contacts: &ContactMap,
        collider: ColliderId,
        raw_amount: f64,
        damage_type: DamageType,
        hit: Option<HitContext>,
    ) -> f64 {
        match contacts.resolve(collider) {
            Some(target) => self.apply_damage(target, raw_amount, damage_type, hit),
            None => {
                tracing::trace!("Contact {:?} does not belong to this character", collider);
                0.0
            }
        }
    }

    /// Roll a hit location from a named table, then apply damage there.
    ///
    /// Fails only when the table is unknown; rolling an empty slot is a
    /// normal miss and reports `target_present == false`.
    pub fn apply_damage_from_table<R: Rng>(
        &mut self,
        registry: &HitTableRegistry,
        table_id: &str,
        rng: &mut R,
        raw_amount: f64,
        damage_type: DamageType,
        hit: Option<HitContext>,
    ) -> Result<DamageReport, TableError> {
        let target = registry.select(table_id, rng)?;
        Ok(self.apply_damage_detailed(target, raw_amount, damage_type, hit))
    }
}
