//! VitalityState - everything about one character's health in one place
//!
//! The torso is a plain scalar owned by the state. Every other body part is
//! a [`Limb`] in an explicit registry; a slot with no limb is a normal
//! configuration, and every operation on it is a silent no-op.

use crate::config::{constants, BodyConfig, VitalityConstants};
use crate::damage::{MitigationProvider, NoMitigation};
use crate::events::{EventDispatcher, ObserverId, VitalityEvent, VitalityObserver};
use crate::limb::{health_fraction, Limb, LimbRegistry};
use crate::severity::{classify_severity, SeverityTier};
use crate::wounds::WoundLedger;
use body_core::{DamageType, LimbType};
use serde::{Deserialize, Serialize};

/// Whether the character still accepts input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ControlState {
    #[default]
    Controllable,
    /// Set on death; never cleared by this crate
    Locked,
}

/// Per-character vitality model
pub struct VitalityState {
    pub(crate) limbs: LimbRegistry,
    pub(crate) torso_health: f64,
    pub(crate) torso_max_health: f64,
    pub(crate) wounds: WoundLedger,
    pub(crate) aggregate_health: f64,
    pub(crate) is_dead: bool,
    pub(crate) control: ControlState,
    pub(crate) constants: VitalityConstants,
    pub(crate) mitigation: Box<dyn MitigationProvider>,
    pub(crate) events: EventDispatcher,
}

impl VitalityState {
    /// Build a character at full health using the global constants
    pub fn new(body: &BodyConfig) -> Self {
        Self::with_constants(body, constants().clone())
    }

    /// Build a character at full health with its own tuning constants
    pub fn with_constants(body: &BodyConfig, constants: VitalityConstants) -> Self {
        let torso_max_health = body.torso_max_health.max(0.0);
        let mut state = VitalityState {
            limbs: LimbRegistry::from_body(body),
            torso_health: torso_max_health,
            torso_max_health,
            wounds: WoundLedger::new(),
            aggregate_health: 0.0,
            is_dead: false,
            control: ControlState::Controllable,
            constants,
            mitigation: Box::new(NoMitigation),
            events: EventDispatcher::new(),
        };
        // Nobody is subscribed yet, so this only seeds the value
        state.aggregate_health = state.compute_aggregate();
        state
    }

    /// Full humanoid body with default layout
    pub fn humanoid() -> Self {
        Self::new(&BodyConfig::humanoid())
    }

    /// Builder-style mitigation provider
    pub fn with_mitigation(mut self, provider: impl MitigationProvider + 'static) -> Self {
        self.mitigation = Box::new(provider);
        self
    }

    /// Swap the mitigation provider, e.g. after the character changes clothes
    pub fn set_mitigation_provider(&mut self, provider: impl MitigationProvider + 'static) {
        self.mitigation = Box::new(provider);
    }

    pub fn constants(&self) -> &VitalityConstants {
        &self.constants
    }

    pub fn mitigation_provider(&self) -> &dyn MitigationProvider {
        self.mitigation.as_ref()
    }

    // ------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------

    pub fn subscribe(&mut self, observer: impl VitalityObserver + 'static) -> ObserverId {
        self.events.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.events.unsubscribe(id)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// The limb entity in a slot; always `None` for the torso
    pub fn limb(&self, limb: LimbType) -> Option<&Limb> {
        self.limbs.get(limb)
    }

    pub fn limbs(&self) -> &LimbRegistry {
        &self.limbs
    }

    /// Whether damage aimed at `target` can land
    pub fn has_target(&self, target: LimbType) -> bool {
        target.is_torso() || self.limbs.contains(target)
    }

    /// Current health of a target (torso included); `None` for an empty slot
    pub fn limb_health(&self, target: LimbType) -> Option<f64> {
        if target.is_torso() {
            return Some(self.torso_health);
        }
        self.limbs.get(target).map(Limb::current_health)
    }

    pub fn limb_max_health(&self, target: LimbType) -> Option<f64> {
        if target.is_torso() {
            return Some(self.torso_max_health);
        }
        self.limbs.get(target).map(Limb::max_health)
    }

    /// Health of a target as a fraction in `[0, 1]`
    pub fn health_percent(&self, target: LimbType) -> Option<f64> {
        if target.is_torso() {
            return Some(health_fraction(self.torso_health, self.torso_max_health));
        }
        self.limbs.get(target).map(Limb::health_percent)
    }

    pub fn torso_health(&self) -> f64 {
        self.torso_health
    }

    pub fn torso_max_health(&self) -> f64 {
        self.torso_max_health
    }

    /// Mean health fraction of the torso and every limb that affects it
    pub fn aggregate_health(&self) -> f64 {
        self.aggregate_health
    }

    pub fn is_dead(&self) -> bool {
        self.is_dead
    }

    pub fn control_state(&self) -> ControlState {
        self.control
    }

    /// Laceration severity of a target, `None` for an empty slot
    pub fn severity_tier(&self, target: LimbType) -> Option<SeverityTier> {
        let percent = self.health_percent(target)?;
        let severity = &self.constants.severity;
        Some(classify_severity(
            percent,
            severity.light_threshold,
            severity.heavy_threshold,
        ))
    }

    pub fn last_damage_type(&self, limb: LimbType) -> Option<DamageType> {
        self.wounds.history.last(limb)
    }

    /// Every damage type the limb has taken, Generic excluded
    pub fn damage_type_history(&self, limb: LimbType) -> Vec<DamageType> {
        self.wounds.history.types(limb)
    }

    pub fn blunt_trauma(&self, limb: LimbType) -> f64 {
        self.wounds.trauma.get(limb)
    }

    pub fn pain(&self, limb: LimbType) -> f64 {
        self.wounds.pain.get(limb)
    }

    /// Pain as a display fraction in `[0, 1]`
    pub fn pain_percent(&self, limb: LimbType) -> f64 {
        self.wounds.pain.percent(limb, self.constants.pain.max_per_limb)
    }

    pub fn wounds(&self) -> &WoundLedger {
        &self.wounds
    }

    // ------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------

    /// Set torso health directly (clamped to `[0, max]`).
    ///
    /// Notifies and recomputes the aggregate when the value changes.
    /// Returns the signed change.
    pub fn set_torso_health(&mut self, value: f64) -> f64 {
        if !value.is_finite() {
            tracing::trace!("Ignoring non-finite torso health {}", value);
            return 0.0;
        }
        let old = self.torso_health;
        self.torso_health = value.clamp(0.0, self.torso_max_health);
        let delta = self.torso_health - old;
        if delta != 0.0 {
            self.notify_health_changed(LimbType::Torso, delta);
            self.recompute_aggregate();
        }
        delta
    }

    /// Restore health on a target. Returns the health actually restored.
    ///
    /// Wound accumulators are left alone: healing closes the wound, not the
    /// bruise underneath it.
    pub fn apply_heal(&mut self, target: LimbType, amount: f64) -> f64 {
        if !amount.is_finite() || amount <= 0.0 {
            tracing::trace!("Ignoring non-positive heal {} on {}", amount, target);
            return 0.0;
        }

        let (healed, affects) = if target.is_torso() {
            let old = self.torso_health;
            self.torso_health = (old + amount).min(self.torso_max_health);
            (self.torso_health - old, true)
        } else {
            match self.limbs.get_mut(target) {
                Some(limb) => (limb.heal(amount), limb.affects_character_health()),
                None => {
                    tracing::trace!("Heal on empty slot {}", target);
                    return 0.0;
                }
            }
        };

        if healed > 0.0 {
            tracing::debug!("Healed {} for {:.2}", target, healed);
            self.notify_health_changed(target, healed);
            if affects {
                self.recompute_aggregate();
            }
        }
        healed
    }

    /// Drain pain from every limb for one tick. Fires no events.
    pub fn decay_pain(&mut self, delta_seconds: f64) {
        self.wounds.decay_pain(delta_seconds, &self.constants.pain);
    }

    /// Mark the character dead and lock control.
    ///
    /// Idempotent; returns true only on the call that actually killed.
    pub fn trigger_death(&mut self) -> bool {
        if self.is_dead {
            return false;
        }
        self.is_dead = true;
        self.control = ControlState::Locked;
        tracing::info!(
            "Character died (torso {:.1}/{:.1}, aggregate {:.2})",
            self.torso_health,
            self.torso_max_health,
            self.aggregate_health
        );
        self.events.dispatch(VitalityEvent::Died);
        true
    }

    /// Recompute the aggregate and notify if it moved
    pub fn recompute_aggregate(&mut self) {
        let previous = self.aggregate_health;
        let current = self.compute_aggregate();
        if current != previous {
            self.aggregate_health = current;
            self.events
                .dispatch(VitalityEvent::AggregateHealthChanged { previous, current });
        }
    }

    fn compute_aggregate(&self) -> f64 {
        let mut total = health_fraction(self.torso_health, self.torso_max_health);
        let mut count = 1usize;
        for limb in self.limbs.iter().filter(|l| l.affects_character_health()) {
            total += limb.health_percent();
            count += 1;
        }
        total / count as f64
    }

    /// Emit the health-changed event matching `target`
    pub(crate) fn notify_health_changed(&mut self, target: LimbType, delta: f64) {
        let event = if target.is_torso() {
            VitalityEvent::TorsoHealthChanged {
                current: self.torso_health,
                max: self.torso_max_health,
                delta,
            }
        } else {
            match self.limbs.get(target) {
                Some(limb) => VitalityEvent::LimbHealthChanged {
                    limb: target,
                    current: limb.current_health(),
                    max: limb.max_health(),
                    delta,
                },
                None => return,
            }
        };
        self.events.dispatch(event);
    }
}

impl std::fmt::Debug for VitalityState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VitalityState")
            .field("torso_health", &self.torso_health)
            .field("torso_max_health", &self.torso_max_health)
            .field("limbs", &self.limbs.len())
            .field("aggregate_health", &self.aggregate_health)
            .field("is_dead", &self.is_dead)
            .field("control", &self.control)
            .field("events", &self.events)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventRecorder;

    fn torso_only() -> VitalityState {
        VitalityState::with_constants(&BodyConfig::torso_only(100.0), VitalityConstants::default())
    }

    #[test]
    fn test_new_state_full_health() {
        let state = VitalityState::with_constants(&BodyConfig::humanoid(), VitalityConstants::default());
        assert!((state.torso_health() - 100.0).abs() < f64::EPSILON);
        assert!((state.aggregate_health() - 1.0).abs() < f64::EPSILON);
        assert!(!state.is_dead());
        assert_eq!(state.control_state(), ControlState::Controllable);
        assert_eq!(state.severity_tier(LimbType::Head), Some(SeverityTier::Light));
    }

    #[test]
    fn test_empty_slot_queries() {
        let state = torso_only();
        assert_eq!(state.limb_health(LimbType::LeftHand), None);
        assert_eq!(state.severity_tier(LimbType::LeftHand), None);
        assert!(!state.has_target(LimbType::LeftHand));
        assert!(state.has_target(LimbType::Torso));
        assert_eq!(state.pain_percent(LimbType::LeftHand), 0.0);
    }

    #[test]
    fn test_set_torso_health_clamps_and_notifies() {
        let mut state = torso_only();
        let recorder = EventRecorder::new();
        state.subscribe(recorder.clone());

        assert!((state.set_torso_health(150.0)).abs() < f64::EPSILON);
        assert!(recorder.events().is_empty());

        assert!((state.set_torso_health(-20.0) + 100.0).abs() < f64::EPSILON);
        assert_eq!(state.torso_health(), 0.0);

        let events = recorder.take();
        assert_eq!(
            events,
            vec![
                VitalityEvent::TorsoHealthChanged {
                    current: 0.0,
                    max: 100.0,
                    delta: -100.0
                },
                VitalityEvent::AggregateHealthChanged {
                    previous: 1.0,
                    current: 0.0
                },
            ]
        );
        // Zero health is not death
        assert!(!state.is_dead());
    }

    #[test]
    fn test_set_torso_health_ignores_nan() {
        let mut state = torso_only();
        assert_eq!(state.set_torso_health(f64::NAN), 0.0);
        assert!((state.torso_health() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut state = torso_only();
        state.set_torso_health(40.0);
        assert!((state.apply_heal(LimbType::Torso, 100.0) - 60.0).abs() < f64::EPSILON);
        assert!((state.torso_health() - 100.0).abs() < f64::EPSILON);
        assert_eq!(state.apply_heal(LimbType::Torso, 10.0), 0.0);
    }

    #[test]
    fn test_heal_empty_slot_is_noop() {
        let mut state = torso_only();
        assert_eq!(state.apply_heal(LimbType::Head, 10.0), 0.0);
        assert_eq!(state.apply_heal(LimbType::Torso, -10.0), 0.0);
    }

    #[test]
    fn test_aggregate_excludes_non_affecting_limbs() {
        let body = BodyConfig::torso_only(100.0)
            .with_limb(LimbType::Head, 40.0, true)
            .with_limb(LimbType::LeftHand, 20.0, false);
        let mut state = VitalityState::with_constants(&body, VitalityConstants::default());

        state.set_torso_health(50.0);
        // mean of torso 0.5 and head 1.0
        assert!((state.aggregate_health() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_is_unweighted_mean() {
        let body = BodyConfig::torso_only(200.0).with_limb(LimbType::Neck, 10.0, true);
        let mut state = VitalityState::with_constants(&body, VitalityConstants::default());
        state.set_torso_health(0.0);
        assert!((state.aggregate_health() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_trigger_death_once() {
        let mut state = torso_only();
        let recorder = EventRecorder::new();
        state.subscribe(recorder.clone());

        assert!(state.trigger_death());
        assert!(!state.trigger_death());

        assert!(state.is_dead());
        assert_eq!(state.control_state(), ControlState::Locked);
        assert_eq!(recorder.count(VitalityEvent::is_death), 1);
    }

    #[test]
    fn test_unsubscribed_observer_hears_nothing() {
        let mut state = torso_only();
        let recorder = EventRecorder::new();
        let id = state.subscribe(recorder.clone());
        assert!(state.unsubscribe(id));
        state.trigger_death();
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_severity_follows_health() {
        let mut state = torso_only();
        state.set_torso_health(66.0);
        assert_eq!(state.severity_tier(LimbType::Torso), Some(SeverityTier::Medium));
        state.set_torso_health(33.0);
        assert_eq!(state.severity_tier(LimbType::Torso), Some(SeverityTier::Heavy));
    }

    #[test]
    fn test_global_constants_used_by_default() {
        crate::config::ensure_constants_initialized();
        let state = VitalityState::new(&BodyConfig::torso_only(100.0));
        assert_eq!(state.constants(), constants());
    }
}
