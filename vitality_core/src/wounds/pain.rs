//! Pain: damage-proportional, per-limb, decays linearly over time
//!
//! Pain is read on demand for status display; decay fires no events.

use body_core::LimbType;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct PainTracker {
    /// Only limbs with positive pain have an entry
    by_limb: HashMap<LimbType, f64>,
}

impl PainTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, limb: LimbType) -> f64 {
        self.by_limb.get(&limb).copied().unwrap_or(0.0)
    }

    /// Whether the limb currently has any pain entry
    pub fn contains(&self, limb: LimbType) -> bool {
        self.by_limb.contains_key(&limb)
    }

    /// Pain as a fraction of `max_per_limb`, clamped to `[0, 1]`
    pub fn percent(&self, limb: LimbType, max_per_limb: f64) -> f64 {
        if max_per_limb <= 0.0 {
            return 0.0;
        }
        (self.get(limb) / max_per_limb).clamp(0.0, 1.0)
    }

    /// Add pain to a limb, never exceeding `ceiling`
    pub fn add(&mut self, limb: LimbType, amount: f64, ceiling: f64) {
        if amount.is_nan() || amount <= 0.0 || ceiling <= 0.0 {
            return;
        }
        let pain = self.by_limb.entry(limb).or_insert(0.0);
        *pain = (*pain + amount).min(ceiling);
    }

    /// Drain `amount` from every limb; limbs that reach zero are dropped
    pub fn decay(&mut self, amount: f64) {
        if amount.is_nan() || amount <= 0.0 {
            return;
        }
        self.by_limb.retain(|_, pain| {
            *pain -= amount;
            *pain > 0.0
        });
    }

    pub fn len(&self) -> usize {
        self.by_limb.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_limb.is_empty()
    }
}
