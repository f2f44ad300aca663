//! Wound-type history per limb

use body_core::{DamageType, LimbType};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, Default)]
pub struct WoundHistory {
    /// Most recent damage type, overwritten by every hit
    last: HashMap<LimbType, DamageType>,
    /// Every damage type ever recorded, Generic excluded; only grows
    recorded: HashMap<LimbType, BTreeSet<DamageType>>,
}

impl WoundHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, limb: LimbType, damage_type: DamageType) {
        self.last.insert(limb, damage_type);
        if damage_type.is_recorded() {
            self.recorded.entry(limb).or_default().insert(damage_type);
        }
    }

    pub fn last(&self, limb: LimbType) -> Option<DamageType> {
        self.last.get(&limb).copied()
    }

    /// Recorded damage types in a stable order (Blunt, Stab, Slash)
    pub fn types(&self, limb: LimbType) -> Vec<DamageType> {
        self.recorded
            .get(&limb)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn has_taken(&self, limb: LimbType, damage_type: DamageType) -> bool {
        self.recorded
            .get(&limb)
            .is_some_and(|set| set.contains(&damage_type))
    }
}
