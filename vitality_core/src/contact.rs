//! Contact resolution - maps a physical collider back to the limb it belongs to
//!
//! A rig is a parent/child chain (bicep -> forearm -> hand), and a collider
//! may be attached to several joints of that chain. Resolution therefore
//! checks the most distal joints first, so a contact on a hand resolves to
//! the hand and never bubbles up to the forearm. Torso is the catch-all.

use body_core::{ColliderId, LimbType};
use std::collections::{HashMap, HashSet};

/// Limbs in the order contacts are resolved against them
pub const RESOLUTION_ORDER: [LimbType; 14] = [
    LimbType::RightHand,
    LimbType::LeftHand,
    LimbType::RightForearm,
    LimbType::LeftForearm,
    LimbType::RightBicep,
    LimbType::LeftBicep,
    LimbType::RightFoot,
    LimbType::LeftFoot,
    LimbType::RightCalf,
    LimbType::LeftCalf,
    LimbType::RightThigh,
    LimbType::LeftThigh,
    LimbType::Head,
    LimbType::Neck,
];

/// Which colliders belong to which limb of one character
#[derive(Debug, Clone, Default)]
pub struct ContactMap {
    limbs: HashMap<LimbType, HashSet<ColliderId>>,
    torso: HashSet<ColliderId>,
}

impl ContactMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a collider to one limb (or the torso)
    pub fn attach(&mut self, limb: LimbType, collider: ColliderId) {
        if limb.is_torso() {
            self.torso.insert(collider);
        } else {
            self.limbs.entry(limb).or_default().insert(collider);
        }
    }

    /// Attach a collider to a limb and every joint above it, up to the torso.
    ///
    /// Mirrors a rig where child colliders are owned by every parent bone.
    pub fn attach_with_ancestors(&mut self, limb: LimbType, collider: ColliderId) {
        self.attach(limb, collider);
        for ancestor in limb.ancestors() {
            self.attach(ancestor, collider);
        }
    }

    /// Remove a collider from every limb it is attached to
    pub fn detach(&mut self, collider: ColliderId) {
        self.torso.remove(&collider);
        for colliders in self.limbs.values_mut() {
            colliders.remove(&collider);
        }
    }

    /// Most specific limb owning `collider`, or `None` if it is not ours
    pub fn resolve(&self, collider: ColliderId) -> Option<LimbType> {
        let owns = |limb: &LimbType| {
            self.limbs
                .get(limb)
                .is_some_and(|colliders| colliders.contains(&collider))
        };

        if let Some(limb) = RESOLUTION_ORDER.iter().find(|limb| owns(limb)) {
            return Some(*limb);
        }
        if self.torso.contains(&collider) {
            return Some(LimbType::Torso);
        }
        None
    }
}
