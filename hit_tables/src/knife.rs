//! Knife-to-torso contact resolution
//!
//! Paired categories (forearm, hand, thigh, calf, foot) carry their chance on
//! each side, so the total weight is
//! `head + neck + torso + 2 * (forearm + hand + thigh + calf + foot)`.
//! Right-side limbs are checked before left-side ones within a category.

use body_core::LimbType;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Per-category chances for a knife contact
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnifeContactChances {
    pub head: f64,
    pub neck: f64,
    pub torso: f64,
    /// Per side
    pub forearm: f64,
    /// Per side
    pub hand: f64,
    /// Per side
    pub thigh: f64,
    /// Per side
    pub calf: f64,
    /// Per side
    pub foot: f64,
}

impl Default for KnifeContactChances {
    fn default() -> Self {
        KnifeContactChances {
            head: 10.0,
            neck: 5.0,
            torso: 50.0,
            forearm: 4.0,
            hand: 3.0,
            thigh: 5.0,
            calf: 3.0,
            foot: 2.0,
        }
    }
}

impl KnifeContactChances {
    /// All categories at zero; useful as a base for struct update syntax
    pub fn none() -> Self {
        KnifeContactChances {
            head: 0.0,
            neck: 0.0,
            torso: 0.0,
            forearm: 0.0,
            hand: 0.0,
            thigh: 0.0,
            calf: 0.0,
            foot: 0.0,
        }
    }

    /// Total weight across both sides of the body
    pub fn total_weight(&self) -> f64 {
        self.head.max(0.0)
            + self.neck.max(0.0)
            + self.torso.max(0.0)
            + 2.0
                * (self.forearm.max(0.0)
                    + self.hand.max(0.0)
                    + self.thigh.max(0.0)
                    + self.calf.max(0.0)
                    + self.foot.max(0.0))
    }

    /// Check every chance is a non-negative number with a finite total
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("head", self.head),
            ("neck", self.neck),
            ("torso", self.torso),
            ("forearm", self.forearm),
            ("hand", self.hand),
            ("thigh", self.thigh),
            ("calf", self.calf),
            ("foot", self.foot),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(format!(
                    "knife chance '{}' must be a non-negative number, got {}",
                    name, value
                ));
            }
        }
        let total = self.total_weight();
        if !total.is_finite() {
            return Err(format!("knife chances sum to {}, which cannot be rolled", total));
        }
        Ok(())
    }

    /// Categories in check order; left foot is the fallback and not listed
    fn check_order(&self) -> [(LimbType, f64); 12] {
        [
            (LimbType::Head, self.head),
            (LimbType::Neck, self.neck),
            (LimbType::Torso, self.torso),
            (LimbType::RightForearm, self.forearm),
            (LimbType::LeftForearm, self.forearm),
            (LimbType::RightHand, self.hand),
            (LimbType::LeftHand, self.hand),
            (LimbType::RightThigh, self.thigh),
            (LimbType::LeftThigh, self.thigh),
            (LimbType::RightCalf, self.calf),
            (LimbType::LeftCalf, self.calf),
            (LimbType::RightFoot, self.foot),
        ]
    }
}

/// Pick the limb a knife contact lands on.
///
/// With no positive weight at all, or weights too large to sum, there is
/// nothing to draw from and the torso is returned.
pub fn select_knife_torso_contact<R: Rng>(chances: &KnifeContactChances, rng: &mut R) -> LimbType {
    let total = chances.total_weight();
    if !total.is_finite() || total <= 0.0 {
        return LimbType::Torso;
    }

    let roll = rng.gen_range(0.0..total);
    knife_contact_for_roll(chances, roll)
}

/// Resolve a roll in `[0, total_weight)` by sequential subtraction
pub(crate) fn knife_contact_for_roll(chances: &KnifeContactChances, roll: f64) -> LimbType {
    let mut remaining = roll;
    for (limb, weight) in chances.check_order() {
        let weight = weight.max(0.0);
        if remaining < weight {
            return limb;
        }
        remaining -= weight;
    }
    LimbType::LeftFoot
}
