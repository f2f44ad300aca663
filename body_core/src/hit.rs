//! Hit metadata carried alongside a damage call

use serde::{Deserialize, Serialize};

/// Directions shorter than this are treated as "no direction"
pub const MIN_DIRECTION_MAGNITUDE: f64 = 1e-4;

/// World-space vector
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3 { x, y, z }
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Opaque handle to a physical contact surface owned by the host's physics layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColliderId(pub u64);

impl From<u64> for ColliderId {
    fn from(id: u64) -> Self {
        ColliderId(id)
    }
}

/// Optional context for a hit, used only for cosmetic follow-up (blood, VFX)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HitContext {
    /// Where the hit landed
    pub position: Vec3,
    /// Direction the attack travelled; zero when unknown
    pub direction: Vec3,
    pub is_critical: bool,
    /// The surface that was struck, if known
    pub contact: Option<ColliderId>,
}

impl HitContext {
    pub fn new(position: Vec3, direction: Vec3) -> Self {
        HitContext {
            position,
            direction,
            is_critical: false,
            contact: None,
        }
    }

    pub fn with_critical(mut self, is_critical: bool) -> Self {
        self.is_critical = is_critical;
        self
    }

    pub fn with_contact(mut self, contact: impl Into<ColliderId>) -> Self {
        self.contact = Some(contact.into());
        self
    }

    /// Whether the attack direction is long enough to orient an effect
    pub fn has_direction(&self) -> bool {
        self.direction.magnitude() > MIN_DIRECTION_MAGNITUDE
    }
}
