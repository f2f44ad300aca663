//! body_core - Anatomy and damage vocabulary
//!
//! Shared by the hit-table and vitality crates:
//! - LimbType: anatomical locations and their parent/child hierarchy
//! - DamageType: the wound character of a hit
//! - HitContext: cosmetic metadata travelling with a damage call

pub mod hit;
pub mod types;

pub use hit::{ColliderId, HitContext, Vec3, MIN_DIRECTION_MAGNITUDE};
pub use types::{DamageType, LimbType, Side};
