//! vitality_core - Per-character limb health and wound model
//!
//! This library provides:
//! - VitalityState: torso health, limb registry, aggregate health and death
//! - Damage pipeline: blunt trauma vulnerability, clothing mitigation,
//!   floor-at-zero application, wound accumulators and notification
//! - Wound accumulators: blunt trauma, decaying pain, damage-type history
//! - Severity tiers for treatment eligibility
//! - Contact resolution from physical colliders to limbs
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vitality_core::prelude::*;
//!
//! init_constants_default().unwrap();
//!
//! let mut character = VitalityState::humanoid()
//!     .with_mitigation(ClothingConfig::load_from_path(Path::new("config/clothing.toml"))?.to_provider());
//!
//! let recorder = EventRecorder::new();
//! character.subscribe(recorder.clone());
//!
//! let hit = HitContext::new(Vec3::new(0.0, 1.5, 0.0), Vec3::new(0.0, 0.0, -1.0));
//! let dealt = character.apply_damage(LimbType::Head, 12.0, DamageType::Blunt, Some(hit));
//! println!("Head took {dealt}, now {:?}", character.severity_tier(LimbType::Head));
//!
//! // Once per tick
//! character.decay_pain(1.0 / 60.0);
//! ```

pub mod config;
pub mod contact;
pub mod damage;
pub mod events;
pub mod limb;
pub mod prelude;
pub mod severity;
pub mod state;
pub mod wounds;

// Core API
pub use state::{ControlState, VitalityState};
pub use damage::{ClothingMitigation, DamageReport, MitigationProvider, NoMitigation};
pub use events::{DamageDealt, EventRecorder, ObserverId, VitalityEvent, VitalityObserver};
pub use severity::{SeverityTier, TreatmentGrade};
pub use contact::ContactMap;
pub use limb::Limb;

// Configuration
pub use config::{init_constants, init_constants_default, BodyConfig, ClothingConfig, ConfigError};

// Re-export the shared vocabulary
pub use body_core::{ColliderId, DamageType, HitContext, LimbType, Vec3};
pub use hit_tables::{HitSelector, HitTableRegistry};
