//! Prelude module for convenient imports
//!
//! ```rust
//! use vitality_core::prelude::*;
//! ```

// Core types
pub use crate::limb::{Limb, LimbRegistry};
pub use crate::state::{ControlState, VitalityState};

// Damage
pub use crate::damage::{ClothingMitigation, DamageReport, MitigationProvider, NoMitigation};

// Events
pub use crate::events::{DamageDealt, EventRecorder, ObserverId, VitalityEvent, VitalityObserver};

// Wounds and severity
pub use crate::contact::ContactMap;
pub use crate::severity::{classify_severity, SeverityTier, TreatmentGrade};

// Config
pub use crate::config::{
    constants, init_constants, init_constants_default, BodyConfig, ClothingConfig,
    VitalityConstants,
};

// Shared vocabulary
pub use body_core::{ColliderId, DamageType, HitContext, LimbType, Vec3};
pub use hit_tables::{HitSelector, HitTable, HitTableRegistry, KnifeContactChances, WeightedLimb};
