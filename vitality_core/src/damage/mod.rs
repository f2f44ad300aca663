//! Damage system - multi-stage pipeline from raw hit to health loss

mod mitigation;
mod pipeline;
mod report;

pub use mitigation::{
    calculate_mitigation_multiplier, calculate_vulnerability_multiplier, ClothingMitigation,
    MitigationProvider, NoMitigation,
};
pub use report::DamageReport;
