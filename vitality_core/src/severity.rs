//! Laceration severity tiers and treatment eligibility

use serde::{Deserialize, Serialize};
use std::fmt;

/// How badly a limb is wounded, derived from its health percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    Light,
    Medium,
    Heavy,
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeverityTier::Light => write!(f, "Light"),
            SeverityTier::Medium => write!(f, "Medium"),
            SeverityTier::Heavy => write!(f, "Heavy"),
        }
    }
}

/// Classify a health percent against the two thresholds.
///
/// Both boundaries are exclusive on the lighter side: a percent exactly at
/// `light_threshold` is Medium, exactly at `heavy_threshold` is Heavy.
pub fn classify_severity(percent: f64, light_threshold: f64, heavy_threshold: f64) -> SeverityTier {
    if percent > light_threshold {
        SeverityTier::Light
    } else if percent > heavy_threshold {
        SeverityTier::Medium
    } else {
        SeverityTier::Heavy
    }
}

/// Strength of a healing item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreatmentGrade {
    Light,
    Medium,
    Heavy,
}

impl TreatmentGrade {
    /// The heaviest wound this treatment can fully close
    pub fn max_tier(&self) -> SeverityTier {
        match self {
            TreatmentGrade::Light => SeverityTier::Light,
            TreatmentGrade::Medium => SeverityTier::Medium,
            TreatmentGrade::Heavy => SeverityTier::Heavy,
        }
    }

    /// A treatment closes wounds of its own grade or lighter
    pub fn can_close(&self, tier: SeverityTier) -> bool {
        tier <= self.max_tier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_ranges() {
        assert_eq!(classify_severity(1.0, 0.66, 0.33), SeverityTier::Light);
        assert_eq!(classify_severity(0.5, 0.66, 0.33), SeverityTier::Medium);
        assert_eq!(classify_severity(0.1, 0.66, 0.33), SeverityTier::Heavy);
        assert_eq!(classify_severity(0.0, 0.66, 0.33), SeverityTier::Heavy);
    }

    #[test]
    fn test_exact_light_threshold_is_medium() {
        assert_eq!(classify_severity(0.66, 0.66, 0.33), SeverityTier::Medium);
    }

    #[test]
    fn test_exact_heavy_threshold_is_heavy() {
        assert_eq!(classify_severity(0.33, 0.66, 0.33), SeverityTier::Heavy);
    }

    #[test]
    fn test_light_treatment_cannot_close_heavy() {
        assert!(TreatmentGrade::Light.can_close(SeverityTier::Light));
        assert!(!TreatmentGrade::Light.can_close(SeverityTier::Medium));
        assert!(!TreatmentGrade::Light.can_close(SeverityTier::Heavy));
    }

    #[test]
    fn test_heavy_treatment_closes_everything() {
        for tier in [SeverityTier::Light, SeverityTier::Medium, SeverityTier::Heavy] {
            assert!(TreatmentGrade::Heavy.can_close(tier));
        }
        assert!(TreatmentGrade::Medium.can_close(SeverityTier::Medium));
        assert!(!TreatmentGrade::Medium.can_close(SeverityTier::Heavy));
    }
}
