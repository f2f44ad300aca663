//! Blunt trauma: damage from blunt hits, accumulated per limb and never healed

use body_core::LimbType;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct BluntTrauma {
    by_limb: HashMap<LimbType, f64>,
}

impl BluntTrauma {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated trauma on a limb (0 if never hit)
    pub fn get(&self, limb: LimbType) -> f64 {
        self.by_limb.get(&limb).copied().unwrap_or(0.0)
    }

    /// Add trauma; non-positive amounts are ignored so the total never drops
    pub fn add(&mut self, limb: LimbType, amount: f64) {
        if amount.is_nan() || amount <= 0.0 {
            return;
        }
        *self.by_limb.entry(limb).or_insert(0.0) += amount;
    }

    pub fn total(&self) -> f64 {
        self.by_limb.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates() {
        let mut trauma = BluntTrauma::new();
        trauma.add(LimbType::Head, 10.0);
        trauma.add(LimbType::Head, 5.0);
        trauma.add(LimbType::Torso, 1.0);
        assert!((trauma.get(LimbType::Head) - 15.0).abs() < f64::EPSILON);
        assert!((trauma.total() - 16.0).abs() < f64::EPSILON);
        assert_eq!(trauma.get(LimbType::LeftFoot), 0.0);
    }

    #[test]
    fn test_never_decreases() {
        let mut trauma = BluntTrauma::new();
        trauma.add(LimbType::Neck, 3.0);
        trauma.add(LimbType::Neck, -10.0);
        trauma.add(LimbType::Neck, f64::NAN);
        assert!((trauma.get(LimbType::Neck) - 3.0).abs() < f64::EPSILON);
    }
}
