use crate::config::TableFileConfig;
use crate::knife::{select_knife_torso_contact, KnifeContactChances};
use crate::TableError;
use body_core::LimbType;
use rand::Rng;

/// A limb and its configured chance of being struck
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedLimb {
    pub limb: LimbType,
    pub chance: f64,
}

impl WeightedLimb {
    pub fn new(limb: LimbType, chance: f64) -> Self {
        WeightedLimb { limb, chance }
    }
}

/// A named hit-location table
#[derive(Debug, Clone)]
pub struct HitTable {
    pub id: String,
    kind: TableKind,
}

#[derive(Debug, Clone)]
enum TableKind {
    Weighted(Vec<WeightedLimb>),
    KnifeContact(KnifeContactChances),
}

impl HitTable {
    /// Table that walks `entries` in order
    pub fn weighted(id: impl Into<String>, entries: Vec<WeightedLimb>) -> Self {
        HitTable {
            id: id.into(),
            kind: TableKind::Weighted(entries),
        }
    }

    /// Table that resolves a knife contact against the torso region
    pub fn knife_contact(id: impl Into<String>, chances: KnifeContactChances) -> Self {
        HitTable {
            id: id.into(),
            kind: TableKind::KnifeContact(chances),
        }
    }

    /// Parse a hit table from config
    pub fn from_config(config: TableFileConfig) -> Result<Self, TableError> {
        let id = config.table.id;
        let invalid = |reason: String| TableError::InvalidTable {
            id: id.clone(),
            reason,
        };

        match config.knife {
            Some(chances) => {
                if !config.entries.is_empty() {
                    return Err(invalid(
                        "a table has either weighted entries or knife chances, not both".to_string(),
                    ));
                }
                chances.validate().map_err(invalid)?;
                Ok(HitTable::knife_contact(id, chances))
            }
            None => {
                let mut entries = Vec::with_capacity(config.entries.len());
                for entry in config.entries {
                    if !entry.chance.is_finite() || entry.chance < 0.0 {
                        return Err(invalid(format!(
                            "chance for {} must be a non-negative number, got {}",
                            entry.limb, entry.chance
                        )));
                    }
                    entries.push(WeightedLimb::new(entry.limb, entry.chance));
                }
                let total: f64 = entries.iter().map(|e| e.chance).sum();
                if !total.is_finite() {
                    return Err(invalid(format!(
                        "chances sum to {}, which cannot be rolled",
                        total
                    )));
                }
                Ok(HitTable::weighted(id, entries))
            }
        }
    }

    /// Weighted entries, if this is a weighted table
    pub fn entries(&self) -> Option<&[WeightedLimb]> {
        match &self.kind {
            TableKind::Weighted(entries) => Some(entries),
            TableKind::KnifeContact(_) => None,
        }
    }

    /// Knife chances, if this is a knife contact table
    pub fn knife_chances(&self) -> Option<&KnifeContactChances> {
        match &self.kind {
            TableKind::Weighted(_) => None,
            TableKind::KnifeContact(chances) => Some(chances),
        }
    }

    /// Roll this table and return the struck limb
    pub fn select<R: Rng>(&self, rng: &mut R) -> LimbType {
        match &self.kind {
            TableKind::Weighted(entries) => select_by_probability_table(entries, rng),
            TableKind::KnifeContact(chances) => select_knife_torso_contact(chances, rng),
        }
    }
}

/// Pick a limb from a probability table.
///
/// Chances are normalized to a 0-100 scale and the draw is compared against
/// the running total in table order; the first entry whose cumulative share
/// reaches the draw wins. Entries with no chance are skipped, so they can
/// never be picked, even on a draw of exactly 0. An empty (or all-zero) table
/// lands on the torso, as does one whose chances are too large to sum.
pub fn select_by_probability_table<R: Rng>(entries: &[WeightedLimb], rng: &mut R) -> LimbType {
    let total: f64 = entries.iter().map(|e| e.chance.max(0.0)).sum();
    if !total.is_finite() || total <= 0.0 {
        return LimbType::Torso;
    }

    let draw = rng.gen_range(0.0..100.0);
    let mut cumulative = 0.0;
    let mut last_eligible = LimbType::Torso;

    for entry in entries {
        if entry.chance <= 0.0 {
            continue;
        }
        cumulative += entry.chance / total * 100.0;
        last_eligible = entry.limb;
        if cumulative >= draw {
            return entry.limb;
        }
    }

    // Rounding can leave the final cumulative a hair under 100
    last_eligible
}
