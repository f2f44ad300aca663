use crate::knife::{select_knife_torso_contact, KnifeContactChances};
use crate::registry::HitTableRegistry;
use crate::table::{select_by_probability_table, WeightedLimb};
use crate::TableError;
use body_core::LimbType;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Hit-location roller with its own reproducible random stream.
///
/// Two selectors built from the same seed produce the same sequence of limbs
/// for the same sequence of calls.
#[derive(Debug, Clone)]
pub struct HitSelector {
    rng: ChaCha8Rng,
}

impl HitSelector {
    pub fn from_seed(seed: u64) -> Self {
        HitSelector {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        HitSelector {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn select_weighted(&mut self, entries: &[WeightedLimb]) -> LimbType {
        select_by_probability_table(entries, &mut self.rng)
    }

    pub fn select_knife_contact(&mut self, chances: &KnifeContactChances) -> LimbType {
        select_knife_torso_contact(chances, &mut self.rng)
    }

    /// Roll a named table from the registry
    pub fn select_from(
        &mut self,
        registry: &HitTableRegistry,
        table_id: &str,
    ) -> Result<LimbType, TableError> {
        registry.select(table_id, &mut self.rng)
    }
}
