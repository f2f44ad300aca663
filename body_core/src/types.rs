use serde::{Deserialize, Serialize};
use std::fmt;

/// Anatomical locations a character can be hit at
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimbType {
    Head,
    Neck,
    Torso,
    RightBicep,
    RightForearm,
    RightHand,
    LeftBicep,
    LeftForearm,
    LeftHand,
    RightThigh,
    RightCalf,
    RightFoot,
    LeftThigh,
    LeftCalf,
    LeftFoot,
}

/// Which side of the body a limb sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Center,
    Left,
    Right,
}

impl LimbType {
    /// Get all limb types, torso included
    pub fn all() -> &'static [LimbType] {
        &[
            LimbType::Head,
            LimbType::Neck,
            LimbType::Torso,
            LimbType::RightBicep,
            LimbType::RightForearm,
            LimbType::RightHand,
            LimbType::LeftBicep,
            LimbType::LeftForearm,
            LimbType::LeftHand,
            LimbType::RightThigh,
            LimbType::RightCalf,
            LimbType::RightFoot,
            LimbType::LeftThigh,
            LimbType::LeftCalf,
            LimbType::LeftFoot,
        ]
    }

    /// The joint this limb hangs from in the body hierarchy.
    ///
    /// Arms chain Bicep -> Forearm -> Hand and legs chain Thigh -> Calf -> Foot.
    /// Biceps, thighs and the neck hang from the torso; the head hangs from the neck.
    pub fn parent(&self) -> Option<LimbType> {
        match self {
            LimbType::Torso => None,
            LimbType::Head => Some(LimbType::Neck),
            LimbType::Neck
            | LimbType::RightBicep
            | LimbType::LeftBicep
            | LimbType::RightThigh
            | LimbType::LeftThigh => Some(LimbType::Torso),
            LimbType::RightForearm => Some(LimbType::RightBicep),
            LimbType::RightHand => Some(LimbType::RightForearm),
            LimbType::LeftForearm => Some(LimbType::LeftBicep),
            LimbType::LeftHand => Some(LimbType::LeftForearm),
            LimbType::RightCalf => Some(LimbType::RightThigh),
            LimbType::RightFoot => Some(LimbType::RightCalf),
            LimbType::LeftCalf => Some(LimbType::LeftThigh),
            LimbType::LeftFoot => Some(LimbType::LeftCalf),
        }
    }

    /// Walk up the hierarchy, nearest ancestor first
    pub fn ancestors(&self) -> impl Iterator<Item = LimbType> {
        std::iter::successors(self.parent(), |limb| limb.parent())
    }

    pub fn side(&self) -> Side {
        match self {
            LimbType::Head | LimbType::Neck | LimbType::Torso => Side::Center,
            LimbType::RightBicep
            | LimbType::RightForearm
            | LimbType::RightHand
            | LimbType::RightThigh
            | LimbType::RightCalf
            | LimbType::RightFoot => Side::Right,
            LimbType::LeftBicep
            | LimbType::LeftForearm
            | LimbType::LeftHand
            | LimbType::LeftThigh
            | LimbType::LeftCalf
            | LimbType::LeftFoot => Side::Left,
        }
    }

    pub fn is_torso(&self) -> bool {
        matches!(self, LimbType::Torso)
    }

    pub fn is_arm(&self) -> bool {
        matches!(
            self,
            LimbType::RightBicep
                | LimbType::RightForearm
                | LimbType::RightHand
                | LimbType::LeftBicep
                | LimbType::LeftForearm
                | LimbType::LeftHand
        )
    }

    pub fn is_leg(&self) -> bool {
        matches!(
            self,
            LimbType::RightThigh
                | LimbType::RightCalf
                | LimbType::RightFoot
                | LimbType::LeftThigh
                | LimbType::LeftCalf
                | LimbType::LeftFoot
        )
    }
}

impl fmt::Display for LimbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimbType::Head => write!(f, "Head"),
            LimbType::Neck => write!(f, "Neck"),
            LimbType::Torso => write!(f, "Torso"),
            LimbType::RightBicep => write!(f, "Right Bicep"),
            LimbType::RightForearm => write!(f, "Right Forearm"),
            LimbType::RightHand => write!(f, "Right Hand"),
            LimbType::LeftBicep => write!(f, "Left Bicep"),
            LimbType::LeftForearm => write!(f, "Left Forearm"),
            LimbType::LeftHand => write!(f, "Left Hand"),
            LimbType::RightThigh => write!(f, "Right Thigh"),
            LimbType::RightCalf => write!(f, "Right Calf"),
            LimbType::RightFoot => write!(f, "Right Foot"),
            LimbType::LeftThigh => write!(f, "Left Thigh"),
            LimbType::LeftCalf => write!(f, "Left Calf"),
            LimbType::LeftFoot => write!(f, "Left Foot"),
        }
    }
}

/// Damage types a hit can carry.
///
/// `Generic` is the sentinel for damage with no wound character (falls,
/// scripted damage). It is never listed in a limb's wound history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Blunt,
    Stab,
    Slash,
    #[default]
    Generic,
}

impl DamageType {
    /// Get all damage type variants
    pub fn all() -> &'static [DamageType] {
        &[
            DamageType::Blunt,
            DamageType::Stab,
            DamageType::Slash,
            DamageType::Generic,
        ]
    }

    /// Whether this damage type leaves an entry in wound history
    pub fn is_recorded(&self) -> bool {
        !matches!(self, DamageType::Generic)
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DamageType::Blunt => write!(f, "Blunt"),
            DamageType::Stab => write!(f, "Stab"),
            DamageType::Slash => write!(f, "Slash"),
            DamageType::Generic => write!(f, "Generic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limb_count() {
        assert_eq!(LimbType::all().len(), 15);
    }

    #[test]
    fn test_arm_chain() {
        let chain: Vec<LimbType> = LimbType::RightHand.ancestors().collect();
        assert_eq!(
            chain,
            vec![LimbType::RightForearm, LimbType::RightBicep, LimbType::Torso]
        );
    }

    #[test]
    fn test_head_hangs_from_neck() {
        let chain: Vec<LimbType> = LimbType::Head.ancestors().collect();
        assert_eq!(chain, vec![LimbType::Neck, LimbType::Torso]);
    }

    #[test]
    fn test_every_limb_reaches_torso() {
        for limb in LimbType::all() {
            if limb.is_torso() {
                assert!(limb.parent().is_none());
            } else {
                assert_eq!(limb.ancestors().last(), Some(LimbType::Torso));
            }
        }
    }

    #[test]
    fn test_sides() {
        assert_eq!(LimbType::LeftCalf.side(), Side::Left);
        assert_eq!(LimbType::RightBicep.side(), Side::Right);
        assert_eq!(LimbType::Neck.side(), Side::Center);
    }

    #[test]
    fn test_categories() {
        assert!(LimbType::LeftHand.is_arm());
        assert!(!LimbType::LeftHand.is_leg());
        assert!(LimbType::RightFoot.is_leg());
        assert!(!LimbType::Head.is_arm());
    }

    #[test]
    fn test_generic_not_recorded() {
        assert!(!DamageType::Generic.is_recorded());
        assert!(DamageType::Blunt.is_recorded());
        assert!(DamageType::Stab.is_recorded());
        assert!(DamageType::Slash.is_recorded());
    }

    #[test]
    fn test_snake_case_names() {
        #[derive(Deserialize)]
        struct Probe {
            limb: LimbType,
            damage_type: DamageType,
        }

        let probe: Probe = toml::from_str("limb = \"right_forearm\"\ndamage_type = \"slash\"").unwrap();
        assert_eq!(probe.limb, LimbType::RightForearm);
        assert_eq!(probe.damage_type, DamageType::Slash);
    }
}
