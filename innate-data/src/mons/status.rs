use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::mons::Type;

/// A non-volatile status condition.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Status {
    #[string = "Burn"]
    #[alias = "brn"]
    Burn,
    #[string = "Freeze"]
    #[alias = "frz"]
    Freeze,
    #[string = "Paralysis"]
    #[alias = "par"]
    Paralysis,
    #[string = "Poison"]
    #[alias = "psn"]
    Poison,
    #[string = "Bad Poison"]
    #[alias = "tox"]
    BadPoison,
    #[string = "Sleep"]
    #[alias = "slp"]
    Sleep,
}

impl Status {
    /// Types that are intrinsically immune to this status.
    pub fn immune_types(&self) -> &'static [Type] {
        match self {
            Self::Burn => &[Type::Fire],
            Self::Freeze => &[Type::Ice],
            Self::Paralysis => &[Type::Electric],
            Self::Poison | Self::BadPoison => &[Type::Poison, Type::Steel],
            Self::Sleep => &[],
        }
    }

    /// Whether this status can be applied to a creature with the given types.
    pub fn affects(&self, types: &[Type]) -> bool {
        !types.iter().any(|t| self.immune_types().contains(t))
    }
}
