use anyhow::Error;
use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    error::general_error,
    mons::Stat,
};

/// A single stat value that can be boosted.
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
pub enum Boost {
    #[string = "atk"]
    #[alias = "Attack"]
    Atk,
    #[string = "def"]
    #[alias = "Defense"]
    Def,
    #[string = "spa"]
    #[alias = "spatk"]
    #[alias = "Special Attack"]
    SpAtk,
    #[string = "spd"]
    #[alias = "spdef"]
    #[alias = "Special Defense"]
    SpDef,
    #[string = "spe"]
    #[alias = "Speed"]
    Spe,
    #[string = "acc"]
    #[alias = "Accuracy"]
    Accuracy,
    #[string = "eva"]
    #[alias = "Evasion"]
    Evasion,
}

impl TryFrom<Stat> for Boost {
    type Error = Error;
    fn try_from(value: Stat) -> Result<Self, Self::Error> {
        match value {
            Stat::HP => Err(general_error("HP cannot be boosted")),
            Stat::Atk => Ok(Self::Atk),
            Stat::Def => Ok(Self::Def),
            Stat::SpAtk => Ok(Self::SpAtk),
            Stat::SpDef => Ok(Self::SpDef),
            Stat::Spe => Ok(Self::Spe),
        }
    }
}

/// The minimum value of a boost stage.
pub const MIN_BOOST: i8 = -6;

/// The maximum value of a boost stage.
pub const MAX_BOOST: i8 = 6;

/// A table of boost stages, one per boostable stat.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoostTable {
    #[serde(default)]
    pub atk: i8,
    #[serde(default)]
    pub def: i8,
    #[serde(default)]
    pub spa: i8,
    #[serde(default)]
    pub spd: i8,
    #[serde(default)]
    pub spe: i8,
    #[serde(default)]
    pub acc: i8,
    #[serde(default)]
    pub eva: i8,
}

impl BoostTable {
    /// Creates a table with a single non-zero entry.
    pub fn single(boost: Boost, value: i8) -> Self {
        let mut table = Self::default();
        table.set(boost, value);
        table
    }

    /// Returns the value for the given boost.
    pub fn get(&self, boost: Boost) -> i8 {
        match boost {
            Boost::Atk => self.atk,
            Boost::Def => self.def,
            Boost::SpAtk => self.spa,
            Boost::SpDef => self.spd,
            Boost::Spe => self.spe,
            Boost::Accuracy => self.acc,
            Boost::Evasion => self.eva,
        }
    }

    /// Sets the value for the given boost, clamped to the legal stage range.
    pub fn set(&mut self, boost: Boost, value: i8) {
        let value = value.clamp(MIN_BOOST, MAX_BOOST);
        match boost {
            Boost::Atk => self.atk = value,
            Boost::Def => self.def = value,
            Boost::SpAtk => self.spa = value,
            Boost::SpDef => self.spd = value,
            Boost::Spe => self.spe = value,
            Boost::Accuracy => self.acc = value,
            Boost::Evasion => self.eva = value,
        }
    }

    /// Iterates over all entries in the table, in a fixed order.
    pub fn entries(&self) -> impl Iterator<Item = (Boost, i8)> {
        [
            (Boost::Atk, self.atk),
            (Boost::Def, self.def),
            (Boost::SpAtk, self.spa),
            (Boost::SpDef, self.spd),
            (Boost::Spe, self.spe),
            (Boost::Accuracy, self.acc),
            (Boost::Evasion, self.eva),
        ]
        .into_iter()
    }

    /// Iterates over all non-zero entries in the table, in a fixed order.
    pub fn non_zero_entries(&self) -> impl Iterator<Item = (Boost, i8)> {
        self.entries().filter(|(_, value)| *value != 0)
    }
}
