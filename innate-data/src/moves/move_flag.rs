use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A move property that other effects key off of.
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
pub enum MoveFlag {
    /// The move strikes through substitutes.
    #[string = "Bypasssub"]
    Bypasssub,
    /// The move spends a turn charging before it executes.
    #[string = "Charge"]
    Charge,
    /// The move makes physical contact with its target.
    #[string = "Contact"]
    Contact,
    /// The move is blocked by protection effects.
    #[string = "Protect"]
    Protect,
    /// The move is a powder effect, which some creatures are immune to.
    #[string = "Powder"]
    Powder,
    /// The move can be reflected back at its user by bounce effects.
    #[string = "Reflectable"]
    Reflectable,
    /// The move is sound-based.
    #[string = "Sound"]
    Sound,
}
