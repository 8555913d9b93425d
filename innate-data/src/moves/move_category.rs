use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The category of a move, which determines how damage is calculated (or that no damage is dealt
/// at all).
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
pub enum MoveCategory {
    #[string = "Physical"]
    Physical,
    #[string = "Special"]
    Special,
    #[string = "Status"]
    Status,
}
