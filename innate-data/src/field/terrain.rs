use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A terrain condition active over the entire field.
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
pub enum TerrainType {
    #[string = "Electric"]
    #[alias = "Electric Terrain"]
    Electric,
    #[string = "Grassy"]
    #[alias = "Grassy Terrain"]
    Grassy,
    #[string = "Misty"]
    #[alias = "Misty Terrain"]
    Misty,
    #[string = "Psychic"]
    #[alias = "Psychic Terrain"]
    Psychic,
}
