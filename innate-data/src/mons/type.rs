use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The type of a creature or move.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Type {
    #[string = "Normal"]
    #[default]
    Normal,
    #[string = "Fighting"]
    Fighting,
    #[string = "Flying"]
    Flying,
    #[string = "Poison"]
    Poison,
    #[string = "Ground"]
    Ground,
    #[string = "Rock"]
    Rock,
    #[string = "Bug"]
    Bug,
    #[string = "Ghost"]
    Ghost,
    #[string = "Steel"]
    Steel,
    #[string = "Fire"]
    Fire,
    #[string = "Water"]
    Water,
    #[string = "Grass"]
    Grass,
    #[string = "Electric"]
    Electric,
    #[string = "Psychic"]
    Psychic,
    #[string = "Ice"]
    Ice,
    #[string = "Dragon"]
    Dragon,
    #[string = "Dark"]
    Dark,
    #[string = "Fairy"]
    Fairy,
}

impl Type {
    /// Whether a defender of this type is completely unaffected by moves of the attacking type.
    pub fn immune_to(&self, attacker: Type) -> bool {
        matches!(
            (self, attacker),
            (Type::Ghost, Type::Normal)
                | (Type::Ghost, Type::Fighting)
                | (Type::Normal, Type::Ghost)
                | (Type::Ground, Type::Electric)
                | (Type::Flying, Type::Ground)
                | (Type::Steel, Type::Poison)
                | (Type::Dark, Type::Psychic)
                | (Type::Fairy, Type::Dragon)
        )
    }
}
