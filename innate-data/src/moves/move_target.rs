use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// What a move targets when it is used.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum MoveTarget {
    /// One creature adjacent to the user, chosen when the move is used.
    #[string = "Normal"]
    #[default]
    Normal,
    /// Any single creature, chosen when the move is used.
    #[string = "Any"]
    Any,
    /// Every foe adjacent to the user.
    #[string = "AllAdjacentFoes"]
    AllAdjacentFoes,
    /// Every creature adjacent to the user, allies included.
    #[string = "AllAdjacent"]
    AllAdjacent,
    /// The side of the field opposing the user.
    #[string = "FoeSide"]
    FoeSide,
    /// The user's own side of the field.
    #[string = "AllySide"]
    AllySide,
    /// The entire field.
    #[string = "Field"]
    Field,
    /// The user itself.
    #[string = "User"]
    User,
}

impl MoveTarget {
    /// Whether the move is applied to a side of the field rather than to creatures.
    pub fn affects_side(&self) -> bool {
        matches!(self, Self::FoeSide | Self::AllySide)
    }

    /// Whether the move is applied to the field as a whole.
    pub fn affects_field(&self) -> bool {
        matches!(self, Self::Field)
    }

    /// Whether the move is applied only to the user.
    pub fn targets_user(&self) -> bool {
        matches!(self, Self::User)
    }

    /// Whether the move hits multiple creatures at once.
    pub fn is_spread(&self) -> bool {
        matches!(self, Self::AllAdjacentFoes | Self::AllAdjacent)
    }

    /// Whether a target choice is meaningful for the move.
    pub fn choosable(&self) -> bool {
        matches!(self, Self::Normal | Self::Any)
    }
}
