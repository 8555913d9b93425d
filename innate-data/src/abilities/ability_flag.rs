use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// An ability-level capability flag.
///
/// The first group changes how other effects may interact with the ability. The second group
/// (`Unimplemented`, `Partial`, `EdgeCase`) is documentation metadata carried through from the
/// catalog; it has no behavior of its own.
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
pub enum AbilityFlag {
    /// The ability can be bypassed by "ignore abilities" effects, such as Mold Breaker.
    #[string = "Ignorable"]
    Ignorable,
    /// The ability cannot be suppressed by ability-suppression effects.
    #[string = "Unsuppressable"]
    Unsuppressable,
    /// The ability cannot be copied by ability-copying effects.
    #[string = "Uncopiable"]
    Uncopiable,
    /// The ability cannot be swapped out by ability-replacement effects.
    #[string = "Unreplaceable"]
    Unreplaceable,
    /// The ability's attributes still fire while the holder has just fainted.
    #[string = "BypassesFaint"]
    BypassesFaint,
    /// The ability is a placeholder with no implemented behavior.
    #[string = "Unimplemented"]
    Unimplemented,
    /// The ability's behavior is only partially implemented.
    #[string = "Partial"]
    Partial,
    /// The ability has known unresolved edge cases.
    #[string = "EdgeCase"]
    EdgeCase,
}
