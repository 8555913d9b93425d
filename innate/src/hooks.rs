use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A battle event that ability attributes can hook into.
///
/// Every [`Attribute`][`crate::attrs::Attribute`] declares exactly one hook.
/// When the battle reaches the corresponding point, the dispatcher runs all
/// attributes registered for that hook on the affected Mon's ability, in
/// priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeLabeledStringEnum, DeserializeLabeledStringEnum)]
pub enum Hook {
    /// The holder was sent into battle and is now active.
    #[string = "PostSummon"]
    PostSummon,
    /// The holder was hit by a move, after damage was applied.
    #[string = "PostDefend"]
    PostDefend,
    /// A status condition is about to be applied to the holder.
    #[string = "SetStatus"]
    SetStatus,
    /// One of the holder's stat stages is about to be changed by another Mon.
    #[string = "ChangeStatStage"]
    ChangeStatStage,
    /// One of the holder's stats is being read; attributes may scale it.
    #[string = "StatMultiplier"]
    StatMultiplier,
    /// An incoming move is checked for interception before it resolves
    /// against the holder.
    #[string = "TryHit"]
    TryHit,
    /// An incoming move matched a type the holder's ability absorbs.
    #[string = "TypeImmunity"]
    TypeImmunity,
    /// Query hook: the holder's ability may suppress weather entirely.
    #[string = "SuppressWeather"]
    SuppressWeather,
    /// Query hook: the holder's own move may ignore the target's ignorable
    /// abilities.
    #[string = "BypassAbilities"]
    BypassAbilities,
    /// Query hook: the holder's accuracy checks always succeed, in both
    /// directions.
    #[string = "PerfectAccuracy"]
    PerfectAccuracy,
}
