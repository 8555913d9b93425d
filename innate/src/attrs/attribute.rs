use std::fmt::Debug;

use anyhow::Result;

use crate::{
    battle::EventContext,
    effect::EffectResult,
    hooks::Hook,
};

/// The kind of an attribute.
///
/// Used for structural queries on ability definitions, such as checking
/// whether any active Mon's ability suppresses weather without dispatching
/// an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrKind {
    ReflectStatusMoves,
    ReflectStatStages,
    StatStageMultiplier,
    GuardStatStages,
    StatusImmunity,
    SoundImmunity,
    HealOnTypeImmunity,
    StatStageOnTypeImmunity,
    InflictStatusOnContact,
    DamageOnContact,
    StatStageChangeOnSummon,
    WeatherOnSummon,
    TerrainOnSummon,
    BypassTargetAbilities,
    SuppressWeather,
    PerfectAccuracy,
}

/// A single reusable behavior of an ability.
///
/// Attributes are parameterized at construction and bound to exactly one
/// hook. When the battle dispatches that hook against the ability's holder,
/// the dispatcher calls [`Attribute::applies_to`] to decide whether the
/// attribute triggers, then [`Attribute::apply`] to produce its effect.
pub trait Attribute: Debug + Send + Sync {
    /// The kind of this attribute.
    fn kind(&self) -> AttrKind;

    /// The hook this attribute is dispatched on.
    fn hook(&self) -> Hook;

    /// Whether the attribute triggers for this event.
    ///
    /// Must be a pure function of the context: no randomness, no mutation.
    /// The same battle state and event always produce the same answer.
    fn applies_to(&self, ctx: &EventContext) -> bool;

    /// Applies the attribute, returning its effect on the event and any
    /// commands for the battle pipelines.
    ///
    /// Randomness comes only from the context's random source. Failures of
    /// game logic, such as a missed trigger chance or a target that cannot
    /// be affected, are reported through [`EffectResult::skipped`]; errors
    /// are reserved for broken configuration and engine bugs.
    fn apply(&self, ctx: &mut EventContext) -> Result<EffectResult>;

    /// Whether the attribute's activation is announced in the battle log.
    ///
    /// Query-style attributes and stat multipliers run silently.
    fn announces(&self) -> bool {
        true
    }
}
