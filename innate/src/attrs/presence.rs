use anyhow::Result;

use crate::{
    attrs::{
        AttrKind,
        Attribute,
    },
    battle::{
        EventContext,
        EventData,
    },
    effect::EffectResult,
    hooks::Hook,
};

/// The holder's own moves ignore ignorable abilities on their targets (Mold
/// Breaker).
///
/// Restricting the bypass to certain moves, such as Mycelium Might only
/// covering status moves, is expressed through a condition on the
/// attribute's registration.
#[derive(Debug, Default)]
pub struct BypassTargetAbilities;

impl Attribute for BypassTargetAbilities {
    fn kind(&self) -> AttrKind {
        AttrKind::BypassTargetAbilities
    }

    fn hook(&self) -> Hook {
        Hook::BypassAbilities
    }

    fn applies_to(&self, ctx: &EventContext) -> bool {
        matches!(ctx.event, EventData::BypassAbilities { .. })
    }

    fn apply(&self, _: &mut EventContext) -> Result<EffectResult> {
        Ok(EffectResult::applied())
    }

    fn announces(&self) -> bool {
        false
    }
}

/// Weather has no effect anywhere on the field while the holder is active
/// (Cloud Nine, Air Lock).
///
/// Consulted structurally through
/// [`BattleState::effective_weather`][`crate::battle::BattleState::effective_weather`]
/// rather than dispatched, so weather checks stay read-only.
#[derive(Debug, Default)]
pub struct SuppressWeather;

impl Attribute for SuppressWeather {
    fn kind(&self) -> AttrKind {
        AttrKind::SuppressWeather
    }

    fn hook(&self) -> Hook {
        Hook::SuppressWeather
    }

    fn applies_to(&self, ctx: &EventContext) -> bool {
        matches!(ctx.event, EventData::SuppressWeather)
    }

    fn apply(&self, _: &mut EventContext) -> Result<EffectResult> {
        Ok(EffectResult::applied())
    }

    fn announces(&self) -> bool {
        false
    }
}

/// Accuracy checks involving the holder always succeed, in both directions,
/// and the holder's moves hit through semi-invulnerability (No Guard).
///
/// Like [`SuppressWeather`], consulted structurally by the accuracy check
/// rather than dispatched.
#[derive(Debug, Default)]
pub struct PerfectAccuracy;

impl Attribute for PerfectAccuracy {
    fn kind(&self) -> AttrKind {
        AttrKind::PerfectAccuracy
    }

    fn hook(&self) -> Hook {
        Hook::PerfectAccuracy
    }

    fn applies_to(&self, ctx: &EventContext) -> bool {
        matches!(ctx.event, EventData::PerfectAccuracy)
    }

    fn apply(&self, _: &mut EventContext) -> Result<EffectResult> {
        Ok(EffectResult::applied())
    }

    fn announces(&self) -> bool {
        false
    }
}
