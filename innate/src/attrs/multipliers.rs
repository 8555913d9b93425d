use anyhow::Result;
use innate_data::{
    Boost,
    general_error,
};

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

/// Scales one of the holder's stats by a fixed fraction (Compound Eyes,
/// Sand Veil).
///
/// Folds `numerator / denominator` into the stat-multiplier accumulator
/// whenever the matching stat is read. Conditional applications, such as
/// Sand Veil only working in a sandstorm, are expressed through a condition
/// on the attribute's registration rather than here.
#[derive(Debug)]
pub struct StatStageMultiplier {
    stat: Boost,
    numerator: u32,
    denominator: u32,
}

impl StatStageMultiplier {
    pub fn new(stat: Boost, numerator: u32, denominator: u32) -> Result<Self> {
        if numerator == 0 || denominator == 0 {
            return Err(general_error("stat multiplier fractions must be positive"));
        }
        Ok(Self {
            stat,
            numerator,
            denominator,
        })
    }
}

impl Attribute for StatStageMultiplier {
    fn kind(&self) -> AttrKind {
        AttrKind::StatStageMultiplier
    }

    fn hook(&self) -> Hook {
        Hook::StatMultiplier
    }

    fn applies_to(&self, ctx: &EventContext) -> bool {
        matches!(ctx.event, EventData::StatMultiplier { stat, .. } if stat == self.stat)
    }

    fn apply(&self, ctx: &mut EventContext) -> Result<EffectResult> {
        if let EventData::StatMultiplier {
            numerator,
            denominator,
            ..
        } = &mut ctx.event
        {
            *numerator = numerator.saturating_mul(self.numerator);
            *denominator = denominator.saturating_mul(self.denominator);
        }
        Ok(EffectResult::applied())
    }

    fn announces(&self) -> bool {
        false
    }
}
