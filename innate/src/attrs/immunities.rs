use anyhow::Result;
use innate_data::{
    Boost,
    Status,
    Type,
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
    effect::{
        EffectCommand,
        EffectResult,
    },
    hooks::Hook,
};

/// Blocks a set of status conditions from being applied to the holder
/// (Limber, Insomnia, Immunity).
#[derive(Debug)]
pub struct StatusImmunity {
    statuses: Vec<Status>,
}

impl StatusImmunity {
    pub fn new<I>(statuses: I) -> Result<Self>
    where
        I: IntoIterator<Item = Status>,
    {
        let statuses = statuses.into_iter().collect::<Vec<_>>();
        if statuses.is_empty() {
            return Err(general_error("status immunity requires at least one status"));
        }
        Ok(Self { statuses })
    }
}

impl Attribute for StatusImmunity {
    fn kind(&self) -> AttrKind {
        AttrKind::StatusImmunity
    }

    fn hook(&self) -> Hook {
        Hook::SetStatus
    }

    fn applies_to(&self, ctx: &EventContext) -> bool {
        matches!(ctx.event, EventData::SetStatus { status } if self.statuses.contains(&status))
    }

    fn apply(&self, _: &mut EventContext) -> Result<EffectResult> {
        Ok(EffectResult::cancelled())
    }
}

/// Blocks sound-based moves from affecting the holder (Soundproof).
#[derive(Debug, Default)]
pub struct SoundImmunity;

impl Attribute for SoundImmunity {
    fn kind(&self) -> AttrKind {
        AttrKind::SoundImmunity
    }

    fn hook(&self) -> Hook {
        Hook::TryHit
    }

    fn applies_to(&self, ctx: &EventContext) -> bool {
        matches!(ctx.event, EventData::TryHit { sound: true, .. })
    }

    fn apply(&self, _: &mut EventContext) -> Result<EffectResult> {
        Ok(EffectResult::cancelled())
    }
}

/// Absorbs moves of one type, healing the holder instead (Volt Absorb,
/// Water Absorb).
#[derive(Debug)]
pub struct HealOnTypeImmunity {
    immune_type: Type,
    numerator: u16,
    denominator: u16,
}

impl HealOnTypeImmunity {
    pub fn new(immune_type: Type, numerator: u16, denominator: u16) -> Result<Self> {
        if numerator == 0 || denominator == 0 {
            return Err(general_error("heal fractions must be positive"));
        }
        Ok(Self {
            immune_type,
            numerator,
            denominator,
        })
    }
}

impl Attribute for HealOnTypeImmunity {
    fn kind(&self) -> AttrKind {
        AttrKind::HealOnTypeImmunity
    }

    fn hook(&self) -> Hook {
        Hook::TypeImmunity
    }

    fn applies_to(&self, ctx: &EventContext) -> bool {
        matches!(ctx.event, EventData::TypeImmunity { move_type } if move_type == self.immune_type)
    }

    fn apply(&self, ctx: &mut EventContext) -> Result<EffectResult> {
        Ok(
            EffectResult::cancelled().with_command(EffectCommand::HealFraction {
                target: ctx.holder_handle(),
                numerator: self.numerator,
                denominator: self.denominator,
            }),
        )
    }
}

/// Absorbs moves of one type, raising one of the holder's stats instead
/// (Sap Sipper).
#[derive(Debug)]
pub struct StatStageOnTypeImmunity {
    immune_type: Type,
    stat: Boost,
    stages: i8,
}

impl StatStageOnTypeImmunity {
    pub fn new(immune_type: Type, stat: Boost, stages: i8) -> Result<Self> {
        if stages == 0 {
            return Err(general_error("stat stage change cannot be zero"));
        }
        Ok(Self {
            immune_type,
            stat,
            stages,
        })
    }
}

impl Attribute for StatStageOnTypeImmunity {
    fn kind(&self) -> AttrKind {
        AttrKind::StatStageOnTypeImmunity
    }

    fn hook(&self) -> Hook {
        Hook::TypeImmunity
    }

    fn applies_to(&self, ctx: &EventContext) -> bool {
        matches!(ctx.event, EventData::TypeImmunity { move_type } if move_type == self.immune_type)
    }

    fn apply(&self, ctx: &mut EventContext) -> Result<EffectResult> {
        Ok(
            EffectResult::cancelled().with_command(EffectCommand::ChangeStatStages {
                target: ctx.holder_handle(),
                boosts: Vec::from([(self.stat, self.stages)]),
                reflected: false,
            }),
        )
    }
}
