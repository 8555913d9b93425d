use anyhow::Result;
use innate_data::{
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

/// May inflict a status condition on an attacker that made contact with the
/// holder (Static, Effect Spore).
///
/// The trigger chance is rolled on the battle's random source. When more
/// than one status is configured, a second roll picks uniformly among them.
#[derive(Debug)]
pub struct InflictStatusOnContact {
    percent_chance: u8,
    statuses: Vec<Status>,
    /// Powder-based effects do not affect Grass types.
    powder: bool,
}

impl InflictStatusOnContact {
    pub fn new<I>(percent_chance: u8, statuses: I, powder: bool) -> Result<Self>
    where
        I: IntoIterator<Item = Status>,
    {
        if percent_chance == 0 || percent_chance > 100 {
            return Err(general_error("trigger chance must be between 1 and 100"));
        }
        let statuses = statuses.into_iter().collect::<Vec<_>>();
        if statuses.is_empty() {
            return Err(general_error("contact status requires at least one status"));
        }
        Ok(Self {
            percent_chance,
            statuses,
            powder,
        })
    }
}

impl Attribute for InflictStatusOnContact {
    fn kind(&self) -> AttrKind {
        AttrKind::InflictStatusOnContact
    }

    fn hook(&self) -> Hook {
        Hook::PostDefend
    }

    fn applies_to(&self, ctx: &EventContext) -> bool {
        if !matches!(ctx.event, EventData::Defend { contact: true, .. }) {
            return false;
        }
        let Some(source) = ctx.source() else {
            return false;
        };
        if source.fainted() || source.status.is_some() {
            return false;
        }
        !(self.powder && source.has_type(Type::Grass))
    }

    fn apply(&self, ctx: &mut EventContext) -> Result<EffectResult> {
        let Some(source) = ctx.source_handle() else {
            return Ok(EffectResult::skipped());
        };
        if !crate::rng::sample::chance(ctx.random_mut(), self.percent_chance as u64, 100) {
            return Ok(EffectResult::skipped());
        }
        let Some(status) = crate::rng::sample::pick(ctx.random_mut(), &self.statuses).copied()
        else {
            return Ok(EffectResult::skipped());
        };
        Ok(
            EffectResult::applied().with_command(EffectCommand::InflictStatus {
                target: source,
                status,
            }),
        )
    }
}

/// Damages an attacker that made contact with the holder by a fraction of
/// its maximum HP (Rough Skin).
#[derive(Debug)]
pub struct DamageOnContact {
    numerator: u16,
    denominator: u16,
}

impl DamageOnContact {
    pub fn new(numerator: u16, denominator: u16) -> Result<Self> {
        if numerator == 0 || denominator == 0 {
            return Err(general_error("damage fractions must be positive"));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }
}

impl Attribute for DamageOnContact {
    fn kind(&self) -> AttrKind {
        AttrKind::DamageOnContact
    }

    fn hook(&self) -> Hook {
        Hook::PostDefend
    }

    fn applies_to(&self, ctx: &EventContext) -> bool {
        matches!(ctx.event, EventData::Defend { contact: true, .. })
            && ctx.source().map(|source| !source.fainted()).unwrap_or(false)
    }

    fn apply(&self, ctx: &mut EventContext) -> Result<EffectResult> {
        let Some(source) = ctx.source_handle() else {
            return Ok(EffectResult::skipped());
        };
        Ok(
            EffectResult::applied().with_command(EffectCommand::DamageFraction {
                target: source,
                numerator: self.numerator,
                denominator: self.denominator,
            }),
        )
    }
}
