use anyhow::Result;
use innate_data::Boost;

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

/// Blocks stat stage lowerings caused by other Mons (Clear Body, Hyper
/// Cutter).
///
/// Guards either every stat or a single one. Lowerings the holder causes to
/// itself are never routed through this hook, so they pass unhindered.
#[derive(Debug)]
pub struct GuardStatStages {
    stat: Option<Boost>,
}

impl GuardStatStages {
    /// Guards the given stat, or all stats when `None`.
    pub fn new(stat: Option<Boost>) -> Self {
        Self { stat }
    }
}

impl Attribute for GuardStatStages {
    fn kind(&self) -> AttrKind {
        AttrKind::GuardStatStages
    }

    fn hook(&self) -> Hook {
        Hook::ChangeStatStage
    }

    fn applies_to(&self, ctx: &EventContext) -> bool {
        match ctx.event {
            EventData::ChangeStatStage { stat, delta, .. } => {
                delta < 0 && self.stat.map(|guarded| guarded == stat).unwrap_or(true)
            }
            _ => false,
        }
    }

    fn apply(&self, _: &mut EventContext) -> Result<EffectResult> {
        Ok(EffectResult::cancelled())
    }
}

/// Returns stat stage lowerings to the Mon that caused them (Mirror Armor).
///
/// The lowering is cancelled on the holder and re-issued against the source
/// with the reflected marker set, so a second reflector cannot send it back
/// again.
#[derive(Debug, Default)]
pub struct ReflectStatStages;

impl Attribute for ReflectStatStages {
    fn kind(&self) -> AttrKind {
        AttrKind::ReflectStatStages
    }

    fn hook(&self) -> Hook {
        Hook::ChangeStatStage
    }

    fn applies_to(&self, ctx: &EventContext) -> bool {
        matches!(
            ctx.event,
            EventData::ChangeStatStage {
                delta,
                reflected: false,
                ..
            } if delta < 0
        ) && ctx.source_handle().is_some()
    }

    fn apply(&self, ctx: &mut EventContext) -> Result<EffectResult> {
        let EventData::ChangeStatStage { stat, delta, .. } = ctx.event else {
            return Ok(EffectResult::skipped());
        };
        let Some(source) = ctx.source_handle() else {
            return Ok(EffectResult::skipped());
        };
        Ok(
            EffectResult::cancelled().with_command(EffectCommand::ChangeStatStages {
                target: source,
                boosts: Vec::from([(stat, delta)]),
                reflected: true,
            }),
        )
    }
}
