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
    effect::{
        EffectCommand,
        EffectResult,
        RedispatchRequest,
    },
    hooks::Hook,
};

/// Reflects reflectable status moves back at their user (Magic Bounce).
///
/// The move pipeline decides whether a move attempt is reflectable at the
/// holder: it must be a status move with the reflectable flag, not itself a
/// reflected copy, not used by an ability-bypassing attacker, and the
/// holder must not be semi-invulnerable. This attribute turns an eligible
/// attempt into a re-dispatch with the holder as the new user. The original
/// application is cancelled outright, before any accuracy check.
#[derive(Debug, Default)]
pub struct ReflectStatusMoves;

impl Attribute for ReflectStatusMoves {
    fn kind(&self) -> AttrKind {
        AttrKind::ReflectStatusMoves
    }

    fn hook(&self) -> Hook {
        Hook::TryHit
    }

    fn applies_to(&self, ctx: &EventContext) -> bool {
        matches!(
            ctx.event,
            EventData::TryHit {
                reflectable: true,
                ..
            }
        )
    }

    fn apply(&self, ctx: &mut EventContext) -> Result<EffectResult> {
        let EventData::TryHit { move_id, .. } = &ctx.event else {
            return Ok(EffectResult::skipped());
        };
        let move_id = move_id.clone();
        // Single-target moves return to their original user. Side-targeted
        // moves carry no Mon target; the pipeline re-resolves the targeted
        // side from the reflector's perspective.
        let target = match ctx.state().move_data(&move_id) {
            Ok(move_data) if move_data.target.affects_side() => None,
            _ => ctx.source_handle(),
        };
        Ok(
            EffectResult::cancelled().with_command(EffectCommand::RedispatchMove(
                RedispatchRequest {
                    move_id,
                    user: ctx.holder_handle(),
                    target,
                },
            )),
        )
    }
}
