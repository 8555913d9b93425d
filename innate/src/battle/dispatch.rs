use std::sync::Arc;

use anyhow::Result;
use innate_data::{
    AbilityFlag,
    general_error,
};

use crate::{
    battle::{
        BattleState,
        EventContext,
        EventData,
        MonHandle,
        actions,
        logs,
    },
    effect::{
        EffectCommand,
        RedispatchRequest,
    },
    hooks::Hook,
};

/// A single dispatch of an ability hook against one Mon.
#[derive(Debug, Clone)]
pub(crate) struct HookCall {
    pub hook: Hook,
    /// The Mon whose ability is consulted.
    pub holder: MonHandle,
    /// The Mon that caused the event, if any.
    pub source: Option<MonHandle>,
    /// The event originates from a move whose user ignores the holder's
    /// ignorable abilities.
    pub bypass_ignorable: bool,
}

/// What happened when a hook was dispatched.
#[derive(Debug)]
pub(crate) struct HookOutcome {
    /// At least one attribute applied.
    pub applied: bool,
    /// An attribute cancelled the triggering event.
    pub cancelled: bool,
    /// An attribute asked for a move to be re-dispatched. Surfaced to the
    /// move pipeline rather than executed here, so the re-dispatched move
    /// goes through full resolution from the top.
    pub redispatch: Option<RedispatchRequest>,
    /// The event payload, which accumulator attributes may have updated.
    pub event: EventData,
}

impl HookOutcome {
    fn inert(event: EventData) -> Self {
        Self {
            applied: false,
            cancelled: false,
            redispatch: None,
            event,
        }
    }
}

/// Dispatches one hook against one Mon's ability.
///
/// Attributes registered for the hook run in priority order (higher first,
/// registration order breaking ties). Each attribute's predicate and
/// optional conditions gate its effect. Effects return commands, which are
/// routed back through the battle pipelines after the attribute loop so
/// that abilities on other Mons can respond to them.
///
/// The whole dispatch is skipped when the holder has fainted (unless the
/// ability works from a fainted Mon) and when the event source bypasses
/// ignorable abilities and this ability is ignorable.
pub(crate) fn run_hook(
    state: &mut BattleState,
    call: HookCall,
    event: EventData,
) -> Result<HookOutcome> {
    let mon = state.mon(call.holder)?;
    let holder_name = mon.name.clone();
    let fainted = mon.fainted();
    let ability_id = mon.ability.clone();

    // Keep the registry alive independently of the battle state, so that
    // attributes can borrow the state mutably while the definition stays
    // borrowed.
    let registry = Arc::clone(&state.registry);
    let ability = registry.get(&ability_id)?;

    if fainted && !ability.has_flag(AbilityFlag::BypassesFaint) {
        return Ok(HookOutcome::inert(event));
    }
    if call.bypass_ignorable && ability.has_flag(AbilityFlag::Ignorable) {
        return Ok(HookOutcome::inert(event));
    }

    let specs = ability.attrs_for_hook(call.hook);
    if specs.is_empty() {
        return Ok(HookOutcome::inert(event));
    }

    let mut applied = false;
    let mut cancelled = false;
    let mut commands = Vec::new();
    let mut announced = false;

    let mut ctx = EventContext::new(state, call.holder, call.source, event);

    if let Some(condition) = ability.condition() {
        if !condition.evaluate(&ctx) {
            return Ok(HookOutcome::inert(ctx.into_event()));
        }
    }

    for spec in specs {
        if let Some(condition) = spec.condition() {
            if !condition.evaluate(&ctx) {
                continue;
            }
        }
        if !spec.attr().applies_to(&ctx) {
            continue;
        }
        let result = spec.attr().apply(&mut ctx)?;
        if result.applied {
            applied = true;
            if spec.attr().announces() && !announced {
                announced = true;
                ctx.push_log(logs::activate_ability(&holder_name, ability.name()));
            }
        }
        commands.extend(result.commands);
        if result.cancel {
            cancelled = true;
            break;
        }
    }

    let event = ctx.into_event();

    let mut redispatch = None;
    for command in commands {
        match command {
            EffectCommand::RedispatchMove(request) => redispatch = Some(request),
            command => execute_command(state, call.holder, ability.name(), command)?,
        }
    }

    Ok(HookOutcome {
        applied,
        cancelled,
        redispatch,
        event,
    })
}

/// Executes a single command produced by an attribute, routing it through
/// the battle pipeline for that kind of change.
fn execute_command(
    state: &mut BattleState,
    holder: MonHandle,
    ability_name: &str,
    command: EffectCommand,
) -> Result<()> {
    match command {
        EffectCommand::ChangeStatStages {
            target,
            boosts,
            reflected,
        } => {
            actions::change_stat_stages(
                state,
                target,
                Some(holder),
                &boosts,
                reflected,
                false,
                Some(ability_name),
            )?;
        }
        EffectCommand::InflictStatus { target, status } => {
            actions::set_status(state, target, Some(holder), status, false, Some(ability_name))?;
        }
        EffectCommand::DamageFraction {
            target,
            numerator,
            denominator,
        } => {
            actions::damage_fraction(
                state,
                target,
                numerator,
                denominator,
                Some((ability_name, holder)),
            )?;
        }
        EffectCommand::HealFraction {
            target,
            numerator,
            denominator,
        } => {
            actions::heal_fraction(
                state,
                target,
                numerator,
                denominator,
                Some((ability_name, holder)),
            )?;
        }
        EffectCommand::StartWeather { weather } => {
            actions::start_weather(state, weather, Some((ability_name, holder)))?;
        }
        EffectCommand::StartTerrain { terrain } => {
            actions::start_terrain(state, terrain, Some((ability_name, holder)))?;
        }
        EffectCommand::RedispatchMove(_) => {
            return Err(general_error(
                "re-dispatch commands must be surfaced to the move pipeline",
            ));
        }
    }
    Ok(())
}
