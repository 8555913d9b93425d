use anyhow::Result;
use innate_data::{
    Boost,
    Id,
    MoveData,
    MoveFlag,
    MoveTarget,
    Status,
    TerrainType,
    Type,
    WeatherType,
    general_error,
};

use crate::{
    attrs::AttrKind,
    battle::{
        BattleState,
        EventData,
        MonHandle,
        dispatch::{
            self,
            HookCall,
        },
        logs::{
            self,
            EffectSource,
        },
    },
    effect::RedispatchRequest,
    hooks::Hook,
    rng::sample,
};

/// Options threaded through a single move dispatch.
#[derive(Debug, Default, Clone)]
pub(crate) struct MoveUseOptions {
    /// The move is a reflected copy. Reflected copies skip last-move
    /// bookkeeping and are never reflected again.
    pub bounced: bool,
    /// The ability that re-dispatched the move, named in the move's log
    /// entry.
    pub from_ability: Option<String>,
}

/// Switches a Mon in and runs its post-summon ability attributes.
pub(crate) fn switch_in(state: &mut BattleState, handle: MonHandle) -> Result<()> {
    let position = {
        let side = state.mon(handle)?.side;
        state.active_on_side(side).len()
    };
    let mon = state.mon_mut(handle)?;
    if mon.active {
        return Err(general_error(format!("{} is already active", mon.name)));
    }
    if mon.fainted() {
        return Err(general_error(format!("{} has fainted", mon.name)));
    }
    mon.active = true;
    mon.position = position;
    let name = mon.name.clone();
    let side = mon.side;
    state.log.push(logs::switch(&name, side, position));

    dispatch::run_hook(
        state,
        HookCall {
            hook: Hook::PostSummon,
            holder: handle,
            source: None,
            bypass_ignorable: false,
        },
        EventData::Summon,
    )?;
    Ok(())
}

/// Runs a move through the full move pipeline.
///
/// Resolution order against each Mon target: interception (reflection and
/// sound immunity), type-chart immunity, powder immunity, ability type
/// absorption, protection, accuracy, then the hit itself. Side- and
/// field-targeted moves resolve against the side or field instead, with
/// reflection arbitration across the targeted side's active Mons.
pub(crate) fn use_move(
    state: &mut BattleState,
    user: MonHandle,
    move_id: &Id,
    target: Option<MonHandle>,
    options: MoveUseOptions,
) -> Result<()> {
    let move_data = state.move_data(move_id)?.clone();
    let user_mon = state.mon(user)?;
    if !user_mon.active {
        return Err(general_error(format!("{} is not active", user_mon.name)));
    }
    if user_mon.fainted() {
        return Err(general_error(format!("{} has fainted", user_mon.name)));
    }
    let user_name = user_mon.name.clone();
    let target_name = match target {
        Some(target) => Some(state.mon(target)?.name.clone()),
        None => None,
    };

    if !options.bounced {
        // Acting again ends any protection from an earlier turn, and the
        // chosen move goes on record. Reflected copies were not chosen by
        // their user, so they touch neither.
        let mon = state.mon_mut(user)?;
        mon.protected = false;
        mon.last_move = Some(move_id.clone());
        mon.move_history.push(move_id.clone());
    }

    // Two-turn moves charge on first use and release on the second.
    if move_data.has_flag(MoveFlag::Charge) {
        let mon = state.mon_mut(user)?;
        if mon.charging.as_ref() != Some(move_id) {
            mon.charging = Some(move_id.clone());
            mon.semi_invulnerable = move_data.semi_invulnerable;
            state.log.push(logs::prepare(&user_name, &move_data.name));
            return Ok(());
        }
        mon.charging = None;
        mon.semi_invulnerable = false;
    }

    state.log.push(logs::use_move(
        &user_name,
        &move_data.name,
        target_name.as_deref(),
        options.from_ability.as_deref(),
    ));

    let bypass = attacker_bypasses_abilities(state, user, &move_data)?;

    if move_data.target.affects_side() {
        return resolve_against_side(state, user, &user_name, &move_data, bypass, &options);
    }
    if move_data.target.affects_field() {
        return apply_field_effects(state, &user_name, &move_data);
    }
    if move_data.target.targets_user() {
        return apply_user_effects(state, user, &user_name, &move_data);
    }

    let targets = resolve_mon_targets(state, user, &move_data, target);
    if targets.is_empty() {
        state.log.push(logs::fail(&user_name));
        return Ok(());
    }
    for target in targets {
        resolve_against_target(state, user, target, &move_data, bypass, &options)?;
    }
    Ok(())
}

/// Whether the move is subject to reflection at all: only status moves
/// explicitly flagged as reflectable.
fn reflectable_gates(move_data: &MoveData) -> bool {
    move_data.is_status() && move_data.has_flag(MoveFlag::Reflectable)
}

/// Whether the user's move ignores the targets' ignorable abilities for
/// this execution.
fn attacker_bypasses_abilities(
    state: &mut BattleState,
    user: MonHandle,
    move_data: &MoveData,
) -> Result<bool> {
    let outcome = dispatch::run_hook(
        state,
        HookCall {
            hook: Hook::BypassAbilities,
            holder: user,
            source: None,
            bypass_ignorable: false,
        },
        EventData::BypassAbilities {
            category: move_data.category,
        },
    )?;
    Ok(outcome.applied)
}

fn resolve_mon_targets(
    state: &BattleState,
    user: MonHandle,
    move_data: &MoveData,
    target: Option<MonHandle>,
) -> Vec<MonHandle> {
    let foe_side = 1 - state.mon(user).map(|mon| mon.side).unwrap_or(0);
    if move_data.target.is_spread() {
        return state.active_on_side(foe_side);
    }
    let explicit = target.filter(|target| {
        state
            .mon(*target)
            .map(|mon| mon.active && !mon.fainted())
            .unwrap_or(false)
    });
    explicit
        .or_else(|| state.active_on_side(foe_side).first().copied())
        .into_iter()
        .collect()
}

fn try_hit_interception(
    state: &mut BattleState,
    user: MonHandle,
    holder: MonHandle,
    move_data: &MoveData,
    reflectable: bool,
    bypass: bool,
) -> Result<dispatch::HookOutcome> {
    dispatch::run_hook(
        state,
        HookCall {
            hook: Hook::TryHit,
            holder,
            source: Some(user),
            bypass_ignorable: bypass,
        },
        EventData::TryHit {
            move_id: move_data.id(),
            reflectable,
            sound: move_data.has_flag(MoveFlag::Sound),
        },
    )
}

/// Re-runs a reflected move through the full pipeline with the reflector as
/// its user.
fn redispatch_move(
    state: &mut BattleState,
    reflector: MonHandle,
    request: RedispatchRequest,
) -> Result<()> {
    let ability = state.ability_name(reflector)?;
    log::debug!("redispatching {} from mon {}", request.move_id, request.user);
    use_move(
        state,
        request.user,
        &request.move_id,
        request.target,
        MoveUseOptions {
            bounced: true,
            from_ability: Some(ability),
        },
    )
}

fn resolve_against_side(
    state: &mut BattleState,
    user: MonHandle,
    user_name: &str,
    move_data: &MoveData,
    bypass: bool,
    options: &MoveUseOptions,
) -> Result<()> {
    let user_side = state.mon(user)?.side;
    let target_side = match move_data.target {
        MoveTarget::FoeSide => 1 - user_side,
        _ => user_side,
    };

    if target_side != user_side && reflectable_gates(move_data) && !options.bounced && !bypass {
        // Reflection arbitration: the first eligible reflector in position
        // order bounces the whole move back, once.
        for candidate in state.active_on_side(target_side) {
            if state.mon(candidate)?.semi_invulnerable {
                continue;
            }
            let outcome = try_hit_interception(state, user, candidate, move_data, true, bypass)?;
            if let Some(request) = outcome.redispatch {
                return redispatch_move(state, candidate, request);
            }
        }
    }

    apply_side_effects(state, user_name, target_side, move_data)
}

fn apply_side_effects(
    state: &mut BattleState,
    user_name: &str,
    side: usize,
    move_data: &MoveData,
) -> Result<()> {
    let condition = move_data
        .hit_effect
        .as_ref()
        .and_then(|effect| effect.side_condition.clone());
    let Some(condition) = condition else {
        state.log.push(logs::fail(user_name));
        return Ok(());
    };
    let max_layers = move_data
        .hit_effect
        .as_ref()
        .map(|effect| effect.side_condition_layers)
        .unwrap_or(1);
    match state.sides[side].add_condition_layer(&condition, max_layers) {
        Some(count) => state
            .log
            .push(logs::side_start(side, &move_data.name, count)),
        None => state.log.push(logs::fail(user_name)),
    }
    Ok(())
}

fn apply_field_effects(
    state: &mut BattleState,
    user_name: &str,
    move_data: &MoveData,
) -> Result<()> {
    let Some(effect) = &move_data.hit_effect else {
        state.log.push(logs::fail(user_name));
        return Ok(());
    };
    let mut applied = false;
    if let Some(weather) = effect.weather {
        applied |= start_weather(state, weather, None)?;
    }
    if let Some(terrain) = effect.terrain {
        applied |= start_terrain(state, terrain, None)?;
    }
    if !applied {
        state.log.push(logs::fail(user_name));
    }
    Ok(())
}

fn apply_user_effects(
    state: &mut BattleState,
    user: MonHandle,
    user_name: &str,
    move_data: &MoveData,
) -> Result<()> {
    if move_data.protects_user {
        state.mon_mut(user)?.protected = true;
        state
            .log
            .push(logs::single_turn(user_name, &move_data.name));
        return Ok(());
    }
    let Some(effect) = move_data.hit_effect.clone() else {
        state.log.push(logs::fail(user_name));
        return Ok(());
    };
    let mut applied = 0;
    if let Some(boosts) = &effect.boosts {
        let boosts = boosts.non_zero_entries().collect::<Vec<_>>();
        applied += change_stat_stages(state, user, Some(user), &boosts, false, false, None)?;
    }
    if let Some(status) = effect.status {
        if set_status(state, user, Some(user), status, false, None)? {
            applied += 1;
        }
    }
    if let Some(heal) = effect.heal_percent {
        if heal_fraction(state, user, heal as u16, 100, None)? {
            applied += 1;
        }
    }
    if applied == 0 {
        state.log.push(logs::fail(user_name));
    }
    Ok(())
}

fn resolve_against_target(
    state: &mut BattleState,
    user: MonHandle,
    target: MonHandle,
    move_data: &MoveData,
    bypass: bool,
    options: &MoveUseOptions,
) -> Result<()> {
    let user_name = state.mon(user)?.name.clone();
    let target_name = state.mon(target)?.name.clone();
    let pierces = move_pierces(state, user, target, move_data);
    let sound = move_data.has_flag(MoveFlag::Sound);
    // No reflection while the target is semi-invulnerable: moves that
    // pierce semi-invulnerability hit through it instead, and everything
    // else simply misses.
    let reflectable = reflectable_gates(move_data)
        && !options.bounced
        && !bypass
        && !state.mon(target)?.semi_invulnerable;

    if reflectable || sound {
        let outcome = try_hit_interception(state, user, target, move_data, reflectable, bypass)?;
        if let Some(request) = outcome.redispatch {
            return redispatch_move(state, target, request);
        }
        if outcome.cancelled {
            state.log.push(logs::immune(&target_name));
            return Ok(());
        }
    }

    // Type-chart immunity.
    if !move_data.ignores_type_immunity()
        && state
            .mon(target)?
            .types
            .iter()
            .any(|typ| typ.immune_to(move_data.primary_type))
    {
        state.log.push(logs::immune(&target_name));
        return Ok(());
    }

    // Powder moves do not affect Grass types.
    if move_data.has_flag(MoveFlag::Powder) && state.mon(target)?.has_type(Type::Grass) {
        state.log.push(logs::immune(&target_name));
        return Ok(());
    }

    // Ability-based type absorption.
    let outcome = dispatch::run_hook(
        state,
        HookCall {
            hook: Hook::TypeImmunity,
            holder: target,
            source: Some(user),
            bypass_ignorable: bypass,
        },
        EventData::TypeImmunity {
            move_type: move_data.primary_type,
        },
    )?;
    if outcome.cancelled {
        return Ok(());
    }

    if state.mon(target)?.protected && move_data.has_flag(MoveFlag::Protect) {
        state.log.push(logs::activate_move(&target_name, "Protect"));
        return Ok(());
    }

    if !accuracy_check(state, user, target, move_data, pierces, bypass)? {
        state.log.push(logs::miss(&user_name, &target_name));
        return Ok(());
    }

    apply_move_hit(state, user, target, move_data, bypass)
}

fn move_pierces(
    state: &BattleState,
    user: MonHandle,
    target: MonHandle,
    move_data: &MoveData,
) -> bool {
    if move_data
        .perfect_accuracy_for_user_type
        .map(|typ| {
            state
                .mon(user)
                .map(|mon| mon.has_type(typ))
                .unwrap_or(false)
        })
        .unwrap_or(false)
    {
        return true;
    }
    state.mon_has_attr(user, AttrKind::PerfectAccuracy)
        || state.mon_has_attr(target, AttrKind::PerfectAccuracy)
}

fn stage_multiplier(stage: i8) -> (u64, u64) {
    if stage >= 0 {
        (3 + stage as u64, 3)
    } else {
        (3, 3 + (-stage) as u64)
    }
}

fn multiplier_from_event(event: &EventData) -> (u64, u64) {
    match event {
        EventData::StatMultiplier {
            numerator,
            denominator,
            ..
        } => (*numerator as u64, *denominator as u64),
        _ => (1, 1),
    }
}

/// Rolls the move's accuracy against the target.
///
/// The hit chance starts from the move's base accuracy, scaled by the
/// user's accuracy stage, the target's evasion stage, and any ability stat
/// multipliers on either Mon.
fn accuracy_check(
    state: &mut BattleState,
    user: MonHandle,
    target: MonHandle,
    move_data: &MoveData,
    pierces: bool,
    bypass: bool,
) -> Result<bool> {
    if state.mon(target)?.semi_invulnerable && !pierces {
        return Ok(false);
    }
    if pierces {
        return Ok(true);
    }
    let Some(base) = move_data.accuracy else {
        return Ok(true);
    };

    let (acc_num, acc_den) = stage_multiplier(state.mon(user)?.boosts.acc);
    let (eva_num, eva_den) = stage_multiplier(state.mon(target)?.boosts.eva);

    let outcome = dispatch::run_hook(
        state,
        HookCall {
            hook: Hook::StatMultiplier,
            holder: user,
            source: None,
            bypass_ignorable: false,
        },
        EventData::StatMultiplier {
            stat: Boost::Accuracy,
            numerator: 1,
            denominator: 1,
        },
    )?;
    let (ability_acc_num, ability_acc_den) = multiplier_from_event(&outcome.event);

    let outcome = dispatch::run_hook(
        state,
        HookCall {
            hook: Hook::StatMultiplier,
            holder: target,
            source: Some(user),
            bypass_ignorable: bypass,
        },
        EventData::StatMultiplier {
            stat: Boost::Evasion,
            numerator: 1,
            denominator: 1,
        },
    )?;
    let (ability_eva_num, ability_eva_den) = multiplier_from_event(&outcome.event);

    let numerator = base as u64 * acc_num * eva_den * ability_acc_num * ability_eva_den;
    let denominator = acc_den * eva_num * ability_acc_den * ability_eva_num;
    let percent = (numerator / denominator).min(100);
    Ok(sample::chance(state.prng.as_mut(), percent, 100))
}

fn apply_move_hit(
    state: &mut BattleState,
    user: MonHandle,
    target: MonHandle,
    move_data: &MoveData,
    bypass: bool,
) -> Result<()> {
    if !move_data.is_status() {
        let damage = move_data.base_power.clamp(1, u16::MAX as u32) as u16;
        apply_damage(state, target, damage, None)?;
        if move_data.has_flag(MoveFlag::Contact) {
            dispatch::run_hook(
                state,
                HookCall {
                    hook: Hook::PostDefend,
                    holder: target,
                    source: Some(user),
                    bypass_ignorable: bypass,
                },
                EventData::Defend {
                    move_id: move_data.id(),
                    move_type: move_data.primary_type,
                    contact: true,
                },
            )?;
        }
    }
    if let Some(effect) = move_data.hit_effect.clone() {
        if let Some(boosts) = &effect.boosts {
            let boosts = boosts.non_zero_entries().collect::<Vec<_>>();
            change_stat_stages(state, target, Some(user), &boosts, false, bypass, None)?;
        }
        if let Some(status) = effect.status {
            set_status(state, target, Some(user), status, bypass, None)?;
        }
        if let Some(heal) = effect.heal_percent {
            heal_fraction(state, target, heal as u16, 100, None)?;
        }
        if let Some(weather) = effect.weather {
            start_weather(state, weather, None)?;
        }
        if let Some(terrain) = effect.terrain {
            start_terrain(state, terrain, None)?;
        }
    }
    Ok(())
}

/// Applies stat stage changes to a Mon, one stat at a time.
///
/// Opponent-caused lowerings dispatch the stat-stage hook first, so guard
/// and reflection abilities can block or return them. Returns the number of
/// stats actually changed.
pub(crate) fn change_stat_stages(
    state: &mut BattleState,
    target: MonHandle,
    source: Option<MonHandle>,
    boosts: &[(Boost, i8)],
    reflected: bool,
    bypass: bool,
    from_ability: Option<&str>,
) -> Result<u32> {
    let target_name = state.mon(target)?.name.clone();
    if state.mon(target)?.fainted() {
        return Ok(0);
    }
    let opponent_sourced = source.map(|source| source != target).unwrap_or(false);
    let source_name = match source {
        Some(source) => Some(state.mon(source)?.name.clone()),
        None => None,
    };

    let mut applied = 0;
    for (stat, delta) in boosts.iter().copied() {
        if delta == 0 {
            continue;
        }
        if delta < 0 && opponent_sourced {
            let outcome = dispatch::run_hook(
                state,
                HookCall {
                    hook: Hook::ChangeStatStage,
                    holder: target,
                    source,
                    bypass_ignorable: bypass,
                },
                EventData::ChangeStatStage {
                    stat,
                    delta,
                    reflected,
                },
            )?;
            if outcome.cancelled {
                state.log.push(logs::fail_boost(&target_name, stat));
                continue;
            }
        }

        let mon = state.mon_mut(target)?;
        let old = mon.boosts.get(stat);
        mon.boosts.set(stat, old + delta);
        let diff = mon.boosts.get(stat) - old;
        if diff == 0 {
            state.log.push(logs::fail_boost(&target_name, stat));
            continue;
        }
        let effect_source = from_ability.map(|ability| EffectSource {
            ability,
            of: source_name.as_deref(),
        });
        let entry = if diff > 0 {
            logs::boost(&target_name, stat, diff, effect_source)
        } else {
            logs::unboost(&target_name, stat, -diff, effect_source)
        };
        state.log.push(entry);
        applied += 1;
    }
    Ok(applied)
}

/// Applies a status condition to a Mon through the status pipeline.
///
/// Returns whether the status was actually applied. Already-statused Mons,
/// type-based immunities, and ability immunities all produce a logged no-op.
pub(crate) fn set_status(
    state: &mut BattleState,
    target: MonHandle,
    source: Option<MonHandle>,
    status: Status,
    bypass: bool,
    from_ability: Option<&str>,
) -> Result<bool> {
    let target_name = state.mon(target)?.name.clone();
    {
        let mon = state.mon(target)?;
        if mon.fainted() {
            return Ok(false);
        }
        if mon.status.is_some() {
            state.log.push(logs::fail(&target_name));
            return Ok(false);
        }
        if !status.affects(&mon.types) {
            state.log.push(logs::immune(&target_name));
            return Ok(false);
        }
    }

    let outcome = dispatch::run_hook(
        state,
        HookCall {
            hook: Hook::SetStatus,
            holder: target,
            source,
            bypass_ignorable: bypass,
        },
        EventData::SetStatus { status },
    )?;
    if outcome.cancelled {
        state.log.push(logs::immune(&target_name));
        return Ok(false);
    }

    let source_name = match source {
        Some(source) => Some(state.mon(source)?.name.clone()),
        None => None,
    };
    state.mon_mut(target)?.status = Some(status);
    let effect_source = from_ability.map(|ability| EffectSource {
        ability,
        of: source_name.as_deref(),
    });
    state
        .log
        .push(logs::status(&target_name, status, effect_source));
    Ok(true)
}

/// Deals a flat amount of damage, logging the result and any faint.
pub(crate) fn apply_damage(
    state: &mut BattleState,
    target: MonHandle,
    amount: u16,
    from: Option<(&str, MonHandle)>,
) -> Result<()> {
    let source_name = match from {
        Some((_, holder)) => Some(state.mon(holder)?.name.clone()),
        None => None,
    };
    let mon = state.mon_mut(target)?;
    if mon.fainted() {
        return Ok(());
    }
    mon.hp = mon.hp.saturating_sub(amount.max(1));
    let name = mon.name.clone();
    let health = mon.health();
    let fainted = mon.fainted();
    if fainted {
        mon.active = false;
    }
    let effect_source = from.map(|(ability, _)| EffectSource {
        ability,
        of: source_name.as_deref(),
    });
    state.log.push(logs::damage(&name, &health, effect_source));
    if fainted {
        state.log.push(logs::faint(&name));
    }
    Ok(())
}

/// Deals damage equal to a fraction of the target's maximum HP, at least 1.
pub(crate) fn damage_fraction(
    state: &mut BattleState,
    target: MonHandle,
    numerator: u16,
    denominator: u16,
    from: Option<(&str, MonHandle)>,
) -> Result<()> {
    if denominator == 0 {
        return Err(general_error("damage fraction denominator cannot be zero"));
    }
    let max_hp = state.mon(target)?.max_hp;
    let amount = ((max_hp as u32 * numerator as u32) / denominator as u32).max(1) as u16;
    apply_damage(state, target, amount, from)
}

/// Heals a fraction of the target's maximum HP. Returns whether any HP was
/// restored.
pub(crate) fn heal_fraction(
    state: &mut BattleState,
    target: MonHandle,
    numerator: u16,
    denominator: u16,
    from: Option<(&str, MonHandle)>,
) -> Result<bool> {
    if denominator == 0 {
        return Err(general_error("heal fraction denominator cannot be zero"));
    }
    let source_name = match from {
        Some((_, holder)) => Some(state.mon(holder)?.name.clone()),
        None => None,
    };
    let mon = state.mon_mut(target)?;
    if mon.fainted() {
        return Ok(false);
    }
    let amount = ((mon.max_hp as u32 * numerator as u32) / denominator as u32) as u16;
    let amount = amount.min(mon.max_hp - mon.hp);
    if amount == 0 {
        return Ok(false);
    }
    mon.hp += amount;
    let name = mon.name.clone();
    let health = mon.health();
    let effect_source = from.map(|(ability, _)| EffectSource {
        ability,
        of: source_name.as_deref(),
    });
    state.log.push(logs::heal(&name, &health, effect_source));
    Ok(true)
}

/// Starts weather over the field. Returns whether the weather changed.
pub(crate) fn start_weather(
    state: &mut BattleState,
    weather: WeatherType,
    from: Option<(&str, MonHandle)>,
) -> Result<bool> {
    if state.field.weather == Some(weather) {
        return Ok(false);
    }
    let source_name = match from {
        Some((_, holder)) => Some(state.mon(holder)?.name.clone()),
        None => None,
    };
    state.field.weather = Some(weather);
    let effect_source = from.map(|(ability, _)| EffectSource {
        ability,
        of: source_name.as_deref(),
    });
    state.log.push(logs::weather(weather, effect_source));
    Ok(true)
}

/// Starts terrain over the field. Returns whether the terrain changed.
pub(crate) fn start_terrain(
    state: &mut BattleState,
    terrain: TerrainType,
    from: Option<(&str, MonHandle)>,
) -> Result<bool> {
    if state.field.terrain == Some(terrain) {
        return Ok(false);
    }
    let source_name = match from {
        Some((_, holder)) => Some(state.mon(holder)?.name.clone()),
        None => None,
    };
    state.field.terrain = Some(terrain);
    let effect_source = from.map(|(ability, _)| EffectSource {
        ability,
        of: source_name.as_deref(),
    });
    state.log.push(logs::terrain(terrain, effect_source));
    Ok(true)
}
