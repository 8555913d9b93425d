//! Constructors for the battle's public log entries.
//!
//! Keeping every entry format in one place makes the log's shape easy to
//! audit, and keeps the pipelines in [`actions`][`crate::battle::actions`]
//! free of string formatting.

use innate_data::{
    Boost,
    Status,
    TerrainType,
    WeatherType,
};

use crate::log_entry;

/// The ability an effect came from, for `from:ability:...|of:...` log tags.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EffectSource<'s> {
    pub ability: &'s str,
    pub of: Option<&'s str>,
}

fn with_source(mut entry: String, mon: &str, source: Option<EffectSource>) -> String {
    if let Some(source) = source {
        entry.push_str(&format!("|from:ability:{}", source.ability));
        if let Some(of) = source.of {
            if of != mon {
                entry.push_str(&format!("|of:{of}"));
            }
        }
    }
    entry
}

pub(crate) fn switch(mon: &str, side: usize, position: usize) -> String {
    log_entry!("switch", ("mon", mon), ("side", side), ("position", position))
}

pub(crate) fn use_move(
    mon: &str,
    move_name: &str,
    target: Option<&str>,
    from_ability: Option<&str>,
) -> String {
    let mut entry = log_entry!("move", ("mon", mon), ("name", move_name));
    if let Some(target) = target {
        entry.push_str(&format!("|target:{target}"));
    }
    if let Some(ability) = from_ability {
        entry.push_str(&format!("|from:ability:{ability}"));
    }
    entry
}

pub(crate) fn prepare(mon: &str, move_name: &str) -> String {
    log_entry!("prepare", ("mon", mon), ("move", move_name))
}

pub(crate) fn activate_ability(mon: &str, ability: &str) -> String {
    log_entry!("activate", ("mon", mon), ("ability", ability))
}

pub(crate) fn activate_move(mon: &str, move_name: &str) -> String {
    log_entry!("activate", ("mon", mon), ("move", move_name))
}

pub(crate) fn single_turn(mon: &str, move_name: &str) -> String {
    log_entry!("singleturn", ("mon", mon), ("move", move_name))
}

pub(crate) fn fail(mon: &str) -> String {
    log_entry!("fail", ("mon", mon))
}

pub(crate) fn fail_boost(mon: &str, stat: Boost) -> String {
    log_entry!("fail", ("mon", mon), ("stat", stat))
}

pub(crate) fn immune(mon: &str) -> String {
    log_entry!("immune", ("mon", mon))
}

pub(crate) fn miss(mon: &str, target: &str) -> String {
    log_entry!("miss", ("mon", mon), ("target", target))
}

pub(crate) fn boost(mon: &str, stat: Boost, by: i8, source: Option<EffectSource>) -> String {
    with_source(
        log_entry!("boost", ("mon", mon), ("stat", stat), ("by", by)),
        mon,
        source,
    )
}

pub(crate) fn unboost(mon: &str, stat: Boost, by: i8, source: Option<EffectSource>) -> String {
    with_source(
        log_entry!("unboost", ("mon", mon), ("stat", stat), ("by", by)),
        mon,
        source,
    )
}

pub(crate) fn status(mon: &str, status: Status, source: Option<EffectSource>) -> String {
    with_source(
        log_entry!("status", ("mon", mon), ("status", status)),
        mon,
        source,
    )
}

pub(crate) fn damage(mon: &str, health: &str, source: Option<EffectSource>) -> String {
    with_source(
        log_entry!("damage", ("mon", mon), ("health", health)),
        mon,
        source,
    )
}

pub(crate) fn heal(mon: &str, health: &str, source: Option<EffectSource>) -> String {
    with_source(
        log_entry!("heal", ("mon", mon), ("health", health)),
        mon,
        source,
    )
}

pub(crate) fn faint(mon: &str) -> String {
    log_entry!("faint", ("mon", mon))
}

pub(crate) fn weather(weather: WeatherType, source: Option<EffectSource>) -> String {
    with_source(log_entry!("weather", ("weather", weather)), "", source)
}

pub(crate) fn terrain(terrain: TerrainType, source: Option<EffectSource>) -> String {
    with_source(log_entry!("terrain", ("terrain", terrain)), "", source)
}

pub(crate) fn side_start(side: usize, move_name: &str, count: u8) -> String {
    log_entry!("sidestart", ("side", side), ("move", move_name), ("count", count))
}
