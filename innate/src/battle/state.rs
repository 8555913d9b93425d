use std::sync::Arc;

use anyhow::Result;
use innate_data::{
    Boost,
    Id,
    MoveData,
    Status,
    WeatherType,
    WrapOptionError,
    general_error,
};

use crate::{
    abilities::AbilityRegistry,
    attrs::AttrKind,
    battle::{
        Field,
        Mon,
        MonData,
        MonHandle,
        Side,
        actions,
    },
    log::EventLog,
    moves::MoveDex,
    rng::RandomSource,
};

/// The full state of a battle.
///
/// A battle has exactly two sides. Mons join one side and stay in the Mon
/// table for the battle's lifetime; switching in and out only toggles their
/// active flag. All ability resolution flows through the action methods on
/// this type, which dispatch ability attributes from the shared registry at
/// the appropriate points.
pub struct BattleState {
    pub(crate) registry: Arc<AbilityRegistry>,
    pub(crate) moves: MoveDex,
    pub(crate) mons: Vec<Mon>,
    pub(crate) sides: [Side; 2],
    pub(crate) field: Field,
    pub(crate) prng: Box<dyn RandomSource>,
    pub(crate) log: EventLog,
}

impl BattleState {
    pub fn new(
        registry: Arc<AbilityRegistry>,
        moves: MoveDex,
        prng: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            registry,
            moves,
            mons: Vec::new(),
            sides: [Side::default(), Side::default()],
            field: Field::default(),
            prng,
            log: EventLog::new(),
        }
    }

    /// Adds a Mon to the given side, inactive.
    ///
    /// Fails if the side does not exist or the Mon's ability is not in the
    /// battle's registry.
    pub fn join(&mut self, side: usize, data: MonData) -> Result<MonHandle> {
        if side >= self.sides.len() {
            return Err(general_error(format!("side {side} does not exist")));
        }
        self.registry.get(&data.ability)?;
        let handle = self.mons.len();
        self.mons.push(Mon::new(data, side));
        Ok(handle)
    }

    pub fn mon(&self, handle: MonHandle) -> Result<&Mon> {
        self.mons
            .get(handle)
            .wrap_not_found_error_with_format(format_args!("mon {handle}"))
    }

    pub fn mon_mut(&mut self, handle: MonHandle) -> Result<&mut Mon> {
        self.mons
            .get_mut(handle)
            .wrap_not_found_error_with_format(format_args!("mon {handle}"))
    }

    pub fn side(&self, side: usize) -> Result<&Side> {
        self.sides
            .get(side)
            .wrap_not_found_error_with_format(format_args!("side {side}"))
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn registry(&self) -> &AbilityRegistry {
        &self.registry
    }

    pub fn move_data(&self, move_id: &Id) -> Result<&MoveData> {
        self.moves.get(move_id)
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut EventLog {
        &mut self.log
    }

    pub fn random_mut(&mut self) -> &mut dyn RandomSource {
        self.prng.as_mut()
    }

    /// Active Mons on a side, in position order.
    pub fn active_on_side(&self, side: usize) -> Vec<MonHandle> {
        let mut active = self
            .mons
            .iter()
            .enumerate()
            .filter(|(_, mon)| mon.active && mon.side == side)
            .collect::<Vec<_>>();
        active.sort_by_key(|(_, mon)| mon.position);
        active.into_iter().map(|(handle, _)| handle).collect()
    }

    /// Active Mons on the side opposite the given Mon, in position order.
    pub fn active_foes(&self, handle: MonHandle) -> Result<Vec<MonHandle>> {
        let side = self.mon(handle)?.side;
        Ok(self.active_on_side(1 - side))
    }

    /// The weather currently in effect, accounting for weather-suppressing
    /// abilities anywhere on the field.
    pub fn effective_weather(&self) -> Option<WeatherType> {
        let weather = self.field.weather?;
        let suppressed = self
            .mons
            .iter()
            .enumerate()
            .any(|(handle, mon)| {
                mon.active && !mon.fainted() && self.mon_has_attr(handle, AttrKind::SuppressWeather)
            });
        (!suppressed).then_some(weather)
    }

    /// Whether the Mon's ability carries an attribute of the given kind.
    ///
    /// This is a structural check on the ability definition, used by the
    /// query-style attributes (weather suppression, perfect accuracy) that
    /// must be readable without mutable access to the battle.
    pub(crate) fn mon_has_attr(&self, handle: MonHandle, kind: AttrKind) -> bool {
        let Some(mon) = self.mons.get(handle) else {
            return false;
        };
        self.registry
            .get(&mon.ability)
            .map(|ability| ability.has_attr(kind))
            .unwrap_or(false)
    }

    /// The display name of the Mon's ability.
    pub(crate) fn ability_name(&self, handle: MonHandle) -> Result<String> {
        let mon = self.mon(handle)?;
        Ok(self.registry.get(&mon.ability)?.name().to_owned())
    }

    /// Switches the Mon in, assigning it the next free position on its side
    /// and running its post-summon ability attributes.
    pub fn switch_in(&mut self, mon: MonHandle) -> Result<()> {
        actions::switch_in(self, mon)
    }

    /// Runs a move through the full move pipeline.
    pub fn use_move(
        &mut self,
        user: MonHandle,
        move_id: &Id,
        target: Option<MonHandle>,
    ) -> Result<()> {
        actions::use_move(self, user, move_id, target, actions::MoveUseOptions::default())
    }

    /// Applies a status condition through the status pipeline.
    pub fn set_status(
        &mut self,
        target: MonHandle,
        source: Option<MonHandle>,
        status: Status,
    ) -> Result<bool> {
        actions::set_status(self, target, source, status, false, None)
    }

    /// Applies stat stage changes through the stat-stage pipeline.
    pub fn change_stat_stages(
        &mut self,
        target: MonHandle,
        source: Option<MonHandle>,
        boosts: &[(Boost, i8)],
    ) -> Result<u32> {
        actions::change_stat_stages(self, target, source, boosts, false, false, None)
    }
}
