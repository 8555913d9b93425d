use innate_data::{
    Boost,
    Id,
    MoveCategory,
    Status,
    Type,
};

use crate::{
    battle::{
        BattleState,
        Mon,
        MonHandle,
    },
    rng::RandomSource,
};

/// The payload of a single dispatched event.
///
/// Each [`Hook`][`crate::hooks::Hook`] has a corresponding payload variant.
/// Some variants are pure inputs; [`EventData::StatMultiplier`] is an
/// accumulator that attributes fold their own multiplier into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventData {
    /// The holder was just sent into battle.
    Summon,
    /// The holder was hit by a move.
    Defend {
        move_id: Id,
        move_type: Type,
        contact: bool,
    },
    /// A status condition is about to be applied to the holder.
    SetStatus { status: Status },
    /// Another Mon is about to change one of the holder's stat stages.
    ChangeStatStage {
        stat: Boost,
        delta: i8,
        /// Set when this change is itself the product of a reflection.
        reflected: bool,
    },
    /// One of the holder's stats is being read. Attributes multiply the
    /// accumulated fraction in place.
    StatMultiplier {
        stat: Boost,
        numerator: u32,
        denominator: u32,
    },
    /// An incoming move is checked for interception before resolving against
    /// the holder.
    TryHit {
        move_id: Id,
        /// The move passed every gate for being reflectable at the holder.
        reflectable: bool,
        sound: bool,
    },
    /// An incoming move's type is checked against the holder's absorption
    /// abilities.
    TypeImmunity { move_type: Type },
    /// Query: does the holder suppress weather?
    SuppressWeather,
    /// Query: does the holder's own move ignore the target's ignorable
    /// abilities?
    BypassAbilities { category: MoveCategory },
    /// Query: do accuracy checks involving the holder always succeed?
    PerfectAccuracy,
}

/// The context an attribute runs in: the battle state, the ability holder,
/// the Mon that caused the event (if any), and the event payload.
///
/// Attribute predicates receive the context immutably and must not observe
/// anything but battle state, so the same state always produces the same
/// answer. Effects receive it mutably, which grants access to the battle's
/// random number generator.
pub struct EventContext<'b> {
    state: &'b mut BattleState,
    holder: MonHandle,
    source: Option<MonHandle>,
    pub event: EventData,
}

impl<'b> EventContext<'b> {
    /// Constructs a context. The caller must have validated `holder` and
    /// `source` against the battle's Mon table.
    pub(crate) fn new(
        state: &'b mut BattleState,
        holder: MonHandle,
        source: Option<MonHandle>,
        event: EventData,
    ) -> Self {
        Self {
            state,
            holder,
            source,
            event,
        }
    }

    pub fn holder_handle(&self) -> MonHandle {
        self.holder
    }

    pub fn source_handle(&self) -> Option<MonHandle> {
        self.source
    }

    /// The Mon whose ability is being dispatched.
    pub fn holder(&self) -> &Mon {
        &self.state.mons[self.holder]
    }

    /// The Mon that caused the event, such as the user of the incoming move.
    pub fn source(&self) -> Option<&Mon> {
        self.source.map(|handle| &self.state.mons[handle])
    }

    pub fn state(&self) -> &BattleState {
        self.state
    }

    /// Active Mons on the side opposite the holder, in position order.
    pub fn active_foes(&self) -> Vec<MonHandle> {
        self.state.active_on_side(1 - self.holder().side)
    }

    /// The battle's random number generator, for effects that roll chances.
    pub fn random_mut(&mut self) -> &mut dyn RandomSource {
        self.state.prng.as_mut()
    }

    /// The category of the move associated with the event, if there is one.
    pub fn move_category(&self) -> Option<MoveCategory> {
        match &self.event {
            EventData::BypassAbilities { category } => Some(*category),
            EventData::TryHit { move_id, .. } | EventData::Defend { move_id, .. } => self
                .state
                .move_data(move_id)
                .ok()
                .map(|move_data| move_data.category),
            _ => None,
        }
    }

    pub(crate) fn push_log(&mut self, entry: String) {
        self.state.log.push(entry);
    }

    pub(crate) fn into_event(self) -> EventData {
        self.event
    }
}
