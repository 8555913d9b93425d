use innate_data::{
    Boost,
    Id,
    Status,
    TerrainType,
    WeatherType,
};

use crate::battle::MonHandle;

/// A request to re-dispatch a move through the full move pipeline, as if
/// `user` had chosen it.
///
/// Produced when a move is reflected. The dispatcher never executes the
/// request itself: it surfaces the request to the move pipeline, which
/// restarts resolution from the top with the reflector as the user. A `None`
/// target means the target should be resolved from the move's own target
/// specification relative to the new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedispatchRequest {
    pub move_id: Id,
    pub user: MonHandle,
    pub target: Option<MonHandle>,
}

/// A game-state change requested by an ability attribute.
///
/// Attributes never mutate battle state directly. They return commands, and
/// the dispatcher routes each command through the corresponding battle
/// pipeline so that other abilities (stat-stage guards, status immunities,
/// and so on) still get a say in the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectCommand {
    /// Apply stat stage changes to a Mon.
    ChangeStatStages {
        target: MonHandle,
        boosts: Vec<(Boost, i8)>,
        /// Marks changes that were already reflected once. Reflection
        /// attributes ignore these, so two reflectors cannot ping-pong a
        /// stat drop forever.
        reflected: bool,
    },
    /// Inflict a status condition on a Mon.
    InflictStatus { target: MonHandle, status: Status },
    /// Damage a Mon by a fraction of its maximum HP.
    DamageFraction {
        target: MonHandle,
        numerator: u16,
        denominator: u16,
    },
    /// Heal a Mon by a fraction of its maximum HP.
    HealFraction {
        target: MonHandle,
        numerator: u16,
        denominator: u16,
    },
    /// Start weather over the field.
    StartWeather { weather: WeatherType },
    /// Start terrain over the field.
    StartTerrain { terrain: TerrainType },
    /// Re-dispatch a move through the move pipeline.
    RedispatchMove(RedispatchRequest),
}

/// The outcome of applying a single ability attribute.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EffectResult {
    /// Whether the attribute did anything at all.
    ///
    /// An attribute whose trigger chance missed, or whose effect turned out
    /// to be impossible against the current game state, reports a skipped
    /// result rather than an error. Errors are reserved for broken
    /// configuration and engine bugs.
    pub applied: bool,
    /// Whether the triggering event should be cancelled outright.
    ///
    /// Cancelling stops the remaining attributes for the same hook from
    /// running and tells the calling pipeline to abandon the event.
    pub cancel: bool,
    /// State changes to route through the battle pipelines.
    pub commands: Vec<EffectCommand>,
}

impl EffectResult {
    /// The attribute did not apply to this event after all.
    pub fn skipped() -> Self {
        Self::default()
    }

    /// The attribute applied.
    pub fn applied() -> Self {
        Self {
            applied: true,
            ..Self::default()
        }
    }

    /// The attribute applied and the triggering event is cancelled.
    pub fn cancelled() -> Self {
        Self {
            applied: true,
            cancel: true,
            ..Self::default()
        }
    }

    /// Adds a command to the result.
    pub fn with_command(mut self, command: EffectCommand) -> Self {
        self.commands.push(command);
        self
    }
}
