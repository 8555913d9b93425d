use innate_data::{
    MoveCategory,
    WeatherType,
};

use crate::battle::EventContext;

/// A reusable predicate gating an ability or one of its attributes.
///
/// Conditions come from a closed set so that every gate stays data-only and
/// inspectable. Like attribute predicates, they are pure functions of the
/// context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// The given weather is in effect, accounting for weather-suppressing
    /// abilities.
    WeatherActive(WeatherType),
    /// The move under consideration is a status move.
    MoveIsStatus,
}

impl Condition {
    pub fn evaluate(&self, ctx: &EventContext) -> bool {
        match self {
            Self::WeatherActive(weather) => ctx.state().effective_weather() == Some(*weather),
            Self::MoveIsStatus => ctx.move_category() == Some(MoveCategory::Status),
        }
    }
}
