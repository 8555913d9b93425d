mod actions;
mod context;
mod dispatch;
mod field;
mod logs;
mod mon;
mod side;
mod state;

pub use context::{
    EventContext,
    EventData,
};
pub use field::Field;
pub use mon::{
    Mon,
    MonData,
    MonHandle,
};
pub use side::Side;
pub use state::BattleState;
