mod battle_builder;
mod error_assert;
mod log_assert;
mod moves;
mod rng;

pub use battle_builder::TestBattleBuilder;
pub use error_assert::{
    assert_error_message,
    assert_error_message_contains,
};
pub use log_assert::{
    assert_logs_since_start_eq,
    assert_new_logs_eq,
};
pub use moves::standard_moves;
pub use rng::{
    ControlledRandomSource,
    get_controlled_rng_for_battle,
};
