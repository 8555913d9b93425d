pub mod abilities;
pub mod attrs;
pub mod battle;
pub mod condition;
pub mod effect;
pub mod hooks;
pub mod log;
pub mod moves;
pub mod rng;

pub use innate_data::*;
