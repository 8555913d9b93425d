mod ability_flag;

pub use ability_flag::AbilityFlag;
