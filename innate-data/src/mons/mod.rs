mod boost;
mod stat;
mod status;
mod r#type;

pub use boost::{
    Boost,
    BoostTable,
};
pub use stat::{
    Stat,
    StatTable,
};
pub use status::Status;
pub use r#type::Type;
