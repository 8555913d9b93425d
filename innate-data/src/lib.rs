mod abilities;
mod error;
mod field;
mod id;
mod mons;
mod moves;

pub use abilities::*;
pub use error::*;
pub use field::*;
pub use id::*;
pub use mons::*;
pub use moves::*;
