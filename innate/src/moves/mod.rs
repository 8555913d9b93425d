mod move_dex;

pub use move_dex::MoveDex;
