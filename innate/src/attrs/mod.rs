mod attribute;
mod bounce;
mod contact;
mod immunities;
mod multipliers;
mod presence;
mod stat_stages;
mod summon;

pub use attribute::{
    AttrKind,
    Attribute,
};
pub use bounce::ReflectStatusMoves;
pub use contact::{
    DamageOnContact,
    InflictStatusOnContact,
};
pub use immunities::{
    HealOnTypeImmunity,
    SoundImmunity,
    StatStageOnTypeImmunity,
    StatusImmunity,
};
pub use multipliers::StatStageMultiplier;
pub use presence::{
    BypassTargetAbilities,
    PerfectAccuracy,
    SuppressWeather,
};
pub use stat_stages::{
    GuardStatStages,
    ReflectStatStages,
};
pub use summon::{
    StatStageChangeOnSummon,
    TerrainOnSummon,
    WeatherOnSummon,
};
