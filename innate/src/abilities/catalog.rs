use anyhow::Result;
use innate_data::{
    Boost,
    Status,
    TerrainType,
    Type,
    WeatherType,
};

use crate::{
    abilities::{
        AbilityBuilder,
        AbilityDefinition,
        AbilityRegistry,
    },
    attrs::{
        BypassTargetAbilities,
        DamageOnContact,
        GuardStatStages,
        HealOnTypeImmunity,
        InflictStatusOnContact,
        PerfectAccuracy,
        ReflectStatStages,
        ReflectStatusMoves,
        SoundImmunity,
        StatStageChangeOnSummon,
        StatStageMultiplier,
        StatStageOnTypeImmunity,
        StatusImmunity,
        SuppressWeather,
        TerrainOnSummon,
        WeatherOnSummon,
    },
    condition::Condition,
};

/// The standard ability catalog.
///
/// Abilities whose behavior falls outside the attribute set carry the
/// `Unimplemented` or `Partial` flag so that callers can distinguish "does
/// nothing" from "not yet modeled."
pub fn standard_definitions() -> Result<Vec<AbilityDefinition>> {
    Ok(Vec::from([
        AbilityBuilder::new("No Ability", 3).build(),
        AbilityBuilder::new("Drizzle", 3)
            .attr(WeatherOnSummon::new(WeatherType::Rain))
            .build(),
        AbilityBuilder::new("Limber", 3)
            .attr(StatusImmunity::new([Status::Paralysis])?)
            .ignorable()
            .build(),
        AbilityBuilder::new("Sand Veil", 3)
            .attr(StatStageMultiplier::new(Boost::Evasion, 6, 5)?)
            .condition(Condition::WeatherActive(WeatherType::Sandstorm))
            .ignorable()
            .build(),
        AbilityBuilder::new("Static", 3)
            .attr(InflictStatusOnContact::new(30, [Status::Paralysis], false)?)
            .bypasses_faint()
            .build(),
        AbilityBuilder::new("Volt Absorb", 3)
            .attr(HealOnTypeImmunity::new(Type::Electric, 1, 4)?)
            .ignorable()
            .build(),
        AbilityBuilder::new("Water Absorb", 3)
            .attr(HealOnTypeImmunity::new(Type::Water, 1, 4)?)
            .ignorable()
            .build(),
        AbilityBuilder::new("Cloud Nine", 3)
            .attr(SuppressWeather)
            .build(),
        AbilityBuilder::new("Compound Eyes", 3)
            .attr(StatStageMultiplier::new(Boost::Accuracy, 13, 10)?)
            .build(),
        AbilityBuilder::new("Insomnia", 3)
            .attr(StatusImmunity::new([Status::Sleep])?)
            .ignorable()
            .build(),
        AbilityBuilder::new("Immunity", 3)
            .attr(StatusImmunity::new([Status::Poison, Status::BadPoison])?)
            .ignorable()
            .build(),
        AbilityBuilder::new("Intimidate", 3)
            .attr(StatStageChangeOnSummon::new([(Boost::Atk, -1)])?)
            .build(),
        AbilityBuilder::new("Rough Skin", 3)
            .attr(DamageOnContact::new(1, 8)?)
            .bypasses_faint()
            .build(),
        // Filtering damage by type effectiveness is not modeled.
        AbilityBuilder::new("Wonder Guard", 3)
            .uncopiable()
            .ignorable()
            .unimplemented()
            .build(),
        AbilityBuilder::new("Effect Spore", 3)
            .attr(InflictStatusOnContact::new(
                10,
                [Status::Poison, Status::Paralysis, Status::Sleep],
                true,
            )?)
            .build(),
        AbilityBuilder::new("Clear Body", 3)
            .attr(GuardStatStages::new(None))
            .ignorable()
            .build(),
        AbilityBuilder::new("Soundproof", 3)
            .attr(SoundImmunity)
            .ignorable()
            .build(),
        AbilityBuilder::new("Sand Stream", 3)
            .attr(WeatherOnSummon::new(WeatherType::Sandstorm))
            .build(),
        AbilityBuilder::new("Keen Eye", 3)
            .attr(GuardStatStages::new(Some(Boost::Accuracy)))
            .ignorable()
            .build(),
        AbilityBuilder::new("Hyper Cutter", 3)
            .attr(GuardStatStages::new(Some(Boost::Atk)))
            .ignorable()
            .build(),
        AbilityBuilder::new("Drought", 3)
            .attr(WeatherOnSummon::new(WeatherType::Sun))
            .build(),
        AbilityBuilder::new("Vital Spirit", 3)
            .attr(StatusImmunity::new([Status::Sleep])?)
            .ignorable()
            .build(),
        AbilityBuilder::new("White Smoke", 3)
            .attr(GuardStatStages::new(None))
            .ignorable()
            .build(),
        AbilityBuilder::new("Air Lock", 3)
            .attr(SuppressWeather)
            .build(),
        AbilityBuilder::new("No Guard", 4)
            .attr(PerfectAccuracy)
            .build(),
        AbilityBuilder::new("Mold Breaker", 4)
            .attr(BypassTargetAbilities)
            .build(),
        // Form changes are not modeled.
        AbilityBuilder::new("Multitype", 4)
            .uncopiable()
            .unsuppressable()
            .unreplaceable()
            .unimplemented()
            .build(),
        AbilityBuilder::new("Magic Bounce", 5)
            .attr(ReflectStatusMoves)
            .ignorable()
            .edge_case()
            .build(),
        AbilityBuilder::new("Sap Sipper", 5)
            .attr(StatStageOnTypeImmunity::new(Type::Grass, Boost::Atk, 1)?)
            .ignorable()
            .build(),
        AbilityBuilder::new("Turboblaze", 5)
            .attr(BypassTargetAbilities)
            .build(),
        AbilityBuilder::new("Teravolt", 5)
            .attr(BypassTargetAbilities)
            .build(),
        AbilityBuilder::new("Electric Surge", 7)
            .attr(TerrainOnSummon::new(TerrainType::Electric))
            .build(),
        AbilityBuilder::new("Mirror Armor", 8)
            .attr(ReflectStatStages)
            .ignorable()
            .build(),
        // Field-wide ability suppression is not modeled.
        AbilityBuilder::new("Neutralizing Gas", 8)
            .uncopiable()
            .unimplemented()
            .build(),
        // The priority bypass applies only to the ability-ignoring half; the
        // move ordering half lives in the turn engine.
        AbilityBuilder::new("Mycelium Might", 9)
            .conditional_attr(BypassTargetAbilities, Condition::MoveIsStatus)
            .partial()
            .build(),
    ]))
}

/// A registry over [`standard_definitions`].
pub fn standard_registry() -> Result<AbilityRegistry> {
    AbilityRegistry::new(standard_definitions()?)
}
