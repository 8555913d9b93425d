use anyhow::Result;
use innate_data::{
    Boost,
    TerrainType,
    WeatherType,
    general_error,
};

use crate::{
    attrs::{
        AttrKind,
        Attribute,
    },
    battle::{
        EventContext,
        EventData,
    },
    effect::{
        EffectCommand,
        EffectResult,
    },
    hooks::Hook,
};

/// Changes stat stages of every active foe when the holder is summoned
/// (Intimidate).
///
/// Each foe gets its own stat-stage command, so each foe's own guard or
/// reflection ability answers for itself. Foes are processed in position
/// order.
#[derive(Debug)]
pub struct StatStageChangeOnSummon {
    boosts: Vec<(Boost, i8)>,
}

impl StatStageChangeOnSummon {
    pub fn new<I>(boosts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Boost, i8)>,
    {
        let boosts = boosts.into_iter().collect::<Vec<_>>();
        if boosts.is_empty() || boosts.iter().any(|(_, stages)| *stages == 0) {
            return Err(general_error("summon stat changes must be non-zero"));
        }
        Ok(Self { boosts })
    }
}

impl Attribute for StatStageChangeOnSummon {
    fn kind(&self) -> AttrKind {
        AttrKind::StatStageChangeOnSummon
    }

    fn hook(&self) -> Hook {
        Hook::PostSummon
    }

    fn applies_to(&self, ctx: &EventContext) -> bool {
        matches!(ctx.event, EventData::Summon) && !ctx.active_foes().is_empty()
    }

    fn apply(&self, ctx: &mut EventContext) -> Result<EffectResult> {
        let mut result = EffectResult::applied();
        for foe in ctx.active_foes() {
            result = result.with_command(EffectCommand::ChangeStatStages {
                target: foe,
                boosts: self.boosts.clone(),
                reflected: false,
            });
        }
        Ok(result)
    }
}

/// Starts weather when the holder is summoned (Drizzle, Drought, Sand
/// Stream).
#[derive(Debug)]
pub struct WeatherOnSummon {
    weather: WeatherType,
}

impl WeatherOnSummon {
    pub fn new(weather: WeatherType) -> Self {
        Self { weather }
    }
}

impl Attribute for WeatherOnSummon {
    fn kind(&self) -> AttrKind {
        AttrKind::WeatherOnSummon
    }

    fn hook(&self) -> Hook {
        Hook::PostSummon
    }

    fn applies_to(&self, ctx: &EventContext) -> bool {
        matches!(ctx.event, EventData::Summon)
            && ctx.state().field().weather != Some(self.weather)
    }

    fn apply(&self, _: &mut EventContext) -> Result<EffectResult> {
        Ok(EffectResult::applied().with_command(EffectCommand::StartWeather {
            weather: self.weather,
        }))
    }
}

/// Starts terrain when the holder is summoned (Electric Surge).
#[derive(Debug)]
pub struct TerrainOnSummon {
    terrain: TerrainType,
}

impl TerrainOnSummon {
    pub fn new(terrain: TerrainType) -> Self {
        Self { terrain }
    }
}

impl Attribute for TerrainOnSummon {
    fn kind(&self) -> AttrKind {
        AttrKind::TerrainOnSummon
    }

    fn hook(&self) -> Hook {
        Hook::PostSummon
    }

    fn applies_to(&self, ctx: &EventContext) -> bool {
        matches!(ctx.event, EventData::Summon)
            && ctx.state().field().terrain != Some(self.terrain)
    }

    fn apply(&self, _: &mut EventContext) -> Result<EffectResult> {
        Ok(EffectResult::applied().with_command(EffectCommand::StartTerrain {
            terrain: self.terrain,
        }))
    }
}
