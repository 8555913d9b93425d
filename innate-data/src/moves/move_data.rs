use ahash::HashSet;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    BoostTable,
    Id,
    MoveCategory,
    MoveFlag,
    MoveTarget,
    Status,
    TerrainType,
    Type,
    WeatherType,
};

fn default_layers() -> u8 {
    1
}

/// The effect a move applies when it hits.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitEffect {
    /// Boost stages applied to the target.
    #[serde(default)]
    pub boosts: Option<BoostTable>,
    /// Status condition inflicted on the target.
    #[serde(default)]
    pub status: Option<Status>,
    /// Percent of max HP restored on the target.
    #[serde(default)]
    pub heal_percent: Option<u8>,
    /// Weather started over the field.
    #[serde(default)]
    pub weather: Option<WeatherType>,
    /// Terrain started over the field.
    #[serde(default)]
    pub terrain: Option<TerrainType>,
    /// Condition added to the targeted side of the field.
    #[serde(default)]
    pub side_condition: Option<Id>,
    /// How many times the side condition can stack.
    #[serde(default = "default_layers")]
    pub side_condition_layers: u8,
}

/// Data about a move, scoped to what ability resolution needs to know.
///
/// The move catalog itself is host data, consumed by reference. Moves are identified by the
/// normalized form of their name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    /// Display name.
    pub name: String,
    /// Move category.
    pub category: MoveCategory,
    /// Move type.
    pub primary_type: Type,
    /// Base power, for damaging moves.
    #[serde(default)]
    pub base_power: u32,
    /// Accuracy as a percentage. `None` means the move is exempt from accuracy checks.
    #[serde(default)]
    pub accuracy: Option<u8>,
    /// Target specification.
    #[serde(default)]
    pub target: MoveTarget,
    /// Move flags.
    #[serde(default)]
    pub flags: HashSet<MoveFlag>,
    /// Effect applied to targets that are hit.
    #[serde(default)]
    pub hit_effect: Option<HitEffect>,
    /// Whether the user is semi-invulnerable while charging this move.
    #[serde(default)]
    pub semi_invulnerable: bool,
    /// Whether the move protects the user from incoming moves for the rest of the turn.
    #[serde(default)]
    pub protects_user: bool,
    /// Overrides the category-based default for whether type immunities are ignored.
    #[serde(default)]
    pub ignore_immunity: Option<bool>,
    /// The move never misses, and pierces semi-invulnerability, when its user has this type.
    #[serde(default)]
    pub perfect_accuracy_for_user_type: Option<Type>,
}

impl MoveData {
    /// The move's identifier, derived from its name.
    pub fn id(&self) -> Id {
        Id::from(self.name.as_str())
    }

    /// Whether the move has the given flag.
    pub fn has_flag(&self, flag: MoveFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// Whether the move is a status move.
    pub fn is_status(&self) -> bool {
        self.category == MoveCategory::Status
    }

    /// Whether the move ignores type-based delivery immunities.
    ///
    /// Status moves ignore type immunities by default; moves like Thunder Wave opt back in.
    pub fn ignores_type_immunity(&self) -> bool {
        self.ignore_immunity.unwrap_or(self.is_status())
    }
}
