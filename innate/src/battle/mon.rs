use innate_data::{
    BoostTable,
    Id,
    StatTable,
    Status,
    Type,
};
use serde::{
    Deserialize,
    Serialize,
};

/// A handle to a [`Mon`] within a [`BattleState`][`crate::battle::BattleState`].
///
/// Handles are stable for the lifetime of the battle: Mons are never removed
/// from the battle's Mon table, only deactivated.
pub type MonHandle = usize;

fn default_types() -> Vec<Type> {
    Vec::from([Type::Normal])
}

/// Static data for a single Mon, used to construct its battle form.
///
/// Serializable so that test teams can be written as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonData {
    pub name: String,
    #[serde(default = "default_types")]
    pub types: Vec<Type>,
    /// The Mon's ability, validated against the battle's registry when the
    /// Mon joins.
    pub ability: Id,
    /// Base stats. Defaults to a uniform spread of 100 when omitted.
    #[serde(default)]
    pub stats: Option<StatTable>,
}

/// A single Mon participating in a battle.
#[derive(Debug)]
pub struct Mon {
    pub name: String,
    pub types: Vec<Type>,
    pub ability: Id,
    pub stats: StatTable,
    pub boosts: BoostTable,
    pub status: Option<Status>,
    pub hp: u16,
    pub max_hp: u16,
    pub side: usize,
    /// Position within the side, assigned when the Mon switches in. Ties in
    /// multi-Mon arbitration (such as picking which of two reflectors bounces
    /// a side-targeted move) are broken by position, lowest first.
    pub position: usize,
    pub active: bool,
    /// Set while the Mon is off the field mid-move, such as the first turn
    /// of Fly.
    pub semi_invulnerable: bool,
    /// The two-turn move the Mon is currently charging, if any.
    pub charging: Option<Id>,
    pub protected: bool,
    pub last_move: Option<Id>,
    pub move_history: Vec<Id>,
}

impl Mon {
    pub(crate) fn new(data: MonData, side: usize) -> Self {
        let stats = data.stats.unwrap_or_else(|| StatTable::uniform(100));
        let max_hp = stats.hp.max(1);
        Self {
            name: data.name,
            types: data.types,
            ability: data.ability,
            stats,
            boosts: BoostTable::default(),
            status: None,
            hp: max_hp,
            max_hp,
            side,
            position: 0,
            active: false,
            semi_invulnerable: false,
            charging: None,
            protected: false,
            last_move: None,
            move_history: Vec::new(),
        }
    }

    pub fn fainted(&self) -> bool {
        self.hp == 0
    }

    pub fn has_type(&self, typ: Type) -> bool {
        self.types.contains(&typ)
    }

    /// The Mon's health, in the `hp/max_hp` form used by log entries.
    pub fn health(&self) -> String {
        format!("{}/{}", self.hp, self.max_hp)
    }
}
