use std::sync::Arc;

use anyhow::Result;
use innate::{
    MoveData,
    abilities::standard_registry,
    battle::{
        BattleState,
        MonData,
    },
    moves::MoveDex,
    rng::{
        Lcrng,
        RandomSource,
    },
};

use crate::{
    moves::standard_moves,
    rng::ControlledRandomSource,
};

/// Battle builder object for integration tests.
///
/// Builds a [`BattleState`] over the standard ability catalog and the test
/// move catalog. Mon handles are assigned in the order Mons are added, side 1
/// before side 2. By default the first Mon added to each side is switched in
/// before the builder returns.
pub struct TestBattleBuilder {
    seed: Option<u64>,
    controlled_rng: bool,
    auto_leads: bool,
    extra_moves: Vec<MoveData>,
    sides: [Vec<MonData>; 2],
}

impl TestBattleBuilder {
    pub fn new() -> Self {
        Self {
            seed: None,
            controlled_rng: false,
            auto_leads: true,
            extra_moves: Vec::new(),
            sides: [Vec::new(), Vec::new()],
        }
    }

    pub fn build(self) -> Result<BattleState> {
        let registry = Arc::new(standard_registry()?);
        let mut moves = standard_moves()?;
        moves.extend(self.extra_moves);
        let moves = MoveDex::new(moves)?;
        let prng: Box<dyn RandomSource> = if self.controlled_rng {
            Box::new(ControlledRandomSource::new(self.seed))
        } else {
            Box::new(Lcrng::new(self.seed))
        };

        let mut state = BattleState::new(registry, moves, prng);
        let mut leads = Vec::new();
        for (side, mons) in self.sides.into_iter().enumerate() {
            for (i, mon) in mons.into_iter().enumerate() {
                let handle = state.join(side, mon)?;
                if i == 0 {
                    leads.push(handle);
                }
            }
        }
        if self.auto_leads {
            for lead in leads {
                state.switch_in(lead)?;
            }
        }
        Ok(state)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_controlled_rng(mut self, controlled_rng: bool) -> Self {
        self.controlled_rng = controlled_rng;
        self
    }

    /// Disables the automatic switch-in of each side's first Mon, for tests
    /// that drive every summon themselves.
    pub fn with_auto_leads(mut self, auto_leads: bool) -> Self {
        self.auto_leads = auto_leads;
        self
    }

    /// Adds a move on top of the standard test catalog.
    pub fn with_move(mut self, mov: MoveData) -> Self {
        self.extra_moves.push(mov);
        self
    }

    pub fn add_mon_to_side_1(mut self, mon: MonData) -> Self {
        self.sides[0].push(mon);
        self
    }

    pub fn add_mon_to_side_2(mut self, mon: MonData) -> Self {
        self.sides[1].push(mon);
        self
    }
}
