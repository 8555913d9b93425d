use std::{
    any::Any,
    collections::hash_map::Entry,
};

use ahash::{
    HashMap,
    HashMapExt,
};
use innate::{
    battle::BattleState,
    rng::{
        Lcrng,
        RandomSource,
    },
};

/// A controlled random source, for tests that need fine-grained control over battle RNG.
///
/// Values are faked by position in the random sequence: the `n`-th draw after battle start
/// returns the faked value if one was inserted for position `n`, and the real generator's value
/// otherwise.
pub struct ControlledRandomSource {
    count: usize,
    fake_values: HashMap<usize, u64>,
    real: Lcrng,
}

impl ControlledRandomSource {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            count: 0,
            fake_values: HashMap::new(),
            real: Lcrng::new(seed),
        }
    }

    /// How many values have been drawn from the source so far.
    pub fn sequence_count(&self) -> usize {
        self.count
    }

    pub fn insert_fake_value(&mut self, count: usize, value: u64) {
        self.fake_values.insert(count, value);
    }

    pub fn insert_fake_values<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        self.fake_values.extend(iterable);
    }

    pub fn insert_fake_values_relative_to_sequence_count<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        self.fake_values.extend(
            iterable
                .into_iter()
                .map(|(count, value)| (count + self.count, value)),
        );
    }
}

impl RandomSource for ControlledRandomSource {
    fn initial_seed(&self) -> u64 {
        self.real.initial_seed()
    }

    fn next_u64(&mut self) -> u64 {
        // Roll the underlying source to keep the sequence consistent, even if
        // the value goes unused.
        let next = self.real.next_u64();
        self.count += 1;
        match self.fake_values.entry(self.count) {
            Entry::Occupied(entry) => entry.remove(),
            Entry::Vacant(_) => next,
        }
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Returns the battle's random source as a [`ControlledRandomSource`], if the battle was built
/// with one.
pub fn get_controlled_rng_for_battle(
    state: &mut BattleState,
) -> Option<&mut ControlledRandomSource> {
    state
        .random_mut()
        .as_any_mut()
        .downcast_mut::<ControlledRandomSource>()
}
