pub mod sample;

use std::any::Any;

use rand::Rng;

/// A source of pseudo-random numbers whose sequence can be deterministically replayed.
///
/// Battle simulations draw every random decision (probability gates, uniform picks, shuffles)
/// from an explicit source like this one, so two simulations created with the same seed produce
/// identical outcomes.
pub trait RandomSource: Send + Sync {
    /// The seed the source was created with.
    ///
    /// Replaying a simulation with this seed reproduces the sequence exactly.
    fn initial_seed(&self) -> u64;

    /// The next integer in the sequence.
    fn next_u64(&mut self) -> u64;

    /// Mutable cast to [`Any`], for tests that need to reach the concrete source.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// The standard [`RandomSource`]: a linear congruential generator.
pub struct Lcrng {
    initial_seed: u64,
    seed: u64,
}

impl Lcrng {
    // Multiplier and increment used by the generation V and VI games.
    const MULTIPLIER: u64 = 0x5D588B656C078965;
    const INCREMENT: u64 = 0x0000000000269EC3;

    /// Creates a new generator, drawing a seed from the operating system if none is given.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        Self {
            initial_seed: seed,
            seed,
        }
    }
}

impl RandomSource for Lcrng {
    fn initial_seed(&self) -> u64 {
        self.initial_seed
    }

    fn next_u64(&mut self) -> u64 {
        self.seed = self
            .seed
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        // The low bits of an LCG are predictable, so expose only the high half.
        self.seed >> 32
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
