pub use innate_prng::{Lcrng, RandomSource, sample};
