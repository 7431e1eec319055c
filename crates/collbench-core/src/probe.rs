//! Lookup probe selection for the search phase.
//!
//! Probe values are always materialised before the timed search phase
//! starts, so neither RNG cost nor console input is ever measured.
//!
//! Random probes use a ChaCha8 RNG seeded from the plan, producing the
//! same probe sequence for the same `(seed, size, count)` triple.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Default number of random lookups per search phase.
pub const DEFAULT_PROBE_COUNT: usize = 1000;

/// Default RNG seed for random probes.
pub const DEFAULT_PROBE_SEED: u64 = 42;

/// How the search phase chooses the values it looks up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbePlan {
    /// `count` values drawn uniformly from `[0, size)`.
    Random {
        /// Number of lookups.
        count: usize,
        /// RNG seed.
        seed: u64,
    },
    /// Exactly these values, in order.
    Explicit(Vec<u64>),
}

impl Default for ProbePlan {
    fn default() -> Self {
        Self::Random {
            count: DEFAULT_PROBE_COUNT,
            seed: DEFAULT_PROBE_SEED,
        }
    }
}

impl ProbePlan {
    /// Resolve the plan into concrete probe values for a container of `size`.
    ///
    /// A random plan against `size == 0` yields no probes: there is no
    /// range to sample from. Explicit values are returned unchanged, even
    /// when they fall outside `[0, size)`.
    pub fn values(&self, size: u64) -> Vec<u64> {
        match self {
            Self::Random { count, seed } => {
                if size == 0 {
                    return Vec::new();
                }
                let mut rng = ChaCha8Rng::seed_from_u64(*seed);
                (0..*count).map(|_| rng.random_range(0..size)).collect()
            }
            Self::Explicit(values) => values.clone(),
        }
    }

    /// Whether probe outcomes should be reported one by one.
    pub fn is_explicit(&self) -> bool {
        matches!(self, Self::Explicit(_))
    }
}
