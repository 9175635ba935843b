//! Injectable randomness.
//!
//! The stoplight opponent and the batch simulator never reach for an ambient
//! RNG. They draw through [`RandomSource`], which has two implementations:
//!
//! - [`GameRng`]: seeded ChaCha8, forkable, for real play and simulation
//! - [`ScriptedSource`]: replays a fixed cycle of draws, for tests
//!
//! ```
//! use parlor_games::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut branch = rng.fork();
//!
//! let mut again = GameRng::new(42);
//! let mut branch_again = again.fork();
//!
//! // Same seed and fork count give the same stream
//! assert_eq!(branch.next_below(100), branch_again.next_below(100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Source of uniform draws.
pub trait RandomSource {
    /// Draw an index uniformly from `0..bound`. `bound` must be non-zero.
    fn next_below(&mut self, bound: usize) -> usize;

    /// Split off an independent source.
    ///
    /// The parent advances so successive forks differ; the fork itself
    /// is deterministic given the parent's history.
    fn fork(&mut self) -> Self
    where
        Self: Sized;
}

/// Deterministic RNG with forking.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a named purpose.
    ///
    /// The context is mixed into the seed with `FxHasher`, so a given seed
    /// and context map to the same stream for a given `rustc-hash` version.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }
}

impl RandomSource for GameRng {
    fn next_below(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }
}

/// Replays a fixed cycle of draws.
///
/// Each stored value is reduced modulo the requested bound, so
/// `ScriptedSource::new(vec![1])` always answers the last index of a
/// two-way draw. Forks restart the script from the beginning.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source cycling through `script`.
    pub fn new(script: Vec<usize>) -> Self {
        assert!(!script.is_empty(), "Script must have at least 1 draw");
        Self { script, cursor: 0 }
    }

    /// Number of draws taken so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_below(&mut self, bound: usize) -> usize {
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % bound
    }

    fn fork(&mut self) -> Self {
        Self::new(self.script.clone())
    }
}
