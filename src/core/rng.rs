//! Deterministic randomness for role assignment, seating and deck shuffles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Substitutable**: The engine only sees the `ShuffleSource` trait, so
//!   tests can plug in a source that never reorders anything
//!
//! ## Usage
//!
//! ```
//! use hitler_engine::core::{GameRng, ShuffleSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut seats = vec!["ada", "bob", "cy", "dee", "eve"];
//! rng.shuffle(&mut seats);
//!
//! // Same seed, same permutation
//! let mut again = vec!["ada", "bob", "cy", "dee", "eve"];
//! GameRng::new(42).shuffle(&mut again);
//! assert_eq!(seats, again);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The single randomness primitive the engine consumes.
///
/// Implementations must produce uniform permutations in `shuffle` and a
/// uniform index in `0..len` from `pick_index`. `len` is never zero.
pub trait ShuffleSource {
    /// Shuffle a slice in place.
    fn shuffle<T>(&mut self, items: &mut [T]);

    /// Pick an index in `0..len`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Seeded RNG backing every random decision of a game.
///
/// Uses ChaCha8 for speed while keeping a well-distributed stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

impl ShuffleSource for GameRng {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}
