//! Seedable randomness for the difficulty policy.
//!
//! The policy never reaches for a global generator. Callers own a
//! `GameRng` and lend it to every move choice, so a fixed seed replays a
//! session move for move. The stream position fits in a `GameRngState`,
//! which lets an adapter park a session between requests:
//!
//! ```
//! use rust_duel::core::GameRng;
//!
//! let mut rng = GameRng::new(7);
//! let parked = rng.state();
//!
//! let roll = rng.gen_f64();
//! assert_eq!(GameRng::from_state(&parked).gen_f64(), roll);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// ChaCha8 stream plus the seed it started from.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the operating system, for adapters that do not care about
    /// replay.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform sample in `[0, 1)`. The policy draws exactly one per move.
    pub fn gen_f64(&mut self) -> f64 {
        self.stream.gen()
    }

    /// Uniformly pick one of `items`, or `None` if there are none.
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        items.choose(&mut self.stream).copied()
    }

    /// Current stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.stream.get_word_pos(),
        }
    }

    /// Resume a stream at a saved position.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut rng = Self::new(state.seed);
        rng.stream.set_word_pos(state.word_pos);
        rng
    }
}

/// Fixed-size snapshot of a `GameRng`, however many samples were drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// Offset into the ChaCha8 keystream, in 32-bit words.
    pub word_pos: u128,
}
