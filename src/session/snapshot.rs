//! Compact session snapshots for adapters that persist games between
//! requests.
//!
//! A snapshot holds everything needed to resume: the board, the human's
//! side, the difficulty and the RNG position. The game result is not
//! stored; it is derived from the board on restore.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameRngState, Player};
use crate::policy::Difficulty;

/// Snapshot encoding failure.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode snapshot: {0}")]
    Decode(#[source] bincode::Error),
}

/// Persistable session state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot<B> {
    pub board: B,
    pub human: Player,
    pub difficulty: Difficulty,
    pub rng: GameRngState,
}

impl<B> GameSnapshot<B>
where
    B: Serialize + DeserializeOwned,
{
    /// Capture a session.
    #[must_use]
    pub fn capture(board: B, human: Player, difficulty: Difficulty, rng: &GameRng) -> Self {
        Self {
            board,
            human,
            difficulty,
            rng: rng.state(),
        }
    }

    /// Rebuild the session RNG at its saved position.
    #[must_use]
    pub fn restore_rng(&self) -> GameRng {
        GameRng::from_state(&self.rng)
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode with bincode. Board validation runs during decoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Decode)
    }
}
