//! Difficulty levels and their search settings.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::core::ConfigError;

/// Named difficulty level.
///
/// Parses case-insensitively from `"easy"`, `"medium"`, `"hard"`.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Search depth and random-move probability for one level.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifficultySettings {
    /// Depth handed to the search engine.
    pub max_depth: u32,

    /// Chance, drawn once per move choice, of playing a uniform legal move
    /// instead of searching. Must lie in `[0, 1)`.
    pub random_move_probability: f64,
}

impl Default for DifficultySettings {
    fn default() -> Self {
        Self {
            max_depth: 4,
            random_move_probability: 0.0,
        }
    }
}

impl DifficultySettings {
    #[must_use]
    pub const fn new(max_depth: u32, random_move_probability: f64) -> Self {
        Self {
            max_depth,
            random_move_probability,
        }
    }

    /// Create new settings with a custom depth.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Create new settings with a custom random-move probability.
    pub fn with_random_move_probability(mut self, probability: f64) -> Self {
        self.random_move_probability = probability;
        self
    }

    /// Check the probability range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = self.random_move_probability;
        if (0.0..1.0).contains(&p) {
            Ok(())
        } else {
            Err(ConfigError::Probability(p))
        }
    }
}
