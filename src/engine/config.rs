use crate::board::{ConfigError, CELL_COUNT, DEFAULT_FOUR_PROBABILITY};

/// Session settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Tiles spawned by `reset`
    pub start_tiles: usize,
    /// Chance a spawned tile is a 4
    pub four_probability: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_tiles: 2,
            four_probability: DEFAULT_FOUR_PROBABILITY,
        }
    }
}

impl GameConfig {
    /// Check the settings can be used on a 4x4 board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(ConfigError::FourProbabilityOutOfRange {
                found: self.four_probability,
            });
        }
        if self.start_tiles > CELL_COUNT {
            return Err(ConfigError::TooManyStartTiles {
                found: self.start_tiles,
            });
        }
        Ok(())
    }

    #[must_use]
    pub const fn with_start_tiles(mut self, start_tiles: usize) -> Self {
        self.start_tiles = start_tiles;
        self
    }

    #[must_use]
    pub const fn with_four_probability(mut self, four_probability: f64) -> Self {
        self.four_probability = four_probability;
        self
    }
}
