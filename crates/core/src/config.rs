//! Game configuration
//!
//! Board size, seed and randomizer are the only knobs. Every field has a
//! default, so partial configs deserialize cleanly.

use std::fmt;

use serde::Deserialize;

use crate::rng::Randomizer;
use crate::types::{BOARD_COLS, BOARD_ROWS, MAX_BOARD_DIM, MIN_BOARD_DIM};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub cols: u8,
    pub rows: u8,
    pub seed: u32,
    pub randomizer: Randomizer,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: BOARD_COLS,
            rows: BOARD_ROWS,
            seed: 1,
            randomizer: Randomizer::Uniform,
        }
    }
}

impl GameConfig {
    /// Default board with the given seed
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Check board dimensions against `MIN_BOARD_DIM..=MAX_BOARD_DIM`
    pub fn validate(&self) -> Result<(), ConfigError> {
        let range = MIN_BOARD_DIM..=MAX_BOARD_DIM;
        if !range.contains(&self.cols) {
            return Err(ConfigError::ColsOutOfRange(self.cols));
        }
        if !range.contains(&self.rows) {
            return Err(ConfigError::RowsOutOfRange(self.rows));
        }
        Ok(())
    }
}

/// Rejected configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ColsOutOfRange(u8),
    RowsOutOfRange(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ColsOutOfRange(cols) => write!(
                f,
                "board width {cols} is outside {MIN_BOARD_DIM}..={MAX_BOARD_DIM}"
            ),
            ConfigError::RowsOutOfRange(rows) => write!(
                f,
                "board height {rows} is outside {MIN_BOARD_DIM}..={MAX_BOARD_DIM}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
