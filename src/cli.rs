//! Command-line arguments of the `blockfall` binary.

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::core::{GameConfig, Randomizer};
use crate::types::{BOARD_COLS, BOARD_ROWS};

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed for the piece generator; the same seed replays the same pieces
    #[arg(long, default_value_t = 1)]
    pub seed: u32,

    /// Board width in cells (4..=64)
    #[arg(long, default_value_t = BOARD_COLS)]
    pub cols: u8,

    /// Board height in cells (4..=64)
    #[arg(long, default_value_t = BOARD_ROWS)]
    pub rows: u8,

    /// Piece randomizer: `uniform` or `bag`
    #[arg(long, default_value_t = Randomizer::Uniform)]
    pub randomizer: Randomizer,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level used with `--log-file`
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Engine configuration; validated by `Engine::new`
    pub fn config(&self) -> GameConfig {
        GameConfig {
            cols: self.cols,
            rows: self.rows,
            seed: self.seed,
            randomizer: self.randomizer,
        }
    }
}
