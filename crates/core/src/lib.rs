//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds all the rules of the falling-block game: the locked-cell
//! board, piece shapes and rotation, scoring and levels, and the engine state
//! machine that ties them together. It does no I/O and owns no clock, so the
//! same seed and the same command sequence always produce the same game.
//!
//! # Module Structure
//!
//! - [`board`]: the locked-cell grid with collision checks and line clearing
//! - [`shape`]: boolean occupancy matrices and clockwise rotation
//! - [`shapes`]: the seven canonical piece shapes
//! - [`piece`]: the active falling piece and kick-based rotation
//! - [`rng`]: seeded uniform and 7-bag piece generation
//! - [`scoring`]: line-clear gains, levels and gravity intervals
//! - [`config`]: board size, seed and randomizer selection
//! - [`engine`]: the game state machine and its commands
//! - [`snapshot`]: read-only state copies for renderers
//!
//! # Game Rules
//!
//! - **Rotation**: clockwise only, with horizontal kicks `[0, -1, +1, -2, +2]`
//! - **Gravity**: one row per interval; 700ms at level 1, 50ms faster per
//!   level, never below 80ms
//! - **Locking**: immediate when a piece cannot move down (no lock delay)
//! - **Scoring**: 100/300/500/800 for 1-4 lines, times the level before the clear
//! - **Hold**: one swap per locked piece; the held piece keeps its orientation
//! - **Top out**: the game ends if a piece settles while still above the board
//!   or if a new piece cannot spawn
//!
//! # Example
//!
//! ```
//! use blockfall_core::Engine;
//! use blockfall_core::types::{Command, GamePhase};
//!
//! let mut engine = Engine::with_seed(12345);
//! engine.start();
//!
//! engine.apply(Command::MoveRight);
//! engine.apply(Command::Rotate);
//! engine.apply(Command::HardDrop);
//!
//! assert_eq!(engine.phase(), GamePhase::Running);
//! assert_eq!(engine.board().occupied_count(), 4);
//! ```
//!
//! # Timing
//!
//! Call [`Engine::tick`] every [`Engine::fall_interval_ms`] milliseconds while
//! the game is running, and re-read the interval after each tick.

pub mod board;
pub mod config;
pub mod engine;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use engine::{Engine, HeldPiece, LockEvent};
pub use piece::{try_rotate, Piece};
pub use rng::{PieceGenerator, Randomizer, SimpleRng};
pub use scoring::{fall_interval_ms, level_for_lines, line_clear_gain, score_for_clear};
pub use shape::Shape;
pub use shapes::{shape_of, spawn_shape_of};
pub use snapshot::{GameSnapshot, PieceSnapshot, PreviewSnapshot};
