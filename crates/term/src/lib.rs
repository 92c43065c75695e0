//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. Snapshots are
//! drawn into a plain framebuffer by [`GameView`], and [`TerminalRenderer`]
//! flushes only what changed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Control the aspect ratio (2 chars wide per cell by default)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
