//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s. Key repeat is
//! left to the terminal; every press becomes exactly one command.

pub mod map;

pub use blockfall_types as types;

pub use map::{command_for_key, should_quit};
