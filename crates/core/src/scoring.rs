//! Scoring module - line-clear gain, level progression and gravity curve
//!
//! All functions are pure and saturating:
//! - gain for n lines is `[0, 100, 300, 500, 800][n]`, or `n * 200` past the table
//! - the gain is multiplied by the level in effect when the piece locked
//! - `level = 1 + lines / 10`
//! - `fall_interval_ms = max(80, 700 - (level - 1) * 50)`

use crate::types::{
    FALL_INTERVAL_STEP_MS, INITIAL_FALL_INTERVAL_MS, LINES_PER_LEVEL, LINE_SCORES,
    MIN_FALL_INTERVAL_MS, OVERFLOW_LINE_SCORE,
};

/// Base gain for clearing `lines` rows with a single lock
pub fn line_clear_gain(lines: u32) -> u32 {
    match LINE_SCORES.get(lines as usize) {
        Some(&gain) => gain,
        None => lines.saturating_mul(OVERFLOW_LINE_SCORE),
    }
}

/// Score added for clearing `lines` rows at `level`
pub fn score_for_clear(lines: u32, level: u32) -> u32 {
    line_clear_gain(lines).saturating_mul(level)
}

/// Level reached after `total_lines` cleared lines (starts at 1)
pub fn level_for_lines(total_lines: u32) -> u32 {
    1 + total_lines / LINES_PER_LEVEL
}

/// Gravity interval for a level, clamped at the floor
pub fn fall_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(FALL_INTERVAL_STEP_MS);
    INITIAL_FALL_INTERVAL_MS
        .saturating_sub(speedup)
        .max(MIN_FALL_INTERVAL_MS)
}
