use serde::Serialize;

use crate::piece::Piece;
use crate::shape::Shape;
use crate::shapes::spawn_shape_of;
use crate::types::{Cell, ColorToken, GamePhase, PieceKind};

/// The active piece as a renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i16,
    pub y: i16,
    pub color: ColorToken,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
            color: value.color(),
        }
    }
}

/// A piece waiting off-board (next or held)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PreviewSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: ColorToken,
}

impl PreviewSnapshot {
    pub fn new(kind: PieceKind, shape: Shape) -> Self {
        Self {
            kind,
            shape,
            color: kind.color(),
        }
    }

    /// Preview of a kind in its spawn orientation
    pub fn of_kind(kind: PieceKind) -> Self {
        Self::new(kind, spawn_shape_of(kind))
    }
}

/// Read-only copy of everything a presentation layer needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub cols: u8,
    pub rows: u8,
    /// Row-major, `rows * cols` cells
    pub board: Vec<Cell>,
    pub active: Option<PieceSnapshot>,
    pub ghost_y: Option<i16>,
    pub next: Option<PreviewSnapshot>,
    pub held: Option<PreviewSnapshot>,
    pub phase: GamePhase,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_interval_ms: u32,
    pub can_hold: bool,
    pub piece_id: u32,
}

impl GameSnapshot {
    /// Locked cell at (x, y); `None` when empty or out of range
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        if x >= self.cols as usize || y >= self.rows as usize {
            return None;
        }
        self.board[y * self.cols as usize + x]
    }

    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cols: 0,
            rows: 0,
            board: Vec::new(),
            active: None,
            ghost_y: None,
            next: None,
            held: None,
            phase: GamePhase::Idle,
            score: 0,
            level: 1,
            lines: 0,
            fall_interval_ms: 0,
            can_hold: true,
            piece_id: 0,
        }
    }
}
