//! Piece module - the active falling piece and kick-based rotation
//!
//! Rotation is a plain clockwise matrix turn followed by a simplified kick
//! search: horizontal offsets `[0, -1, +1, -2, +2]` at the current row, first
//! fit wins. There is no per-orientation kick table and no vertical kick.

use log::trace;

use crate::board::Board;
use crate::shape::Shape;
use crate::shapes::shape_of;
use crate::types::{Block, ColorToken, PieceKind, KICK_OFFSETS};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    /// Current orientation, always square
    pub shape: Shape,
    pub x: i16,
    /// May be negative while the piece is still entering the board
    pub y: i16,
}

impl Piece {
    /// Create a piece of `kind` in its canonical orientation at the spawn
    /// position of a board `cols` wide
    pub fn spawn(kind: PieceKind, cols: u8) -> Self {
        Self::spawn_with_shape(kind, shape_of(kind), cols)
    }

    /// Place an arbitrary orientation at the spawn position.
    ///
    /// The shape is padded to a square, centered horizontally (rounding
    /// left), and raised so that only its last row can reach row 0:
    /// `y = -max(1, N - 1)`.
    pub fn spawn_with_shape(kind: PieceKind, shape: Shape, cols: u8) -> Self {
        let shape = shape.padded_square();
        let size = shape.width() as i16;
        Self {
            kind,
            shape,
            x: (cols as i16 - size).div_euclid(2),
            y: -(size - 1).max(1),
        }
    }

    pub fn color(&self) -> ColorToken {
        self.kind.color()
    }

    /// The block this piece leaves behind when it locks
    pub fn block(&self) -> Block {
        Block::from(self.kind)
    }

    /// Check if the piece overlaps a wall, the floor or a locked cell
    pub fn collides(&self, board: &Board) -> bool {
        board.collides(&self.shape, self.x, self.y)
    }

    /// Copy of this piece moved by (dx, dy)
    pub fn shifted(&self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Rotated copy that fits on `board`, or `None` if every kick collides
    pub fn rotated(&self, board: &Board) -> Option<Self> {
        let (shape, kick) = try_rotate(&self.shape, self.x, self.y, |s, x, y| {
            board.collides(s, x, y)
        })?;
        Some(Self {
            shape,
            x: self.x + kick,
            ..*self
        })
    }
}

/// Try to rotate `shape` clockwise at (x, y) with wall kicks.
///
/// Returns the rotated shape and the horizontal kick that made it fit, or
/// `None` if no offset in `KICK_OFFSETS` works.
pub fn try_rotate(
    shape: &Shape,
    x: i16,
    y: i16,
    collides: impl Fn(&Shape, i16, i16) -> bool,
) -> Option<(Shape, i16)> {
    let rotated = shape.rotate_cw();

    for &kick in KICK_OFFSETS.iter() {
        if !collides(&rotated, x + kick, y) {
            if kick != 0 {
                trace!("rotation kicked by {kick}");
            }
            return Some((rotated, kick));
        }
    }

    trace!("rotation rejected at ({x}, {y})");
    None
}
