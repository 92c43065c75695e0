//! Shape catalog - canonical matrices for the seven piece kinds
//!
//! Shapes are stored in their natural (non-padded) form, the way they appear
//! in the preview: the I bar is 1x4, O is 2x2, and the rest are 2x3. Pieces
//! pad them to a square at spawn so rotation is always defined.

use crate::shape::Shape;
use crate::types::PieceKind;

const I_SHAPE: Shape = Shape::from_mask(4, 1, [[1, 1, 1, 1], [0; 4], [0; 4], [0; 4]]);
const J_SHAPE: Shape = Shape::from_mask(3, 2, [[1, 0, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);
const L_SHAPE: Shape = Shape::from_mask(3, 2, [[0, 0, 1, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);
const O_SHAPE: Shape = Shape::from_mask(2, 2, [[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
const S_SHAPE: Shape = Shape::from_mask(3, 2, [[0, 1, 1, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
const T_SHAPE: Shape = Shape::from_mask(3, 2, [[0, 1, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);
const Z_SHAPE: Shape = Shape::from_mask(3, 2, [[1, 1, 0, 0], [0, 1, 1, 0], [0; 4], [0; 4]]);

/// Canonical orientation of a piece kind
pub fn shape_of(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

/// Canonical orientation padded to a square, as it enters the board
pub fn spawn_shape_of(kind: PieceKind) -> Shape {
    shape_of(kind).padded_square()
}
