//! Shape catalog and rotation tests

use blockfall::core::{shape_of, spawn_shape_of, Board, Piece, Shape};
use blockfall::types::PieceKind;

#[test]
fn test_catalog_dimensions() {
    let dims = |kind| {
        let s = shape_of(kind);
        (s.width(), s.height())
    };
    assert_eq!(dims(PieceKind::I), (4, 1));
    assert_eq!(dims(PieceKind::O), (2, 2));
    for kind in [PieceKind::J, PieceKind::L, PieceKind::S, PieceKind::T, PieceKind::Z] {
        assert_eq!(dims(kind), (3, 2), "{kind:?}");
    }
}

#[test]
fn test_every_piece_has_four_cells() {
    for kind in PieceKind::ALL {
        assert_eq!(shape_of(kind).cell_count(), 4, "{kind:?}");
        assert_eq!(spawn_shape_of(kind).cell_count(), 4, "{kind:?}");
    }
}

#[test]
fn test_spawn_shapes_are_padded_bottom_right() {
    let i = spawn_shape_of(PieceKind::I);
    assert_eq!((i.width(), i.height()), (4, 4));
    assert!((0..4).all(|c| i.is_filled(0, c)));
    assert!((1..4).all(|r| (0..4).all(|c| !i.is_filled(r, c))));

    let t = spawn_shape_of(PieceKind::T);
    assert_eq!((t.width(), t.height()), (3, 3));
    assert!(t.is_filled(0, 1));
    assert!((0..3).all(|c| t.is_filled(1, c)));
    assert!((0..3).all(|c| !t.is_filled(2, c)));
}

#[test]
fn test_rotate_four_times_is_identity() {
    for kind in PieceKind::ALL {
        let start = spawn_shape_of(kind);
        let mut s = start;
        for _ in 0..4 {
            s = s.rotate_cw();
        }
        assert_eq!(s, start, "{kind:?}");
    }
}

#[test]
fn test_rotate_non_square_pads_first() {
    let i = shape_of(PieceKind::I).rotate_cw();
    assert_eq!((i.width(), i.height()), (4, 4));
    // Horizontal bar in row 0 becomes a vertical bar in the last column.
    assert!((0..4).all(|r| i.is_filled(r, 3)));
    assert_eq!(i.cell_count(), 4);
}

#[test]
fn test_o_rotation_is_stable() {
    let o = spawn_shape_of(PieceKind::O);
    assert_eq!(o.rotate_cw(), o);
}

#[test]
fn test_from_rows_rejects_bad_input() {
    assert!(Shape::from_rows(&[]).is_none());
    assert!(Shape::from_rows(&[&[]]).is_none());
    assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_none());
    assert!(Shape::from_rows(&[&[1, 1, 1, 1, 1]]).is_none());
}

#[test]
fn test_rotated_piece_kicks_off_right_wall() {
    let board = Board::new();
    // Vertical I in the last matrix column, flush against the right wall.
    let piece = Piece {
        shape: spawn_shape_of(PieceKind::I).rotate_cw(),
        x: 6,
        y: 5,
        ..Piece::spawn(PieceKind::I, 10)
    };
    assert!(!piece.collides(&board));

    // Back to horizontal on row 3 of the matrix: columns 6..=9, no kick.
    let rotated = piece.rotated(&board).unwrap();
    assert_eq!(rotated.x, 6);
    let cells: Vec<_> = rotated
        .shape
        .cells()
        .iter()
        .map(|&(dx, dy)| (rotated.x + dx, rotated.y + dy))
        .collect();
    assert_eq!(cells, vec![(6, 8), (7, 8), (8, 8), (9, 8)]);
}
