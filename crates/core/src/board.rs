//! Board module - manages the locked-cell grid
//!
//! The board is a `cols x rows` grid (10x20 by default) where each cell is
//! either empty or holds the block a locked piece left behind.
//! Uses a flat row-major vector sized once at construction; nothing on the
//! collision or line-clear paths allocates.
//!
//! Coordinates: (x, y) where x ranges 0..cols (left to right) and y ranges
//! 0..rows (top to bottom). Negative y is the hidden area above the board.

use log::trace;

use crate::shape::Shape;
use crate::types::{Block, Cell, BOARD_COLS, BOARD_ROWS};

/// The locked-cell grid
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cols: u8,
    rows: u8,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty 10x20 board
    pub fn new() -> Self {
        Self::with_size(BOARD_COLS, BOARD_ROWS)
    }

    /// Create an empty board of the given size
    pub fn with_size(cols: u8, rows: u8) -> Self {
        Self {
            cols,
            rows,
            cells: vec![None; cols as usize * rows as usize],
        }
    }

    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.cols as i16 || y < 0 || y >= self.rows as i16 {
            return None;
        }
        Some(y as usize * self.cols as usize + x as usize)
    }

    pub fn width(&self) -> u8 {
        self.cols
    }

    pub fn height(&self) -> u8 {
        self.rows
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    ///
    /// This bypasses the lock path and exists to set up positions (puzzles,
    /// tests). It must not be used to overlap an active piece.
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is inside the board and locked
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// One row of cells, left to right
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.rows as usize {
            return None;
        }
        let start = y * self.cols as usize;
        Some(&self.cells[start..start + self.cols as usize])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Whether `shape` placed with its origin at (x, y) hits a wall, the floor,
    /// or a locked cell.
    ///
    /// Cells above the board (y < 0) only check the side walls, so pieces can
    /// hang over the top while they fall.
    pub fn collides(&self, shape: &Shape, x: i16, y: i16) -> bool {
        shape.cells().iter().any(|&(dx, dy)| {
            let cx = x + dx;
            let cy = y + dy;
            if cx < 0 || cx >= self.cols as i16 || cy >= self.rows as i16 {
                return true;
            }
            cy >= 0 && self.is_occupied(cx, cy)
        })
    }

    /// Write the occupied cells of `shape` at (x, y) as locked blocks.
    ///
    /// Cells above the board are dropped. The caller must have checked
    /// `collides` first; overlaps are not re-validated.
    /// Returns the number of cells written.
    pub fn lock(&mut self, shape: &Shape, x: i16, y: i16, block: Block) -> usize {
        let mut written = 0;
        for &(dx, dy) in shape.cells().iter() {
            if self.set(x + dx, y + dy, Some(block)) {
                written += 1;
            }
        }
        written
    }

    /// Remove every full row at once and return how many were removed.
    ///
    /// Surviving rows keep their order and fall by the number of cleared rows
    /// beneath them; the same number of empty rows appear at the top.
    /// Two-pointer compaction, bottom to top, no allocation.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.cols as usize;
        let mut write_y = self.rows as usize;
        let mut cleared = 0;

        for read_y in (0..self.rows as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);

        if cleared > 0 {
            trace!("cleared {cleared} full rows");
        }
        cleared
    }

    /// Number of locked cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Flat row-major view of every cell
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn square() -> Shape {
        Shape::from_rows(&[&[1, 1], &[1, 1]]).unwrap()
    }

    fn fill_row(board: &mut Board, y: i16) {
        for x in 0..board.width() as i16 {
            board.set(x, y, Some(Block::from(PieceKind::I)));
        }
    }

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_custom_size() {
        let board = Board::with_size(6, 8);
        assert_eq!(board.width(), 6);
        assert_eq!(board.height(), 8);
        assert_eq!(board.cells().len(), 48);
        assert_eq!(board.index(5, 7), Some(47));
        assert_eq!(board.index(6, 0), None);
    }

    #[test]
    fn test_collides_walls_and_floor() {
        let board = Board::new();
        let s = square();
        assert!(!board.collides(&s, 0, 0));
        assert!(!board.collides(&s, 8, 18));
        assert!(board.collides(&s, -1, 5));
        assert!(board.collides(&s, 9, 5));
        assert!(board.collides(&s, 4, 19));
    }

    #[test]
    fn test_collides_ignores_lock_state_above_board() {
        let mut board = Board::new();
        fill_row(&mut board, 0);
        // Bottom row of the square sits on row -1: still above the board.
        assert!(!board.collides(&square(), 4, -2));
        // One step lower, it reaches the locked row 0.
        assert!(board.collides(&square(), 4, -1));
        // Side walls still apply above the board.
        assert!(board.collides(&square(), -1, -3));
    }

    #[test]
    fn test_lock_skips_hidden_rows() {
        let mut board = Board::new();
        let written = board.lock(&square(), 3, -1, Block::from(PieceKind::O));
        assert_eq!(written, 2);
        assert!(board.is_occupied(3, 0));
        assert!(board.is_occupied(4, 0));
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_clear_full_rows_is_simultaneous() {
        let mut board = Board::new();
        fill_row(&mut board, 19);
        fill_row(&mut board, 17);
        board.set(2, 18, Some(Block::from(PieceKind::T)));
        board.set(5, 16, Some(Block::from(PieceKind::S)));

        assert_eq!(board.clear_full_rows(), 2);

        // Row 18 falls by one (one cleared row below it), row 16 by two.
        assert!(board.is_occupied(2, 19));
        assert!(board.is_occupied(5, 18));
        assert_eq!(board.occupied_count(), 2);
        assert!(!board.is_row_full(19));
    }

    #[test]
    fn test_reset() {
        let mut board = Board::new();
        fill_row(&mut board, 10);
        board.reset();
        assert_eq!(board.occupied_count(), 0);
    }
}
