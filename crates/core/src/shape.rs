//! Shape module - fixed-capacity 0/1 matrices and clockwise rotation
//!
//! A shape is at most 4x4 and lives entirely on the stack, so rotating,
//! padding and iterating cells never allocates.
//!
//! Coordinates: `(dx, dy)` where `dx` is the column and `dy` the row, both
//! relative to the piece origin (top-left corner of the matrix).

use arrayvec::ArrayVec;
use serde::Serialize;

/// Largest supported matrix side
pub const MAX_SHAPE_SIZE: usize = 4;

/// Occupied offsets of a shape, at most one per matrix slot
pub type ShapeCells = ArrayVec<(i16, i16), { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

/// A width x height matrix of occupied flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Shape {
    width: u8,
    height: u8,
    /// `grid[row][col]`; slots outside `width x height` are always false
    grid: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from a 4x4 mask, keeping only the top-left
    /// `width x height` region.
    ///
    /// Dimensions larger than the mask are clamped to it.
    pub const fn from_mask(
        width: u8,
        height: u8,
        mask: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
    ) -> Self {
        let width = clamp_side(width);
        let height = clamp_side(height);
        let mut grid = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut r = 0;
        while r < height as usize {
            let mut c = 0;
            while c < width as usize {
                grid[r][c] = mask[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            width,
            height,
            grid,
        }
    }

    /// Build a shape from rows of 0/1 flags.
    ///
    /// Returns `None` for empty, ragged, or larger-than-4x4 input.
    ///
    /// ```
    /// use blockfall_core::Shape;
    ///
    /// let s = Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]).unwrap();
    /// assert_eq!((s.width(), s.height()), (3, 2));
    /// assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_none());
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0 || width > MAX_SHAPE_SIZE || height > MAX_SHAPE_SIZE {
            return None;
        }
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let mut grid = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in rows.iter().enumerate() {
            for (c, &flag) in row.iter().enumerate() {
                grid[r][c] = flag != 0;
            }
        }
        Some(Self {
            width: width as u8,
            height: height as u8,
            grid,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Whether the slot at `(row, col)` is occupied; false outside the matrix
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.height as usize && col < self.width as usize && self.grid[row][col]
    }

    /// Occupied `(dx, dy)` offsets in row-major order
    pub fn cells(&self) -> ShapeCells {
        let mut out = ShapeCells::new();
        for r in 0..self.height as usize {
            for c in 0..self.width as usize {
                if self.grid[r][c] {
                    out.push((c as i16, r as i16));
                }
            }
        }
        out
    }

    pub fn cell_count(&self) -> usize {
        self.grid
            .iter()
            .map(|row| row.iter().filter(|&&filled| filled).count())
            .sum()
    }

    /// Pad to an N x N square, N = max(width, height).
    ///
    /// Empty rows are appended at the bottom and empty columns on the right;
    /// occupied cells keep their offsets.
    pub fn padded_square(&self) -> Self {
        let size = self.width.max(self.height);
        Self {
            width: size,
            height: size,
            grid: self.grid,
        }
    }

    /// Rotate 90° clockwise: `out[c][N-1-r] = in[r][c]`.
    ///
    /// Rotation is defined on square matrices, so a non-square shape is
    /// padded first and the result is always square.
    pub fn rotate_cw(&self) -> Self {
        let square = self.padded_square();
        let n = square.width as usize;
        let mut grid = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for r in 0..n {
            for c in 0..n {
                grid[c][n - 1 - r] = square.grid[r][c];
            }
        }
        Self {
            width: square.width,
            height: square.height,
            grid,
        }
    }
}

const fn clamp_side(side: u8) -> u8 {
    if side as usize > MAX_SHAPE_SIZE {
        MAX_SHAPE_SIZE as u8
    } else {
        side
    }
}
