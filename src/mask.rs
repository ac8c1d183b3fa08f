//! A 4×4 cell mask packed into a `u16`.
//!
//! Bit `row * GRID_SIZE + col` stands for the cell at (row, col). The spawner
//! uses it to track empty cells so picking a random free cell never allocates.

use core::fmt;

use crate::config::GRID_SIZE;
use crate::grid::Grid;

/// Set of grid cells.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct CellMask {
    bits: u16,
}

impl CellMask {
    /// Empty mask.
    #[inline]
    pub const fn new() -> Self {
        CellMask { bits: 0 }
    }

    /// Mask of every cell holding zero.
    pub fn empty_cells(grid: &Grid) -> Self {
        let mut mask = Self::new();
        for (r, row) in grid.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if v == 0 {
                    mask.set(r, c);
                }
            }
        }
        mask
    }

    #[inline]
    const fn index(row: usize, col: usize) -> usize {
        debug_assert!(row < GRID_SIZE && col < GRID_SIZE);
        row * GRID_SIZE + col
    }

    /// Number of cells in the mask.
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no cell is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        (self.bits >> Self::index(row, col)) & 1 == 1
    }

    pub fn set(&mut self, row: usize, col: usize) {
        self.bits |= 1 << Self::index(row, col);
    }

    pub fn clear(&mut self, row: usize, col: usize) {
        self.bits &= !(1 << Self::index(row, col));
    }

    /// Coordinates of the `n`-th set cell in row-major order.
    pub fn nth(&self, n: usize) -> Option<(usize, usize)> {
        let mut bits = self.bits;
        for _ in 0..n {
            if bits == 0 {
                return None;
            }
            // drop the lowest set bit
            bits &= bits - 1;
        }
        if bits == 0 {
            return None;
        }
        let idx = bits.trailing_zeros() as usize;
        Some((idx / GRID_SIZE, idx % GRID_SIZE))
    }

    #[inline]
    pub fn into_raw(self) -> u16 {
        self.bits
    }
}

impl fmt::Debug for CellMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellMask<{}x{}> [", GRID_SIZE, GRID_SIZE)?;
        for r in 0..GRID_SIZE {
            write!(f, "  ")?;
            for c in 0..GRID_SIZE {
                let ch = if self.get(r, c) { '1' } else { '.' };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "]")
    }
}
