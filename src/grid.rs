//! The 4×4 tile grid and line access along either axis.

use crate::common::{BoardError, Direction};
use crate::config::{is_valid_tile, GRID_SIZE};

/// Row-major 4×4 grid of tile values, 0 meaning empty.
pub type Grid = [[u32; GRID_SIZE]; GRID_SIZE];

/// One row or column, ordered in the direction of motion.
pub type Line = [u32; GRID_SIZE];

/// A grid with no tiles.
pub const EMPTY_GRID: Grid = [[0; GRID_SIZE]; GRID_SIZE];

/// Read line `i` in moving order: row `i` for horizontal moves, column `i`
/// otherwise, reversed for Right and Down.
pub fn read_line(grid: &Grid, dir: Direction, i: usize) -> Line {
    core::array::from_fn(|k| {
        let (r, c) = cell(dir, i, k);
        grid[r][c]
    })
}

/// Write a line produced by [`read_line`] back into its cells.
pub fn write_line(grid: &mut Grid, dir: Direction, i: usize, line: &Line) {
    for (k, &v) in line.iter().enumerate() {
        let (r, c) = cell(dir, i, k);
        grid[r][c] = v;
    }
}

/// Grid coordinates of position `k` on line `i`.
#[inline]
fn cell(dir: Direction, i: usize, k: usize) -> (usize, usize) {
    let k = if dir.is_reversed() { GRID_SIZE - 1 - k } else { k };
    if dir.is_horizontal() {
        (i, k)
    } else {
        (k, i)
    }
}

/// Number of non-empty cells.
pub fn tile_count(grid: &Grid) -> usize {
    grid.iter().flatten().filter(|&&v| v != 0).count()
}

/// Largest tile on the grid, 0 if empty.
pub fn max_tile(grid: &Grid) -> u32 {
    grid.iter().flatten().copied().max().unwrap_or(0)
}

/// Build a grid from arbitrary rows, checking shape and tile values.
pub fn grid_from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Grid, BoardError> {
    if rows.len() != GRID_SIZE {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        return Err(BoardError::InvalidDimensions {
            rows: rows.len(),
            cols,
        });
    }
    if let Some(bad) = rows.iter().find(|r| r.as_ref().len() != GRID_SIZE) {
        return Err(BoardError::InvalidDimensions {
            rows: rows.len(),
            cols: bad.as_ref().len(),
        });
    }
    let mut grid = EMPTY_GRID;
    for (r, row) in rows.iter().enumerate() {
        for (c, &value) in row.as_ref().iter().enumerate() {
            if !is_valid_tile(value) {
                return Err(BoardError::InvalidTile { row: r, col: c, value });
            }
            grid[r][c] = value;
        }
    }
    Ok(grid)
}
