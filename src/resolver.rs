//! Move resolution: slide and merge every line of the grid in one direction.

use crate::common::Direction;
use crate::config::{can_merge, GRID_SIZE};
use crate::grid::{read_line, write_line, Grid, Line, EMPTY_GRID};

/// Outcome of resolving one direction against a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedMove {
    /// Grid after sliding and merging.
    pub grid: Grid,
    /// Sum of the values of all tiles created by merges.
    pub score: u64,
    /// Number of merges performed; the tile count drops by exactly this much.
    pub merges: usize,
}

/// Slide and merge a single line toward index 0.
///
/// Each tile merges at most once per move, so `[2, 2, 2, 0]` becomes
/// `[4, 2, 0, 0]` and `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`. Tiles of
/// [`MAX_TILE`](crate::MAX_TILE) only slide.
/// Returns the new line, its score delta and the number of merges.
pub fn compact_line(line: &Line) -> (Line, u64, usize) {
    let mut out = [0u32; GRID_SIZE];
    let mut len = 0;
    let mut score = 0u64;
    let mut merges = 0;
    let mut carry: Option<u32> = None;

    for &v in line.iter().filter(|&&v| v != 0) {
        match carry {
            None => carry = Some(v),
            Some(held) if held == v && can_merge(held) => {
                let merged = held + v;
                out[len] = merged;
                len += 1;
                score += u64::from(merged);
                merges += 1;
                carry = None;
            }
            Some(held) => {
                out[len] = held;
                len += 1;
                carry = Some(v);
            }
        }
    }
    // the last emitted cell is either a distinct tile or a merge result; never merge into it
    if let Some(held) = carry {
        out[len] = held;
    }
    (out, score, merges)
}

/// Resolve `dir` against `grid` without touching the input.
pub fn resolve(grid: &Grid, dir: Direction) -> ResolvedMove {
    let mut next = EMPTY_GRID;
    let mut score = 0;
    let mut merges = 0;
    for i in 0..GRID_SIZE {
        let (line, s, m) = compact_line(&read_line(grid, dir, i));
        write_line(&mut next, dir, i, &line);
        score += s;
        merges += m;
    }
    ResolvedMove {
        grid: next,
        score,
        merges,
    }
}
