//! Legal-move detection.
//!
//! [`legal_directions`] proves which directions would change the grid with a
//! single neighbour scan; [`LegalMoveSet`] then resolves only those directions.

use crate::common::Direction;
use crate::config::{can_merge, GRID_SIZE};
use crate::grid::Grid;
use crate::resolver::{resolve, ResolvedMove};

/// Set of directions, one flag per [`Direction::index`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectionSet {
    flags: [bool; 4],
}

impl DirectionSet {
    pub const fn new() -> Self {
        DirectionSet { flags: [false; 4] }
    }

    pub fn insert(&mut self, dir: Direction) {
        self.flags[dir.index()] = true;
    }

    pub fn contains(&self, dir: Direction) -> bool {
        self.flags[dir.index()]
    }

    pub fn is_full(&self) -> bool {
        self.flags.iter().all(|&f| f)
    }

    pub fn is_empty(&self) -> bool {
        !self.flags.iter().any(|&f| f)
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(move |&d| self.contains(d))
    }
}

/// Compare a cell with its predecessor on a line and mark the directions the
/// pair proves legal. `toward` moves tiles toward the predecessor.
#[inline]
fn scan_pair(prev: u32, cur: u32, toward: Direction, away: Direction, set: &mut DirectionSet) {
    match (prev, cur) {
        (0, 0) => {}
        (0, _) => set.insert(toward),
        (_, 0) => set.insert(away),
        (p, c) if p == c && can_merge(p) => {
            set.insert(toward);
            set.insert(away);
        }
        _ => {}
    }
}

/// Directions in which at least one tile would move or merge.
pub fn legal_directions(grid: &Grid) -> DirectionSet {
    let mut set = DirectionSet::new();
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            let cur = grid[r][c];
            if c > 0 {
                scan_pair(grid[r][c - 1], cur, Direction::Left, Direction::Right, &mut set);
            }
            if r > 0 {
                scan_pair(grid[r - 1][c], cur, Direction::Up, Direction::Down, &mut set);
            }
        }
        if set.is_full() {
            break;
        }
    }
    set
}

/// Resolved outcome for every legal direction of a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LegalMoveSet {
    moves: [Option<ResolvedMove>; 4],
}

impl LegalMoveSet {
    /// Scan `grid` and resolve every direction the scan proves legal.
    pub fn compute(grid: &Grid) -> Self {
        let legal = legal_directions(grid);
        let mut moves = [None; 4];
        for dir in legal.iter() {
            moves[dir.index()] = Some(resolve(grid, dir));
        }
        LegalMoveSet { moves }
    }

    pub fn get(&self, dir: Direction) -> Option<&ResolvedMove> {
        self.moves[dir.index()].as_ref()
    }

    pub fn contains(&self, dir: Direction) -> bool {
        self.moves[dir.index()].is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.iter().all(Option::is_none)
    }

    pub fn len(&self) -> usize {
        self.moves.iter().filter(|m| m.is_some()).count()
    }

    /// The legal directions.
    pub fn directions(&self) -> DirectionSet {
        let mut set = DirectionSet::new();
        for dir in Direction::ALL {
            if self.contains(dir) {
                set.insert(dir);
            }
        }
        set
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, &ResolvedMove)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.get(d).map(|m| (d, m)))
    }
}
