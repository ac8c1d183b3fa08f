//! Board aggregate: grid, score, status and the precomputed legal moves.

use core::fmt;
use rand::rngs::SmallRng;

use crate::common::{BoardError, Direction, GameStatus};
use crate::config::{INITIAL_TILES, TILES_PER_MOVE};
use crate::grid::{grid_from_rows, max_tile, tile_count, Grid, EMPTY_GRID};
use crate::legality::{DirectionSet, LegalMoveSet};
use crate::spawner::Spawner;

/// Serializable board snapshot for callers that persist a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub grid: Grid,
    pub score: u64,
    pub status: GameStatus,
}

/// The game engine. The only place the grid is mutated.
#[derive(Clone)]
pub struct Board {
    grid: Grid,
    score: u64,
    status: GameStatus,
    moves: LegalMoveSet,
    spawner: Spawner,
}

impl Board {
    /// New game seeded from system entropy.
    #[cfg(feature = "std")]
    pub fn new() -> Self {
        Self::with_spawner(Spawner::from_entropy())
    }

    /// New game whose spawns are fully determined by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_spawner(Spawner::with_seed(seed))
    }

    /// New game drawing spawns from `rng`.
    pub fn with_rng(rng: SmallRng) -> Self {
        Self::with_spawner(Spawner::new(rng))
    }

    fn with_spawner(spawner: Spawner) -> Self {
        let mut board = Board {
            grid: EMPTY_GRID,
            score: 0,
            status: GameStatus::Running,
            moves: LegalMoveSet::default(),
            spawner,
        };
        board.reset();
        board
    }

    /// Restore a board from a snapshot. Spawns after this draw from `rng`.
    ///
    /// A running snapshot whose grid has no legal move is restored as ended.
    pub fn from_state(state: BoardState, rng: SmallRng) -> Self {
        let mut board = Board {
            grid: state.grid,
            score: state.score,
            status: state.status,
            moves: LegalMoveSet::default(),
            spawner: Spawner::new(rng),
        };
        board.refresh();
        board
    }

    /// Snapshot of grid, score and status.
    pub fn state(&self) -> BoardState {
        BoardState {
            grid: self.grid,
            score: self.score,
            status: self.status,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Largest tile on the grid.
    pub fn max_tile(&self) -> u32 {
        max_tile(&self.grid)
    }

    /// Number of occupied cells.
    pub fn tile_count(&self) -> usize {
        tile_count(&self.grid)
    }

    /// Directions that would currently change the grid.
    pub fn legal_moves(&self) -> DirectionSet {
        self.moves.directions()
    }

    pub fn is_legal(&self, dir: Direction) -> bool {
        self.moves.contains(dir)
    }

    /// Apply a move. Illegal directions, and any move on an ended board,
    /// leave the board untouched.
    pub fn apply(&mut self, dir: Direction) -> GameStatus {
        if self.status == GameStatus::Ended {
            return self.status;
        }
        let Some(resolved) = self.moves.get(dir).copied() else {
            log::trace!("ignoring illegal move {}", dir);
            return self.status;
        };
        self.grid = resolved.grid;
        self.score += resolved.score;
        log::debug!(
            "applied {}: +{} points, {} merges, score {}",
            dir,
            resolved.score,
            resolved.merges,
            self.score
        );
        self.spawner
            .spawn(&mut self.grid, TILES_PER_MOVE)
            .expect("a legal move always leaves an empty cell");
        self.refresh();
        self.status
    }

    /// Apply a move given by its raw code. Unknown codes are ignored.
    pub fn apply_code(&mut self, code: u8) -> GameStatus {
        match Direction::try_from(code) {
            Ok(dir) => self.apply(dir),
            Err(e) => {
                log::trace!("ignoring move: {}", e);
                self.status
            }
        }
    }

    /// Start a new game in place.
    pub fn reset(&mut self) {
        self.grid = EMPTY_GRID;
        self.score = 0;
        self.status = GameStatus::Running;
        self.spawner
            .spawn(&mut self.grid, INITIAL_TILES)
            .expect("an empty grid has room for the initial tiles");
        self.refresh();
        log::debug!("new game started");
    }

    /// Replace the grid wholesale. Anything that is not a valid 4×4 grid is
    /// rejected and the board is left unchanged.
    ///
    /// An ended board stays ended; only [`Board::reset`] starts a new game.
    pub fn set_grid<R: AsRef<[u32]>>(&mut self, rows: &[R]) -> Result<(), BoardError> {
        let grid = grid_from_rows(rows)?;
        self.grid = grid;
        self.refresh();
        Ok(())
    }

    /// Spawn `count` tiles directly. Fails without changes if there is not
    /// enough room.
    pub fn spawn_tiles(&mut self, count: usize) -> Result<(), BoardError> {
        self.spawner.spawn(&mut self.grid, count)?;
        self.refresh();
        Ok(())
    }

    /// Recompute the legal moves for the current grid and end the game if
    /// there are none.
    fn refresh(&mut self) {
        self.moves = LegalMoveSet::compute(&self.grid);
        if self.moves.is_empty() && self.status == GameStatus::Running {
            self.status = GameStatus::Ended;
            log::debug!("game over with score {}", self.score);
        }
    }
}

#[cfg(feature = "std")]
impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self.status {
            GameStatus::Running => "In Progress",
            GameStatus::Ended => "Game Over",
        };
        writeln!(f, "{}", status)?;
        writeln!(f, "Score: {}", self.score)?;
        for row in self.grid.iter() {
            writeln!(f, "{:?}", row)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("grid", &self.grid)
            .field("score", &self.score)
            .field("status", &self.status)
            .field("legal", &self.moves.directions())
            .finish()
    }
}
