//! Random tile placement after accepted moves.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::common::BoardError;
use crate::config::{BASE_TILE, SPAWN_RATE_FOUR, SPAWN_TILE_FOUR};
use crate::grid::Grid;
use crate::mask::CellMask;

/// Places new tiles into empty cells using its own generator.
#[derive(Clone, Debug)]
pub struct Spawner {
    rng: SmallRng,
}

impl Spawner {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    /// Deterministic spawner for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Spawner seeded from the thread-local entropy source.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        let mut seed_rng = rand::rng();
        Self::new(SmallRng::from_rng(&mut seed_rng))
    }

    /// Value of the next tile: [`SPAWN_TILE_FOUR`] with probability
    /// [`SPAWN_RATE_FOUR`], [`BASE_TILE`] otherwise.
    fn next_value(&mut self) -> u32 {
        if self.rng.random_bool(SPAWN_RATE_FOUR) {
            SPAWN_TILE_FOUR
        } else {
            BASE_TILE
        }
    }

    /// Place `count` tiles into distinct empty cells of `grid`.
    ///
    /// Fails with [`BoardError::InsufficientSpace`] and leaves `grid` untouched
    /// if fewer than `count` cells are empty.
    pub fn spawn(&mut self, grid: &mut Grid, count: usize) -> Result<(), BoardError> {
        let mut free = CellMask::empty_cells(grid);
        let available = free.count_ones();
        if count > available {
            return Err(BoardError::InsufficientSpace {
                requested: count,
                available,
            });
        }
        for _ in 0..count {
            let pick = self.rng.random_range(0..free.count_ones());
            let Some((r, c)) = free.nth(pick) else {
                unreachable!("pick is below the number of free cells");
            };
            free.clear(r, c);
            let value = self.next_value();
            grid[r][c] = value;
            log::trace!("spawned {} at ({}, {})", value, r, c);
        }
        Ok(())
    }
}
