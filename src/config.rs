/// Side length of the square grid.
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid.
pub const NUM_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Tiles seeded onto a fresh board by `reset`.
pub const INITIAL_TILES: usize = 2;

/// Tiles spawned after every accepted move.
pub const TILES_PER_MOVE: usize = 1;

/// Value of an ordinary spawned tile.
pub const BASE_TILE: u32 = 2;

/// Value of the less common spawned tile.
pub const SPAWN_TILE_FOUR: u32 = 4;

/// Probability that a spawned tile is [`SPAWN_TILE_FOUR`] instead of [`BASE_TILE`].
pub const SPAWN_RATE_FOUR: f64 = 0.1;

/// Largest tile a `u32` cell can hold. Tiles of this value never merge.
pub const MAX_TILE: u32 = 1 << 31;

/// Returns `true` if two equal tiles of `value` may merge without overflowing.
pub const fn can_merge(value: u32) -> bool {
    value != 0 && value < MAX_TILE
}

/// Returns `true` if `value` may appear in a grid cell: zero or a power of two
/// between [`BASE_TILE`] and [`MAX_TILE`].
pub const fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= BASE_TILE && value <= MAX_TILE && value.is_power_of_two())
}
