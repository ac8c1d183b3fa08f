//! Common types for the board engine: directions, game status and errors.

/// Direction in which all tiles slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, ordered by their raw code.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Raw code of the direction (0 = Left, 1 = Right, 2 = Up, 3 = Down).
    pub const fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }

    /// Lines run along rows for horizontal moves and along columns otherwise.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Right and Down read their lines from the far end.
    pub const fn is_reversed(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}

impl TryFrom<u8> for Direction {
    type Error = BoardError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(code as usize)
            .copied()
            .ok_or(BoardError::UnknownDirection(code))
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}

/// Lifecycle status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// At least one direction is legal.
    Running,
    /// No direction is legal; only `reset` leaves this state.
    Ended,
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Supplied matrix is not 4×4. `cols` is the first offending row length.
    InvalidDimensions { rows: usize, cols: usize },
    /// A cell holds a value that is neither 0 nor a power of two >= 2.
    InvalidTile { row: usize, col: usize, value: u32 },
    /// More tiles were requested than there are empty cells.
    InsufficientSpace { requested: usize, available: usize },
    /// Raw direction code outside 0..=3.
    UnknownDirection(u8),
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidDimensions { rows, cols } => {
                write!(f, "Grid must be 4x4, got {} rows with a row of {} cells", rows, cols)
            }
            BoardError::InvalidTile { row, col, value } => {
                write!(f, "Invalid tile {} at row={}, col={}", value, row, col)
            }
            BoardError::InsufficientSpace {
                requested,
                available,
            } => write!(
                f,
                "Cannot spawn {} tiles with only {} empty cells",
                requested, available
            ),
            BoardError::UnknownDirection(code) => write!(f, "Unknown direction code {}", code),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
