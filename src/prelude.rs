//! Commonly used types and utilities for ease of import.

pub use crate::{Board, BoardError, BoardState, Direction, GameStatus, Grid, LegalMoveSet};

#[cfg(feature = "std")]
pub use crate::init_logging;
