#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
mod board;
mod common;
mod config;
mod grid;
mod legality;
#[cfg(feature = "std")]
mod logging;
mod mask;
pub mod prelude;
mod resolver;
mod spawner;

pub use board::*;
pub use common::*;
pub use config::*;
pub use grid::*;
pub use legality::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use mask::CellMask;
pub use resolver::*;
pub use spawner::Spawner;
