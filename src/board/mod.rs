//! 2048 board representation and move rules.
//!
//! A [`Board`] is a plain `Copy` value: sliding returns a new board and
//! spawning mutates in place through an injected [`RandomSource`].
//!
//! # Example
//! ```
//! use game_2048::board::{Board, Direction};
//!
//! let board = Board::from_notation("2 2 0 0/0 0 0 0/0 0 0 0/0 0 0 0");
//! let slide = board.slide(Direction::Left);
//! assert!(slide.moved);
//! assert_eq!(slide.score_delta, 4);
//! ```

mod builder;
#[cfg(debug_assertions)]
mod debug;
mod error;
mod lines;
mod notation;
pub mod prelude;
mod slide;
mod spawn;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{ConfigError, DirectionError, NotationError, TileError};
pub use slide::Slide;
pub use spawn::{RandomSource, RngSource, SequenceSource, DEFAULT_FOUR_PROBABILITY};
pub use state::Board;
pub use types::{Cell, Direction, BOARD_SIZE, CELL_COUNT, EMPTY, MAX_TILE};
