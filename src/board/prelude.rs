//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use game_2048::board::prelude::*;
//! ```

pub use super::{
    Board, BoardBuilder, Cell, Direction, DirectionError, NotationError, RandomSource, RngSource,
    SequenceSource, Slide, TileError,
};
pub use crate::engine::{Game, GameConfig, GameStatus, MoveResult};
