pub mod board;
pub mod engine;

pub use board::{Board, Cell, Direction, RandomSource};
pub use engine::{Game, GameConfig, GameStatus, MoveResult};
