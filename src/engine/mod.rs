//! Session engine for the rendering/input layer.
//!
//! [`Game`] owns the only mutable board and score. Callers translate their
//! input into a [`Direction`](crate::board::Direction), call
//! [`Game::apply_move`] and render the returned [`MoveResult`].

mod config;
mod controller;

pub use config::GameConfig;
pub use controller::{Game, GameStatus, MoveResult};
