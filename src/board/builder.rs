//! Fluent builder for constructing board positions.
//!
//! Allows creating positions tile by tile rather than parsing notation.
//!
//! # Example
//! ```
//! use game_2048::board::{BoardBuilder, Cell};
//!
//! let board = BoardBuilder::new()
//!     .tile(Cell(0, 0), 2)
//!     .tile(Cell(0, 1), 2)
//!     .row(3, [4, 8, 16, 32])
//!     .build()
//!     .unwrap();
//! assert_eq!(board.count_tiles(), 6);
//! ```

use super::error::TileError;
use super::types::check_tile;
use super::{Board, Cell, BOARD_SIZE, EMPTY};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    tiles: Vec<(Cell, u32)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { tiles: Vec::new() }
    }

    /// Create a builder starting from an existing board.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let mut builder = Self::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let value = board.get(Cell(row, col));
                if value != EMPTY {
                    builder.tiles.push((Cell(row, col), value));
                }
            }
        }
        builder
    }

    /// Place a tile, replacing whatever was there.
    #[must_use]
    pub fn tile(mut self, cell: Cell, value: u32) -> Self {
        self.tiles.retain(|(c, _)| *c != cell);
        self.tiles.push((cell, value));
        self
    }

    /// Remove a tile.
    #[must_use]
    pub fn clear(mut self, cell: Cell) -> Self {
        self.tiles.retain(|(c, _)| *c != cell);
        self
    }

    /// Set a whole row at once; zeros clear cells.
    #[must_use]
    pub fn row(mut self, row: usize, values: [u32; BOARD_SIZE]) -> Self {
        for (col, value) in values.into_iter().enumerate() {
            self = if value == EMPTY {
                self.clear(Cell(row, col))
            } else {
                self.tile(Cell(row, col), value)
            };
        }
        self
    }

    /// Build the board, validating every coordinate and value.
    pub fn build(self) -> Result<Board, TileError> {
        let mut board = Board::empty();
        for (cell, value) in self.tiles {
            let cell = Cell::try_new(cell.0, cell.1)?;
            board.set(cell, check_tile(value)?);
        }
        Ok(board)
    }
}
