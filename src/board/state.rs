use std::fmt;

use super::error::TileError;
use super::types::check_tile;
use super::{Cell, BOARD_SIZE, CELL_COUNT, EMPTY};

/// A 4x4 grid of tiles. Zero marks an empty cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "[[u32; 4]; 4]", into = "[[u32; 4]; 4]")
)]
pub struct Board {
    pub(crate) cells: [[u32; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// A board with every cell empty.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            cells: [[EMPTY; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Build a board from a row-major grid, rejecting values that are not tiles.
    pub fn from_cells(cells: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, TileError> {
        for row in &cells {
            for &value in row {
                check_tile(value)?;
            }
        }
        Ok(Board { cells })
    }

    /// Read-only view of the grid, row-major.
    #[must_use]
    pub const fn cells(&self) -> &[[u32; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    #[must_use]
    pub const fn get(&self, cell: Cell) -> u32 {
        self.cells[cell.0][cell.1]
    }

    pub(crate) fn set(&mut self, cell: Cell, value: u32) {
        self.cells[cell.0][cell.1] = value;
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..CELL_COUNT)
            .map(Cell::from_index)
            .filter(|&cell| self.get(cell) == EMPTY)
    }

    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == EMPTY).count()
    }

    #[must_use]
    pub fn count_tiles(&self) -> usize {
        CELL_COUNT - self.count_empty()
    }

    /// Largest tile on the board, 0 if empty.
    #[must_use]
    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(EMPTY)
    }

    /// Sum of all tiles.
    #[must_use]
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| u64::from(v)).sum()
    }

    /// True when the board is full and no two orthogonal neighbours match.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let value = self.cells[row][col];
                if value == EMPTY {
                    return false;
                }
                if col + 1 < BOARD_SIZE && value == self.cells[row][col + 1] {
                    return false;
                }
                if row + 1 < BOARD_SIZE && value == self.cells[row + 1][col] {
                    return false;
                }
            }
        }
        true
    }

    /// Inverse of [`Board::is_terminal`].
    #[must_use]
    pub fn has_moves(&self) -> bool {
        !self.is_terminal()
    }
}

impl TryFrom<[[u32; BOARD_SIZE]; BOARD_SIZE]> for Board {
    type Error = TileError;

    fn try_from(cells: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, Self::Error> {
        Board::from_cells(cells)
    }
}

impl From<Board> for [[u32; BOARD_SIZE]; BOARD_SIZE] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "+------+------+------+------+";
        writeln!(f, "{rule}")?;
        for row in &self.cells {
            write!(f, "|")?;
            for &value in row {
                if value == EMPTY {
                    write!(f, "      |")?;
                } else {
                    write!(f, "{value:^6}|")?;
                }
            }
            writeln!(f)?;
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}
