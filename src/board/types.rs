use super::error::{DirectionError, TileError};

/// Side length of the board.
pub const BOARD_SIZE: usize = 4;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Value stored in an empty cell.
pub const EMPTY: u32 = 0;

/// Largest tile a 4x4 board can reach. Tiles at the cap do not merge.
pub const MAX_TILE: u32 = 1 << 17;

pub(crate) fn is_valid_tile(value: u32) -> bool {
    value == EMPTY || (value >= 2 && value <= MAX_TILE && value.is_power_of_two())
}

pub(crate) fn check_tile(value: u32) -> Result<u32, TileError> {
    if is_valid_tile(value) {
        Ok(value)
    } else {
        Err(TileError::InvalidValue { value })
    }
}

/// A board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell(pub usize, pub usize); // (row, col)

impl Cell {
    /// Create a cell, checking bounds.
    pub fn try_new(row: usize, col: usize) -> Result<Self, TileError> {
        if row >= BOARD_SIZE {
            return Err(TileError::RowOutOfBounds { row });
        }
        if col >= BOARD_SIZE {
            return Err(TileError::ColumnOutOfBounds { col });
        }
        Ok(Cell(row, col))
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    pub(crate) const fn index(self) -> usize {
        self.0 * BOARD_SIZE + self.1
    }

    pub(crate) const fn from_index(idx: usize) -> Self {
        Cell(idx / BOARD_SIZE, idx % BOARD_SIZE)
    }
}

/// Direction tiles slide in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Rows are the lines for horizontal moves, columns for vertical ones.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Right and Down walk each line from the far end.
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = DirectionError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(index as usize)
            .copied()
            .ok_or(DirectionError::IndexOutOfRange { index })
    }
}
