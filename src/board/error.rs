//! Error types for board construction and move input.

use std::fmt;

/// Error type for direction parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectionError {
    /// Name is not one of the four directions
    UnknownName { found: String },
    /// Numeric index outside 0-3
    IndexOutOfRange { index: u8 },
}

impl fmt::Display for DirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectionError::UnknownName { found } => {
                write!(f, "Unknown direction '{found}', expected up, down, left or right")
            }
            DirectionError::IndexOutOfRange { index } => {
                write!(f, "Direction index {index} out of range (must be 0-3)")
            }
        }
    }
}

impl std::error::Error for DirectionError {}

/// Error type for invalid tile values or coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    /// Value is not zero and not a power of two in 2..=MAX_TILE
    InvalidValue { value: u32 },
    /// Row out of bounds (must be 0-3)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-3)
    ColumnOutOfBounds { col: usize },
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileError::InvalidValue { value } => {
                write!(f, "Invalid tile value {value}, expected 0 or a power of two from 2 to 131072")
            }
            TileError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-3)")
            }
            TileError::ColumnOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-3)")
            }
        }
    }
}

impl std::error::Error for TileError {}

/// Error type for board notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Wrong number of '/'-separated rows
    WrongRowCount { found: usize },
    /// Wrong number of cells in a row
    WrongCellCount { row: usize, found: usize },
    /// Cell text is not a number
    InvalidCell { row: usize, text: String },
    /// Cell parsed but is not a legal tile
    InvalidTile { row: usize, source: TileError },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::WrongRowCount { found } => {
                write!(f, "Board notation must have 4 rows, found {found}")
            }
            NotationError::WrongCellCount { row, found } => {
                write!(f, "Row {row} must have 4 cells, found {found}")
            }
            NotationError::InvalidCell { row, text } => {
                write!(f, "Invalid cell '{text}' in row {row}")
            }
            NotationError::InvalidTile { row, source } => {
                write!(f, "Invalid tile in row {row}: {source}")
            }
        }
    }
}

impl std::error::Error for NotationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NotationError::InvalidTile { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Error type for rejected game configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Probability of spawning a 4 must lie in [0, 1]
    FourProbabilityOutOfRange { found: f64 },
    /// More start tiles than cells on the board
    TooManyStartTiles { found: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FourProbabilityOutOfRange { found } => {
                write!(f, "Four probability {found} out of range (must be 0-1)")
            }
            ConfigError::TooManyStartTiles { found } => {
                write!(f, "Cannot place {found} start tiles on a 16-cell board")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
