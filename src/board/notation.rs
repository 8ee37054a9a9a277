use std::fmt;
use std::str::FromStr;

use super::error::{DirectionError, NotationError};
use super::types::check_tile;
use super::{Board, Direction, BOARD_SIZE, EMPTY};

impl Board {
    /// Parse a board from row notation, e.g. `"2 2 0 0/0 0 0 0/0 0 0 0/0 0 0 4"`.
    ///
    /// Rows are separated by `/`, cells by whitespace; `0` or `.` is empty.
    pub fn try_from_notation(text: &str) -> Result<Self, NotationError> {
        let rows: Vec<&str> = text.trim().split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(NotationError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row, row_text) in rows.iter().enumerate() {
            let cells: Vec<&str> = row_text.split_whitespace().collect();
            if cells.len() != BOARD_SIZE {
                return Err(NotationError::WrongCellCount {
                    row,
                    found: cells.len(),
                });
            }
            for (col, text) in cells.iter().enumerate() {
                let value = if *text == "." {
                    EMPTY
                } else {
                    text.parse::<u32>().map_err(|_| NotationError::InvalidCell {
                        row,
                        text: (*text).to_string(),
                    })?
                };
                board.cells[row][col] =
                    check_tile(value).map_err(|source| NotationError::InvalidTile { row, source })?;
            }
        }
        Ok(board)
    }

    /// Parse a board from row notation.
    ///
    /// # Panics
    /// Panics if the notation is invalid. Use `try_from_notation` for fallible parsing.
    #[must_use]
    pub fn from_notation(text: &str) -> Self {
        Self::try_from_notation(text).expect("Invalid board notation")
    }

    /// Render the board in row notation.
    #[must_use]
    pub fn to_notation(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(u32::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl FromStr for Board {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_notation(s)
    }
}

impl FromStr for Direction {
    type Err = DirectionError;

    /// Accepts `up`/`down`/`left`/`right` in any case, and browser key names
    /// such as `ArrowUp`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let name = lowered.strip_prefix("arrow").unwrap_or(lowered.as_str());
        match name {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(DirectionError::UnknownName {
                found: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}
