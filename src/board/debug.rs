use super::types::is_valid_tile;
use super::Board;

#[cfg(debug_assertions)]
impl Board {
    /// Panic if any cell holds something other than 0 or a tile in 2..=MAX_TILE.
    pub(crate) fn debug_check_tiles(&self) {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                assert!(
                    is_valid_tile(value),
                    "invalid tile {value} at ({row}, {col})\n{}",
                    self
                );
            }
        }
    }
}
