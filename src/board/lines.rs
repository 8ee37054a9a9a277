//! Line extraction tables and the compact-and-merge rule.
//!
//! Every move is reduced to four independent lines, each listed in the order
//! tiles travel toward index 0. Rows and columns, forward and reversed, all
//! go through the same [`merge_line`] routine.

use once_cell::sync::Lazy;

use super::{Cell, Direction, BOARD_SIZE, EMPTY, MAX_TILE};

pub(crate) type Line = [u32; BOARD_SIZE];

/// Cells of each line per direction, ordered from the edge tiles slide toward.
pub(crate) static LINE_CELLS: Lazy<[[[Cell; BOARD_SIZE]; BOARD_SIZE]; 4]> = Lazy::new(|| {
    let mut table = [[[Cell(0, 0); BOARD_SIZE]; BOARD_SIZE]; 4];
    for dir in Direction::ALL {
        for line in 0..BOARD_SIZE {
            for pos in 0..BOARD_SIZE {
                let along = if dir.is_reversed() {
                    BOARD_SIZE - 1 - pos
                } else {
                    pos
                };
                table[dir.index()][line][pos] = if dir.is_horizontal() {
                    Cell(line, along)
                } else {
                    Cell(along, line)
                };
            }
        }
    }
    table
});

/// Cells of line `line` for `dir`.
#[inline]
pub(crate) fn line_cells(dir: Direction, line: usize) -> &'static [Cell; BOARD_SIZE] {
    &LINE_CELLS[dir.index()][line]
}

/// Outcome of merging one line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct MergedLine {
    pub(crate) line: Line,
    pub(crate) score: u64,
    pub(crate) merges: u32,
}

/// Slide a line toward index 0, merging equal neighbours once each.
///
/// A tile produced by a merge is not merged again in the same pass, so
/// `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`. Tiles at [`MAX_TILE`] never merge.
pub(crate) fn merge_line(input: Line) -> MergedLine {
    let mut out = [EMPTY; BOARD_SIZE];
    let mut len = 0;
    let mut score = 0u64;
    let mut merges = 0u32;
    // Last placed tile, still eligible to absorb an equal neighbour.
    let mut pending = false;

    for &value in input.iter().filter(|&&v| v != EMPTY) {
        if pending && out[len - 1] == value && value < MAX_TILE {
            out[len - 1] = value * 2;
            score += u64::from(value) * 2;
            merges += 1;
            pending = false;
        } else {
            out[len] = value;
            len += 1;
            pending = true;
        }
    }

    MergedLine {
        line: out,
        score,
        merges,
    }
}
