use super::lines::{line_cells, merge_line, Line};
use super::{Board, Direction, BOARD_SIZE, EMPTY};

/// Deterministic half of a move: the board after sliding, before any spawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    pub board: Board,
    pub score_delta: u64,
    pub merges: u32,
    pub moved: bool,
}

impl Board {
    /// Slide every line toward `dir`, merging equal neighbours once.
    ///
    /// `self` is left untouched; `moved` reports whether any cell changed.
    #[must_use]
    pub fn slide(&self, dir: Direction) -> Slide {
        let mut next = *self;
        let mut score_delta = 0;
        let mut merges = 0;
        let mut moved = false;

        for line in 0..BOARD_SIZE {
            let cells = line_cells(dir, line);
            let mut original: Line = [EMPTY; BOARD_SIZE];
            for (slot, &cell) in original.iter_mut().zip(cells) {
                *slot = self.get(cell);
            }

            let merged = merge_line(original);
            if merged.line == original {
                continue;
            }
            moved = true;
            score_delta += merged.score;
            merges += merged.merges;
            for (&value, &cell) in merged.line.iter().zip(cells) {
                next.set(cell, value);
            }
        }

        Slide {
            board: next,
            score_delta,
            merges,
            moved,
        }
    }

    /// True if sliding toward `dir` would change the board.
    #[must_use]
    pub fn can_move(&self, dir: Direction) -> bool {
        self.slide(dir).moved
    }
}
