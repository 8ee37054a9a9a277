//! Game session: one board, one score, one random source.

use rand::rngs::StdRng;

use crate::board::{Board, Cell, ConfigError, Direction, RandomSource, RngSource};

use super::config::GameConfig;

/// Whether the session can still change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    Active,
    /// Board is full with no equal neighbours. No move changes it.
    Terminal,
}

/// Outcome of [`Game::apply_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveResult {
    /// Board after the move and spawn; the unchanged board when `moved` is false
    pub board: Board,
    pub score_delta: u64,
    pub moved: bool,
    /// Tile placed after a committed move, if there was room
    pub spawned: Option<(Cell, u32)>,
}

/// Owns the board and score of one session.
///
/// ```
/// use game_2048::board::Direction;
/// use game_2048::engine::Game;
///
/// let mut game = Game::seeded(42);
/// assert_eq!(game.board().count_tiles(), 2);
/// let result = game.apply_move(Direction::Left);
/// assert!(game.score() >= result.score_delta);
/// ```
#[derive(Clone, Debug)]
pub struct Game<S = RngSource<StdRng>> {
    board: Board,
    score: u64,
    moves_made: u64,
    status: GameStatus,
    config: GameConfig,
    source: S,
}

impl Game {
    /// New session seeded from the OS.
    #[must_use]
    pub fn new() -> Self {
        Game::with_source(RngSource::from_entropy())
    }

    /// New session with a reproducible tile sequence.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Game::with_source(RngSource::seeded(seed))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RandomSource> Game<S> {
    /// New session with default settings, already reset.
    pub fn with_source(source: S) -> Self {
        let mut game = Game::unstarted(Board::empty(), 0, GameConfig::default(), source);
        game.reset();
        game
    }

    /// New session with custom settings, already reset.
    pub fn with_config(config: GameConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut game = Game::unstarted(Board::empty(), 0, config, source);
        game.reset();
        Ok(game)
    }

    /// Resume from a given position without spawning.
    pub fn with_board(board: Board, score: u64, source: S) -> Self {
        Game::unstarted(board, score, GameConfig::default(), source)
    }

    /// Resume from a given position with custom settings, without spawning.
    pub fn with_board_and_config(
        board: Board,
        score: u64,
        config: GameConfig,
        source: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Game::unstarted(board, score, config, source))
    }

    fn unstarted(board: Board, score: u64, config: GameConfig, source: S) -> Self {
        let status = status_of(&board);
        Game {
            board,
            score,
            moves_made: 0,
            status,
            config,
            source,
        }
    }

    /// Clear the board and score, then spawn the start tiles.
    pub fn reset(&mut self) {
        self.board = Board::empty();
        self.score = 0;
        self.moves_made = 0;
        for _ in 0..self.config.start_tiles {
            self.board
                .spawn_tile(&mut self.source, self.config.four_probability);
        }
        self.status = status_of(&self.board);

        #[cfg(feature = "logging")]
        log::debug!("reset: {}", self.board.to_notation());
    }

    /// Slide toward `dir`; on change, commit and spawn one tile.
    ///
    /// A move that changes nothing leaves board and score untouched and
    /// draws nothing from the random source.
    pub fn apply_move(&mut self, dir: Direction) -> MoveResult {
        let slide = self.board.slide(dir);
        if !slide.moved {
            return MoveResult {
                board: self.board,
                score_delta: 0,
                moved: false,
                spawned: None,
            };
        }

        self.board = slide.board;
        self.score = self.score.saturating_add(slide.score_delta);
        self.moves_made += 1;
        let spawned = self
            .board
            .spawn_tile(&mut self.source, self.config.four_probability);
        self.status = status_of(&self.board);

        #[cfg(debug_assertions)]
        self.board.debug_check_tiles();

        #[cfg(feature = "logging")]
        {
            log::debug!(
                "move {} {dir}: +{} (score {}) {}",
                self.moves_made,
                slide.score_delta,
                self.score,
                self.board.to_notation()
            );
            if let Some((cell, value)) = spawned {
                log::trace!("spawned {value} at ({}, {})", cell.row(), cell.col());
            }
            if self.status == GameStatus::Terminal {
                log::info!(
                    "game over after {} moves, score {}, highest tile {}",
                    self.moves_made,
                    self.score,
                    self.board.highest_tile()
                );
            }
        }

        MoveResult {
            board: self.board,
            score_delta: slide.score_delta,
            moved: true,
            spawned,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn is_terminal(&self) -> bool {
        self.status == GameStatus::Terminal
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Committed moves since the last reset.
    pub fn moves_made(&self) -> u64 {
        self.moves_made
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

fn status_of(board: &Board) -> GameStatus {
    if board.is_terminal() {
        GameStatus::Terminal
    } else {
        GameStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SequenceSource;

    #[test]
    fn test_reset_spawns_two_tiles() {
        let game = Game::seeded(1);
        assert_eq!(game.board().count_tiles(), 2);
        assert_eq!(game.score(), 0);
        assert_eq!(game.moves_made(), 0);
        assert_eq!(game.status(), GameStatus::Active);
        for row in game.board().cells() {
            for &value in row {
                assert!(value == 0 || value == 2 || value == 4);
            }
        }
    }

    #[test]
    fn test_reset_clears_previous_session() {
        let mut game = Game::with_board(
            Board::from_notation("2 4 8 16/32 64 128 256/2 4 8 16/32 64 128 256"),
            5000,
            SequenceSource::new(vec![0.0, 0.0]),
        );
        game.reset();
        assert_eq!(game.score(), 0);
        assert_eq!(game.board().to_notation(), "2 2 0 0/0 0 0 0/0 0 0 0/0 0 0 0");
        assert_eq!(game.status(), GameStatus::Active);
    }

    #[test]
    fn test_move_example_left() {
        let board = Board::from_notation("2 2 0 0/0 0 0 0/0 0 0 0/0 0 0 0");
        // After the slide the empties are 15 cells; 0.0 picks Cell(0, 1)
        let mut game = Game::with_board(board, 0, SequenceSource::new(vec![0.0, 0.0]));
        let result = game.apply_move(Direction::Left);

        assert!(result.moved);
        assert_eq!(result.score_delta, 4);
        assert_eq!(result.spawned, Some((Cell(0, 1), 2)));
        assert_eq!(game.board().cells()[0], [4, 2, 0, 0]);
        assert_eq!(game.score(), 4);
        assert_eq!(game.moves_made(), 1);
        assert_eq!(result.board, *game.board());
    }

    #[test]
    fn test_noop_move_draws_nothing() {
        let board = Board::from_notation("2 4 0 0/0 0 0 0/0 0 0 0/0 0 0 0");
        let mut game = Game::with_board(board, 12, SequenceSource::new(vec![0.5]));
        let result = game.apply_move(Direction::Left);

        assert!(!result.moved);
        assert_eq!(result.score_delta, 0);
        assert_eq!(result.spawned, None);
        assert_eq!(*game.board(), board);
        assert_eq!(game.score(), 12);
        assert_eq!(game.moves_made(), 0);
        assert_eq!(game.source().draws(), 0);
    }

    #[test]
    fn test_move_into_terminal() {
        // Left merges the two 2s in row 3; the spawn fills the last gap
        let board = Board::from_notation("2 4 2 4/4 2 4 2/2 4 2 4/2 2 8 16");
        let mut game = Game::with_board(board, 0, SequenceSource::new(vec![0.0]));
        assert_eq!(game.status(), GameStatus::Active);
        let result = game.apply_move(Direction::Left);

        assert!(result.moved);
        assert_eq!(result.spawned, Some((Cell(3, 3), 2)));
        assert_eq!(game.board().cells()[3], [4, 8, 16, 2]);
        assert!(game.is_terminal());
        assert_eq!(game.status(), GameStatus::Terminal);
    }

    #[test]
    fn test_with_config_validates() {
        let bad = GameConfig::default().with_four_probability(-0.1);
        assert!(Game::with_config(bad, SequenceSource::default()).is_err());

        let config = GameConfig::default().with_start_tiles(4);
        let game = Game::with_config(config, RngSource::seeded(3)).unwrap();
        assert_eq!(game.board().count_tiles(), 4);
        assert_eq!(game.config().start_tiles, 4);
    }

    #[test]
    fn test_score_saturates() {
        let board = Board::from_notation("2 2 0 0/0 0 0 0/0 0 0 0/0 0 0 0");
        let mut game = Game::with_board(board, u64::MAX - 1, SequenceSource::new(vec![0.0]));
        let result = game.apply_move(Direction::Left);
        assert!(result.moved);
        assert_eq!(result.score_delta, 4);
        assert_eq!(game.score(), u64::MAX);
    }

    #[test]
    fn test_resume_keeps_custom_config() {
        let board = Board::from_notation("2 2 0 0/0 0 0 0/0 0 0 0/0 0 0 0");
        let config = GameConfig::default().with_four_probability(1.0);
        let mut game =
            Game::with_board_and_config(board, 40, config, SequenceSource::new(vec![0.0]))
                .unwrap();
        assert_eq!(game.config(), &config);
        assert_eq!(game.score(), 40);
        assert_eq!(game.board().count_tiles(), 2);

        let result = game.apply_move(Direction::Left);
        assert_eq!(result.spawned, Some((Cell(0, 1), 4)));
        assert_eq!(game.score(), 44);

        let bad = GameConfig::default().with_start_tiles(20);
        assert!(Game::with_board_and_config(board, 0, bad, SequenceSource::default()).is_err());
    }

    #[test]
    fn test_always_four_config() {
        let config = GameConfig::default().with_four_probability(1.0);
        let game = Game::with_config(config, RngSource::seeded(9)).unwrap();
        let fours = game.board().cells().iter().flatten().filter(|&&v| v == 4).count();
        assert_eq!(fours, 2);
    }
}
