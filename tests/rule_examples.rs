//! Worked examples of the move rules.

use game_2048::board::{Board, Cell, Direction, SequenceSource};
use game_2048::engine::Game;

fn game_at(notation: &str) -> Game<SequenceSource> {
    Game::with_board(
        Board::from_notation(notation),
        0,
        SequenceSource::new(vec![0.999, 0.0]),
    )
}

#[test]
fn pair_merges_left_and_spawns_elsewhere() {
    let mut game = game_at("2 2 0 0/0 0 0 0/0 0 0 0/0 0 0 0");
    let before = game.board().count_tiles();
    let result = game.apply_move(Direction::Left);

    assert!(result.moved);
    assert_eq!(result.score_delta, 4);
    assert_eq!(game.board().cells()[0][0], 4);
    let (cell, value) = result.spawned.unwrap();
    assert_ne!(cell, Cell(0, 0));
    assert_eq!(value, 2);
    // One merge removed a tile, the spawn added one
    assert_eq!(game.board().count_tiles(), before);
}

#[test]
fn four_in_a_row_merges_once_per_pair() {
    let mut game = game_at("2 2 2 2/0 0 0 0/0 0 0 0/0 0 0 0");
    let result = game.apply_move(Direction::Left);
    assert_eq!(&game.board().cells()[0][..2], &[4, 4]);
    assert_eq!(result.score_delta, 8);
    assert_eq!(game.score(), 8);
}

#[test]
fn right_and_left_are_symmetric() {
    let mut game = game_at("2 2 0 0/0 0 0 0/0 0 0 0/0 0 0 0");
    game.apply_move(Direction::Right);
    assert_eq!(game.board().cells()[0][3], 4);

    let mut game = game_at("0 0 2 2/0 0 0 0/0 0 0 0/0 0 0 0");
    game.apply_move(Direction::Left);
    assert_eq!(game.board().cells()[0][0], 4);
}

#[test]
fn spawn_lands_on_last_empty_cell_for_high_draw() {
    let mut game = game_at("2 2 0 0/0 0 0 0/0 0 0 0/0 0 0 0");
    let result = game.apply_move(Direction::Left);
    assert_eq!(result.spawned, Some((Cell(3, 3), 2)));
}

#[test]
fn terminal_board_detected() {
    let game = game_at("2 4 2 4/4 2 4 2/2 4 2 4/4 2 4 2");
    assert!(game.is_terminal());
    let game = game_at("2 4 2 4/4 2 4 2/2 4 2 4/4 2 2 2");
    assert!(!game.is_terminal());
}
