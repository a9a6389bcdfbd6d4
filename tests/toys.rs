//! The toy instances exist to prove the search core is generic over the
//! Game contract, not written for chess.

use phalanx::connect_four::Stacks;
use phalanx::game::Game;
use phalanx::search::Search;
use phalanx::tictactoe::Grid;

#[test]
fn one_driver_plays_both_toys() {
    let mut search = Search::new();

    let grid = Grid::new();
    let g1 = search.best(&grid, 3).unwrap();
    assert!(grid.successors().iter().any(|s| s.same_position(&g1)));

    let stacks = Stacks::new();
    let s1 = search.best(&stacks, 3).unwrap();
    assert!(stacks.successors().iter().any(|s| s.same_position(&s1)));
}

#[test]
fn budgeted_driver_works_off_the_chess_board_too() {
    let mut search = Search::new();
    let grid = Grid::new();
    let chosen = search.best_within(&grid, 100).unwrap();
    assert!(grid.successors().iter().any(|s| s.same_position(&chosen)));
}

#[test]
fn tictactoe_never_loses_to_a_greedy_opponent() {
    // deep player as White, one-ply player as Black
    let mut g = Grid::new();
    let mut deep = Search::new();
    let mut greedy = Search::new();
    loop {
        match deep.best(&g, 9) {
            Some(next) => g = next,
            None => break,
        }
        match greedy.best(&g, 1) {
            Some(next) => g = next,
            None => break,
        }
    }
    assert!(g.winner().is_none() || g.winner() == Some(phalanx::types::Side::White));
}
