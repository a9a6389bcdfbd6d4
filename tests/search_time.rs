use std::time::{Duration, Instant};

use phalanx::board::Board;
use phalanx::search::{search_within, Search};

#[test]
fn budgeted_search_respects_the_clock() {
    let board = Board::starting();
    let start = Instant::now();
    let chosen = search_within(&board, 300);
    let elapsed = start.elapsed();

    // the worker is cancelled cooperatively, so allow some slack past the
    // budget for it to notice the flag and wind down
    assert!(
        elapsed < Duration::from_millis(2000),
        "search exceeded timeout: {:?}",
        elapsed
    );
    assert!(
        board.successors().iter().any(|s| s.key() == chosen.key()),
        "search failed to return a legal successor"
    );
}

#[test]
fn zero_budget_returns_the_depth_one_answer_quickly() {
    let board = Board::starting();
    let start = Instant::now();
    let chosen = search_within(&board, 0);
    assert!(start.elapsed() < Duration::from_millis(2000));
    assert!(board.successors().iter().any(|s| s.key() == chosen.key()));
}

#[test]
fn negative_budget_is_treated_like_zero() {
    let board = Board::starting();
    let chosen = search_within(&board, -250);
    assert!(board.successors().iter().any(|s| s.key() == chosen.key()));
}

#[test]
fn fixed_depth_search_reports_nodes() {
    let board = Board::starting();
    let mut search = Search::new();
    let chosen = search.best(&board, 2).unwrap();
    assert!(search.nodes > 20, "two plies should visit more than the root's children");
    assert!(board.successors().iter().any(|s| s.key() == chosen.key()));
}
