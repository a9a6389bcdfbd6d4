use std::time::Instant;

use phalanx::board::Board;
use phalanx::search::Search;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // A quiet middlegame-ish position: play a few opening moves first.
    let mut board = Board::starting();
    for (ff, fr, tf, tr) in [(4u8, 1u8, 4u8, 3u8), (4, 6, 4, 4), (6, 0, 5, 2), (1, 7, 2, 5)] {
        board = board.make_move(ff, fr, tf, tr)?;
    }

    println!("Searching with a 2000 ms budget from:\n{board}");

    let mut search = Search::new();
    let start = Instant::now();
    let chosen = search
        .best_within(&board, 2000)
        .expect("the position is not terminal");

    println!(
        "Search visited {} nodes in {} ms and chose:\n{chosen}",
        search.nodes,
        start.elapsed().as_millis()
    );
    Ok(())
}
