
use crate::board::Board;

/// Count leaf positions of the legal-move tree to a fixed depth. The
/// standard way to catch generator bugs: the counts for the starting
/// position are known exactly.
pub fn perft(b: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = b.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .into_iter()
        .map(|m| perft(&b.apply_unchecked(m), depth - 1))
        .sum()
}
