
use crate::types::{Piece, Side};
use lazy_static::lazy_static;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Random tables for position keys. Keys feed the derived-value caches in
/// `movecache`, so they must cover everything those values depend on:
/// occupancy, side to move, and castling rights.
pub struct Zobrist {
    pub psq: [[[u64; 128]; 6]; 2],
    pub stm: u64,
    pub castle: [u64; 4],
}

impl Zobrist {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE_BABE_F005_u64);
        let mut psq = [[[0u64; 128]; 6]; 2];
        for side in 0..2 {
            for kind in 0..6 {
                for cell in 0..128 {
                    psq[side][kind][cell] = rng.next_u64();
                }
            }
        }
        let stm = rng.next_u64();
        let mut castle = [0u64; 4];
        for key in castle.iter_mut() {
            *key = rng.next_u64();
        }
        Self { psq, stm, castle }
    }

    #[inline]
    pub fn piece_key(&self, p: Piece, cell: u8) -> u64 {
        let s = if matches!(p.side, Side::White) { 0 } else { 1 };
        self.psq[s][p.kind.table_index()][cell as usize]
    }
}

lazy_static! {
    pub static ref ZOBRIST: Zobrist = Zobrist::new();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn keys_are_distinct_per_cell_and_kind() {
        let p = Piece { kind: PieceKind::Pawn, side: Side::White };
        let n = Piece { kind: PieceKind::Knight, side: Side::White };
        assert_ne!(ZOBRIST.piece_key(p, 0), ZOBRIST.piece_key(p, 1));
        assert_ne!(ZOBRIST.piece_key(p, 0), ZOBRIST.piece_key(n, 0));
        assert_ne!(ZOBRIST.stm, 0);
    }
}
