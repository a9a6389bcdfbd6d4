
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Side { White, Black }

impl Side {
    #[inline] pub fn opponent(self) -> Side { if self == Side::White { Side::Black } else { Side::White } }

    /// Rank direction pawns of this side advance in.
    #[inline] pub fn forward(self) -> Direction { if self == Side::White { Direction::North } else { Direction::South } }

    #[inline] pub fn home_rank(self) -> u8 { if self == Side::White { 0 } else { 7 } }
    #[inline] pub fn pawn_rank(self) -> u8 { if self == Side::White { 1 } else { 6 } }
    #[inline] pub fn last_rank(self) -> u8 { if self == Side::White { 7 } else { 0 } }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PieceKind { Pawn, Rook, Knight, Bishop, Queen, King }

impl PieceKind {
    /// Material value. The king's value is deliberately overwhelming so that
    /// no material swing can outweigh losing it; material sums in the
    /// evaluator skip kings entirely.
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            PieceKind::Pawn => 1.0,
            PieceKind::Rook => 5.0,
            PieceKind::Knight => 3.0,
            PieceKind::Bishop => 3.0,
            PieceKind::Queen => 9.0,
            PieceKind::King => 1_000_000.0,
        }
    }

    #[inline]
    pub(crate) fn table_index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Rook => 1,
            PieceKind::Knight => 2,
            PieceKind::Bishop => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    pub(crate) fn abbrev(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pa",
            PieceKind::Rook => "Ro",
            PieceKind::Knight => "Kn",
            PieceKind::Bishop => "Bi",
            PieceKind::Queen => "Qu",
            PieceKind::King => "Ki",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Piece { pub kind: PieceKind, pub side: Side }

/// Directions in 0x88 index space: one rank is 16 cells, so North is +16 and
/// the upper half of each rank row acts as an off-board sentinel.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction { North, South, East, West, NorthEast, NorthWest, SouthEast, SouthWest }

impl Direction {
    #[inline]
    pub const fn offset(self) -> i16 {
        match self {
            Direction::North => 16,
            Direction::South => -16,
            Direction::East => 1,
            Direction::West => -1,
            Direction::NorthEast => 17,
            Direction::NorthWest => 15,
            Direction::SouthEast => -15,
            Direction::SouthWest => -17,
        }
    }
}

pub const STRAIGHT: [Direction; 4] =
    [Direction::North, Direction::South, Direction::East, Direction::West];

pub const DIAGONAL: [Direction; 4] =
    [Direction::NorthEast, Direction::NorthWest, Direction::SouthEast, Direction::SouthWest];

pub const EVERY: [Direction; 8] = [
    Direction::North, Direction::South, Direction::East, Direction::West,
    Direction::NorthEast, Direction::NorthWest, Direction::SouthEast, Direction::SouthWest,
];

/// One cardinal step composed with two steps in an orthogonal cardinal.
pub const KNIGHT_JUMPS: [i16; 8] = [
    16 + 2, 16 - 2, -16 + 2, -16 - 2,
    32 + 1, 32 - 1, -32 + 1, -32 - 1,
];

/// A (from, to) pair of 0x88 indices. Promotion is board-level configuration
/// (`Board::with_promotion_piece`), not part of the move.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Move {
    pub from: u8,
    pub to: u8,
}

impl Move {
    #[inline]
    pub fn new(from: u8, to: u8) -> Self {
        Move { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            (b'a' + file_of(self.from)) as char,
            (b'1' + rank_of(self.from)) as char,
            (b'a' + file_of(self.to)) as char,
            (b'1' + rank_of(self.to)) as char,
        )
    }
}

#[inline]
pub fn on_board(i: i16) -> bool {
    i & 0x88 == 0
}

#[inline]
pub fn index(file: u8, rank: u8) -> u8 {
    file + 16 * rank
}

#[inline]
pub fn sq(file: i16, rank: i16) -> Option<u8> {
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some((rank * 16 + file) as u8)
    } else {
        None
    }
}

#[inline]
pub fn file_of(i: u8) -> u8 {
    i & 0xF
}

#[inline]
pub fn rank_of(i: u8) -> u8 {
    i >> 4
}

/// Chebyshev distance from the board edge; 0 on the rim, 3 in the center.
#[inline]
pub fn distance_from_edge(i: u8) -> u8 {
    let x = file_of(i);
    let y = rank_of(i);
    x.min(7 - x).max(y.min(7 - y))
}

/// How far up the board a piece of `side` standing on `i` has pushed.
#[inline]
pub fn offsides_rank(i: u8, side: Side) -> u8 {
    match side {
        Side::White => rank_of(i),
        Side::Black => 7 - rank_of(i),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_bit_test_rejects_off_board() {
        for rank in 0..8i16 {
            for file in 0..8i16 {
                assert!(on_board(rank * 16 + file));
            }
            for file in 8..16i16 {
                assert!(!on_board(rank * 16 + file));
            }
        }
        assert!(!on_board(-1));
        assert!(!on_board(-33));
        assert!(!on_board(128));
    }

    #[test]
    fn distance_from_edge_samples() {
        assert_eq!(distance_from_edge(index(3, 3)), 3);
        assert_eq!(distance_from_edge(index(0, 0)), 0);
        assert_eq!(distance_from_edge(index(0, 7)), 0);
        assert_eq!(distance_from_edge(index(6, 6)), 1);
    }

    #[test]
    fn knight_jumps_from_center_all_land_on_board() {
        let from = index(3, 3) as i16;
        let count = KNIGHT_JUMPS.iter().filter(|&&off| on_board(from + off)).count();
        assert_eq!(count, 8);
    }

    #[test]
    fn offsides_rank_counts_up_the_board() {
        assert_eq!(offsides_rank(index(0, 1), Side::White), 1);
        assert_eq!(offsides_rank(index(0, 3), Side::White), 3);
        assert_eq!(offsides_rank(index(0, 6), Side::Black), 1);
        assert_eq!(offsides_rank(index(0, 4), Side::Black), 3);
    }
}
