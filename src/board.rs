use crate::error::{EngineError, EngineResult, MoveRejection};
use crate::eval;
use crate::movegen::{self, Purpose};
use crate::types::{
    file_of, index, rank_of, Direction, Move, Piece, PieceKind, Side,
};
use crate::zobrist::ZOBRIST;

const A1: u8 = 0x00;
const H1: u8 = 0x07;
const A8: u8 = 0x70;
const H8: u8 = 0x77;

const WHITE_EAST: u8 = 1;
const WHITE_WEST: u8 = 2;
const BLACK_EAST: u8 = 4;
const BLACK_WEST: u8 = 8;

#[inline]
fn castle_bit(side: Side, dir: Direction) -> u8 {
    match (side, dir) {
        (Side::White, Direction::East) => WHITE_EAST,
        (Side::White, Direction::West) => WHITE_WEST,
        (Side::Black, Direction::East) => BLACK_EAST,
        (Side::Black, Direction::West) => BLACK_WEST,
        _ => 0,
    }
}

/// An immutable chess position over a 0x88 cell array. Files 8-15 of each
/// rank are sentinels that stay empty forever; off-board motion fails the
/// `i & 0x88` bit test instead of an explicit range check.
///
/// Boards are produced by [`Board::starting`] and by [`Board::make_move`]
/// and never mutated; a successor holds no reference to its predecessor.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 128],
    side_to_move: Side,
    castling: u8,
    ply: u32,
    halfmove: u32,
    promotion: PieceKind,
    key: u64,
}

impl Board {
    /// A board with no pieces at all. White to move, no castling rights.
    pub fn empty() -> Self {
        let mut b = Self {
            squares: [None; 128],
            side_to_move: Side::White,
            castling: 0,
            ply: 0,
            halfmove: 0,
            promotion: PieceKind::Queen,
            key: 0,
        };
        b.recompute_key();
        b
    }

    /// The standard starting position.
    pub fn starting() -> Self {
        let mut b = Self::empty();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, &kind) in back.iter().enumerate() {
            let file = file as u8;
            b.squares[index(file, 0) as usize] = Some(Piece { kind, side: Side::White });
            b.squares[index(file, 1) as usize] =
                Some(Piece { kind: PieceKind::Pawn, side: Side::White });
            b.squares[index(file, 6) as usize] =
                Some(Piece { kind: PieceKind::Pawn, side: Side::Black });
            b.squares[index(file, 7) as usize] = Some(Piece { kind, side: Side::Black });
        }
        b.castling = WHITE_EAST | WHITE_WEST | BLACK_EAST | BLACK_WEST;
        b.recompute_key();
        b
    }

    /// The same position with `piece` placed on `(file, rank)`, for setting
    /// up studies and tests. Castling rights are untouched.
    pub fn place_piece(&self, file: u8, rank: u8, piece: Piece) -> EngineResult<Board> {
        if file > 7 || rank > 7 {
            return Err(EngineError::IndexOutOfRange { file, rank });
        }
        let mut b = self.clone();
        b.squares[index(file, rank) as usize] = Some(piece);
        b.recompute_key();
        Ok(b)
    }

    fn recompute_key(&mut self) {
        let mut k = 0u64;
        for i in movegen::cells() {
            if let Some(p) = self.squares[i as usize] {
                k ^= ZOBRIST.piece_key(p, i);
            }
        }
        if self.side_to_move == Side::White {
            k ^= ZOBRIST.stm;
        }
        for bit in 0..4 {
            if self.castling & (1 << bit) != 0 {
                k ^= ZOBRIST.castle[bit];
            }
        }
        self.key = k;
    }

    /// Occupant of a 0x88 cell. Sentinel cells are always empty.
    #[inline]
    pub fn at(&self, cell: u8) -> Option<Piece> {
        self.squares[cell as usize]
    }

    /// Occupant of `(file, rank)` with `(0,0)` = a1; `None` off the board.
    pub fn piece_at(&self, file: u8, rank: u8) -> Option<Piece> {
        if file > 7 || rank > 7 {
            return None;
        }
        self.at(index(file, rank))
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Half-moves since the last capture, for the fifty-move rule.
    #[inline]
    pub fn halfmove(&self) -> u32 {
        self.halfmove
    }

    /// Position key covering occupancy, side to move, and castling rights.
    #[inline]
    pub fn key(&self) -> u64 {
        self.key
    }

    #[inline]
    pub fn promotion_piece(&self) -> PieceKind {
        self.promotion
    }

    /// The same position, with the next pawn to reach its last rank becoming
    /// `kind` instead of the default queen.
    pub fn with_promotion_piece(&self, kind: PieceKind) -> Board {
        let mut b = self.clone();
        b.promotion = kind;
        b
    }

    #[inline]
    pub fn has_castling_right(&self, side: Side, dir: Direction) -> bool {
        self.castling & castle_bit(side, dir) != 0
    }

    pub fn castling_rights_count(&self, side: Side) -> u32 {
        (self.castling
            & (castle_bit(side, Direction::East) | castle_bit(side, Direction::West)))
        .count_ones()
    }

    /// Validate and apply a move given in file/rank coordinates, producing
    /// the successor board. The position itself is never mutated.
    pub fn make_move(
        &self,
        from_file: u8,
        from_rank: u8,
        to_file: u8,
        to_rank: u8,
    ) -> EngineResult<Board> {
        for (file, rank) in [(from_file, from_rank), (to_file, to_rank)] {
            if file > 7 || rank > 7 {
                return Err(EngineError::IndexOutOfRange { file, rank });
            }
        }
        let m = Move::new(index(from_file, from_rank), index(to_file, to_rank));
        self.try_apply(m, true).map_err(|reason| {
            log::debug!("rejected {m}: {reason}");
            EngineError::InvalidMove {
                from_file,
                from_rank,
                to_file,
                to_rank,
                reason,
            }
        })
    }

    /// Full validation gate. `strict` additionally refuses moves that leave
    /// the mover's own king attacked.
    pub(crate) fn try_apply(&self, m: Move, strict: bool) -> Result<Board, MoveRejection> {
        let piece = match self.at(m.from) {
            None => return Err(MoveRejection::EmptySource),
            Some(p) => p,
        };
        if piece.side != self.side_to_move {
            return Err(MoveRejection::WrongSide);
        }
        if !movegen::moves_from(self, m.from, Purpose::Legality).contains(&m) {
            return Err(MoveRejection::Unreachable);
        }
        if movegen::is_castling_move(self, m) && !movegen::castling_path_safe(self, m) {
            return Err(MoveRejection::CastlingThroughCheck);
        }
        let succ = self.apply_unchecked(m);
        if strict && succ.king_attacked(self.side_to_move) {
            return Err(MoveRejection::LeavesKingInCheck);
        }
        Ok(succ)
    }

    /// Build the successor without validation. Callers guarantee `m` came
    /// out of Legality-purpose generation for the side to move.
    pub(crate) fn apply_unchecked(&self, m: Move) -> Board {
        let mover = self.side_to_move;
        let mut squares = self.squares;
        let mut key = self.key;

        let piece = squares[m.from as usize].expect("pseudo-legal move from an empty square");
        let captured = squares[m.to as usize];
        debug_assert!(captured.map_or(true, |c| c.kind != PieceKind::King));

        key ^= ZOBRIST.piece_key(piece, m.from);
        if let Some(c) = captured {
            key ^= ZOBRIST.piece_key(c, m.to);
        }

        // A pawn reaching its last rank becomes the pending promotion kind.
        let landed = if piece.kind == PieceKind::Pawn && rank_of(m.to) == mover.last_rank() {
            Piece { kind: self.promotion, side: mover }
        } else {
            piece
        };
        squares[m.from as usize] = None;
        squares[m.to as usize] = Some(landed);
        key ^= ZOBRIST.piece_key(landed, m.to);

        // Castling relocates the rook: west 0 -> 3, east 7 -> 5 on its rank.
        if piece.kind == PieceKind::King && file_of(m.from).abs_diff(file_of(m.to)) == 2 {
            let rank = rank_of(m.from);
            let (rook_from, rook_to) = if file_of(m.to) == 6 {
                (index(7, rank), index(5, rank))
            } else {
                (index(0, rank), index(3, rank))
            };
            if let Some(rook) = squares[rook_from as usize] {
                squares[rook_from as usize] = None;
                squares[rook_to as usize] = Some(rook);
                key ^= ZOBRIST.piece_key(rook, rook_from);
                key ^= ZOBRIST.piece_key(rook, rook_to);
            }
        }

        // Rights: a king move clears both; touching a rook's home corner
        // (moving from it, or capturing onto it) clears the matching one.
        let mut castling = self.castling;
        if piece.kind == PieceKind::King {
            castling &= match mover {
                Side::White => !(WHITE_EAST | WHITE_WEST),
                Side::Black => !(BLACK_EAST | BLACK_WEST),
            };
        }
        for corner in [m.from, m.to] {
            match corner {
                A1 => castling &= !WHITE_WEST,
                H1 => castling &= !WHITE_EAST,
                A8 => castling &= !BLACK_WEST,
                H8 => castling &= !BLACK_EAST,
                _ => {}
            }
        }
        let changed = self.castling ^ castling;
        for bit in 0..4 {
            if changed & (1 << bit) != 0 {
                key ^= ZOBRIST.castle[bit];
            }
        }

        key ^= ZOBRIST.stm;
        Board {
            squares,
            side_to_move: mover.opponent(),
            castling,
            ply: self.ply + 1,
            halfmove: if captured.is_some() { 0 } else { self.halfmove + 1 },
            promotion: self.promotion,
            key,
        }
    }

    pub(crate) fn king_index(&self, side: Side) -> Option<u8> {
        movegen::cells().find(|&i| {
            matches!(self.at(i), Some(p) if p.side == side && p.kind == PieceKind::King)
        })
    }

    pub(crate) fn king_attacked(&self, side: Side) -> bool {
        match self.king_index(side) {
            Some(k) => movegen::square_attacked(self, k, side.opponent()),
            None => false,
        }
    }

    /// Fully legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        movegen::legal_moves(self)
    }

    /// All positions reachable in one legal move, in generation order.
    pub fn successors(&self) -> Vec<Board> {
        self.legal_moves()
            .into_iter()
            .map(|m| self.apply_unchecked(m))
            .collect()
    }

    pub fn in_check(&self) -> bool {
        self.king_attacked(self.side_to_move)
    }

    pub fn in_checkmate(&self) -> bool {
        self.in_check() && self.legal_moves().is_empty()
    }

    /// With at least 12 pseudo-legal moves and the king not in check, some
    /// move is always legal in a reachable chess position, so enumeration
    /// can be skipped.
    pub fn in_stalemate(&self) -> bool {
        if self.in_check() {
            return false;
        }
        if movegen::pseudo_legal(self, Purpose::Legality).len() >= 12 {
            return false;
        }
        self.legal_moves().is_empty()
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove > 49
    }

    pub fn is_draw(&self) -> bool {
        self.in_stalemate() || self.is_fifty_move_draw()
    }

    pub fn game_over(&self) -> bool {
        self.in_checkmate() || self.is_draw()
    }

    /// Static score from the side to move's viewpoint; larger is better.
    pub fn evaluate(&self) -> f64 {
        eval::evaluate(self)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rank in (0..8).rev() {
            let row: Vec<String> = (0..8)
                .map(|file| match self.piece_at(file, rank) {
                    Some(p) => {
                        let side = if p.side == Side::White { 'w' } else { 'b' };
                        format!("{}{}", side, p.kind.abbrev())
                    }
                    None => "   ".to_string(),
                })
                .collect();
            writeln!(f, "{}", row.join("|"))?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "side={:?} ply={} halfmove={} castling={:04b}",
            self.side_to_move, self.ply, self.halfmove, self.castling
        )?;
        std::fmt::Display::fmt(self, f)
    }
}
