use crate::board::Board;
use crate::movecache;
use crate::types::{
    file_of, on_board, sq, Direction, Move, Piece, PieceKind, Side, DIAGONAL, EVERY,
    KNIGHT_JUMPS, STRAIGHT,
};

/// Who is asking for moves. Three callers need subtly different rules, so one
/// generator is parameterized instead of three being maintained.
///
/// - `Legality`: successor enumeration and user-move validation. Pawns
///   capture diagonally only onto enemy pieces, friendly squares are never
///   targets, castling is included.
/// - `Check`: attack detection. Pawn diagonals count whether or not the
///   target is occupied, forward pushes never attack, castling is excluded.
/// - `Evaluation`: the mobility/attack term. Friendly targets count (they
///   are defended), forward pushes count, castling is excluded.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Purpose {
    Legality,
    Check,
    Evaluation,
}

/// On-board cells of the 0x88 array, a1 first.
#[inline]
pub fn cells() -> impl Iterator<Item = u8> {
    (0u8..128).filter(|&i| on_board(i as i16))
}

/// Pseudo-legal moves for the side to move.
pub fn pseudo_legal(b: &Board, purpose: Purpose) -> Vec<Move> {
    pseudo_legal_for(b, b.side_to_move(), purpose)
}

pub fn pseudo_legal_for(b: &Board, side: Side, purpose: Purpose) -> Vec<Move> {
    let mut out = Vec::with_capacity(48);
    for from in cells() {
        if let Some(p) = b.at(from) {
            if p.side == side {
                piece_moves(b, from, p, purpose, &mut out);
            }
        }
    }
    if purpose == Purpose::Legality {
        castling_moves(b, side, &mut out);
    }
    out
}

/// Pseudo-legal moves of the piece standing on `from`, regardless of whose
/// turn it is. Castling is included only under `Legality` and only for the
/// side to move.
pub fn moves_from(b: &Board, from: u8, purpose: Purpose) -> Vec<Move> {
    let mut out = Vec::with_capacity(28);
    if let Some(p) = b.at(from) {
        piece_moves(b, from, p, purpose, &mut out);
        if purpose == Purpose::Legality
            && p.kind == PieceKind::King
            && p.side == b.side_to_move()
        {
            castling_moves(b, p.side, &mut out);
        }
    }
    out
}

fn piece_moves(b: &Board, from: u8, p: Piece, purpose: Purpose, out: &mut Vec<Move>) {
    match p.kind {
        PieceKind::Queen => {
            for dir in EVERY {
                slide(b, from, p, dir, purpose, 8, out);
            }
        }
        PieceKind::Rook => {
            for dir in STRAIGHT {
                slide(b, from, p, dir, purpose, 8, out);
            }
        }
        PieceKind::Bishop => {
            for dir in DIAGONAL {
                slide(b, from, p, dir, purpose, 8, out);
            }
        }
        PieceKind::King => {
            for dir in EVERY {
                slide(b, from, p, dir, purpose, 1, out);
            }
        }
        PieceKind::Knight => knight_moves(b, from, p.side, purpose, out),
        PieceKind::Pawn => pawn_moves(b, from, p, purpose, out),
    }
}

/// Walk from `from` in steps of `dir`, stopping off-board, on a blocker, or
/// after `max` steps. The blocker square is included for an enemy occupant
/// (any occupant under `Evaluation`); pawns never take their blocker.
fn slide(b: &Board, from: u8, p: Piece, dir: Direction, purpose: Purpose, max: u32, out: &mut Vec<Move>) {
    let mut cell = from as i16;
    for _ in 0..max {
        cell += dir.offset();
        if !on_board(cell) {
            return;
        }
        let to = cell as u8;
        match b.at(to) {
            None => out.push(Move::new(from, to)),
            Some(occ) => {
                let take = p.kind != PieceKind::Pawn
                    && (purpose == Purpose::Evaluation || occ.side != p.side);
                if take {
                    out.push(Move::new(from, to));
                }
                return;
            }
        }
    }
}

fn knight_moves(b: &Board, from: u8, side: Side, purpose: Purpose, out: &mut Vec<Move>) {
    for off in KNIGHT_JUMPS {
        let cell = from as i16 + off;
        if !on_board(cell) {
            continue;
        }
        let to = cell as u8;
        let keep = match b.at(to) {
            None => true,
            Some(occ) => purpose == Purpose::Evaluation || occ.side != side,
        };
        if keep {
            out.push(Move::new(from, to));
        }
    }
}

fn pawn_moves(b: &Board, from: u8, p: Piece, purpose: Purpose, out: &mut Vec<Move>) {
    let fwd = p.side.forward();

    // Forward pushes never attack anything.
    if purpose != Purpose::Check {
        let max = if crate::types::rank_of(from) == p.side.pawn_rank() { 2 } else { 1 };
        slide(b, from, p, fwd, purpose, max, out);
    }

    let diagonals = match p.side {
        Side::White => [Direction::NorthEast, Direction::NorthWest],
        Side::Black => [Direction::SouthEast, Direction::SouthWest],
    };
    for dir in diagonals {
        let cell = from as i16 + dir.offset();
        if !on_board(cell) {
            continue;
        }
        let to = cell as u8;
        let keep = match purpose {
            Purpose::Legality => matches!(b.at(to), Some(occ) if occ.side != p.side),
            Purpose::Check | Purpose::Evaluation => true,
        };
        if keep {
            out.push(Move::new(from, to));
        }
    }
}

/// Castling candidates for each remaining right: a two-square king slide,
/// with the extra b-file emptiness requirement on the west side. Attack
/// checks on the king's path happen at the move-application gate, not here.
fn castling_moves(b: &Board, side: Side, out: &mut Vec<Move>) {
    let rank = side.home_rank() as i16;
    let king = match sq(4, rank) {
        Some(i) => i,
        None => return,
    };
    if !matches!(b.at(king), Some(p) if p.side == side && p.kind == PieceKind::King) {
        return;
    }
    for dir in [Direction::East, Direction::West] {
        if !b.has_castling_right(side, dir) {
            continue;
        }
        let transit = (king as i16 + dir.offset()) as u8;
        let target = (king as i16 + 2 * dir.offset()) as u8;
        if b.at(transit).is_some() || b.at(target).is_some() {
            continue;
        }
        if dir == Direction::West {
            // The square adjacent to the west rook must also be clear.
            let b_file_occupied = sq(1, rank).map(|i| b.at(i).is_some()).unwrap_or(true);
            if b_file_occupied {
                continue;
            }
        }
        out.push(Move::new(king, target));
    }
}

/// Is `target` attacked by a piece of `by`? Tested with `Check`-purpose
/// generation for the attacking side, as if the side to move were swapped.
pub fn square_attacked(b: &Board, target: u8, by: Side) -> bool {
    let mut scratch = Vec::with_capacity(28);
    for from in cells() {
        if let Some(p) = b.at(from) {
            if p.side != by {
                continue;
            }
            scratch.clear();
            piece_moves(b, from, p, Purpose::Check, &mut scratch);
            if scratch.iter().any(|m| m.to == target) {
                return true;
            }
        }
    }
    false
}

/// Fully legal moves for the side to move: pseudo-legal moves that do not
/// leave the mover's king attacked, with castling additionally barred from
/// passing through or out of check.
pub fn legal_moves(b: &Board) -> Vec<Move> {
    if let Some(ms) = movecache::cached_legal_moves(b.key()) {
        return ms;
    }
    let mover = b.side_to_move();
    let mut legal = Vec::with_capacity(40);
    for m in pseudo_legal(b, Purpose::Legality) {
        if is_castling_move(b, m) && !castling_path_safe(b, m) {
            continue;
        }
        let succ = b.apply_unchecked(m);
        if !succ.king_attacked(mover) {
            legal.push(m);
        }
    }
    movecache::store_legal_moves(b.key(), legal.clone());
    legal
}

#[inline]
pub(crate) fn is_castling_move(b: &Board, m: Move) -> bool {
    matches!(b.at(m.from), Some(p) if p.kind == PieceKind::King)
        && file_of(m.from).abs_diff(file_of(m.to)) == 2
}

/// Castling through check is illegal: origin, transit, and destination must
/// all be safe from the opponent.
pub(crate) fn castling_path_safe(b: &Board, m: Move) -> bool {
    let enemy = b.side_to_move().opponent();
    let transit = ((m.from as i16 + m.to as i16) / 2) as u8;
    !square_attacked(b, m.from, enemy)
        && !square_attacked(b, transit, enemy)
        && !square_attacked(b, m.to, enemy)
}
