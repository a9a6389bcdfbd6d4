use crate::board::Board;
use crate::movecache;
use crate::movegen::{self, Purpose};
use crate::params::PARAMS;
use crate::types::{distance_from_edge, offsides_rank, PieceKind, Side};

/// Static score from the side to move's viewpoint; larger is better.
/// Fifty-move positions score 0. Checkmate is the search's business: with no
/// successors and a loser it returns -inf without consulting the evaluator.
pub fn evaluate(b: &Board) -> f64 {
    if b.is_fifty_move_draw() {
        return 0.0;
    }
    if let Some(s) = movecache::cached_eval(b.key()) {
        return s;
    }
    let s = compute(b);
    movecache::store_eval(b.key(), s);
    s
}

/// Sum of material for `side`, kings excluded so that their deliberately
/// overwhelming value cannot swamp the score.
pub fn material(b: &Board, side: Side) -> f64 {
    movegen::cells()
        .filter_map(|i| b.at(i))
        .filter(|p| p.side == side && p.kind != PieceKind::King)
        .map(|p| p.kind.value())
        .sum()
}

fn compute(b: &Board) -> f64 {
    let p = PARAMS.read();
    let me = b.side_to_move();
    let own_material = material(b, me);
    let opp_material = material(b, me.opponent());

    let mut score = own_material - opp_material;

    // Mobility and attack. Every generated move is worth a sliver; landing
    // on an occupied square adds the (capped) value of the piece attacked or
    // defended; central targets matter in proportion to how much opposing
    // material is still on the board.
    for m in movegen::pseudo_legal(b, Purpose::Evaluation) {
        score += p.mobility_move + p.mobility_target;
        if let Some(target) = b.at(m.to) {
            score += target.kind.value().min(p.attack_value_cap) * p.attack_value_scale;
        }
        score += distance_from_edge(m.to) as f64 * opp_material * p.center_control_scale;
    }

    if own_material > p.opening_material {
        score += b.castling_rights_count(me) as f64 * p.castling_right_bonus;
        for i in movegen::cells() {
            if let Some(piece) = b.at(i) {
                if piece.side == me && piece.kind == PieceKind::Queen {
                    score -= offsides_rank(i, me) as f64 * p.queen_development_penalty;
                }
            }
        }
    }

    if own_material < p.endgame_material {
        // king activity decides late endgames
        if let Some(k) = b.king_index(me) {
            let king_moves = movegen::moves_from(b, k, Purpose::Evaluation).len();
            score += king_moves as f64 * p.king_activity_bonus;
        }
    }

    for i in movegen::cells() {
        if let Some(piece) = b.at(i) {
            if piece.side == me && piece.kind == PieceKind::Pawn {
                let r = offsides_rank(i, me) as f64;
                score += r * r * p.pawn_advance_scale;
            }
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Piece;

    #[test]
    fn starting_material_is_balanced() {
        let b = Board::starting();
        assert_eq!(material(&b, Side::White), 39.0);
        assert_eq!(material(&b, Side::Black), 39.0);
    }

    #[test]
    fn side_to_move_gets_the_mobility_credit() {
        // material is even, so the whole score is White's mobility terms
        let b = Board::starting();
        assert!(b.evaluate() > 0.0);
    }

    #[test]
    fn an_extra_queen_dominates_positional_terms() {
        let kings = Board::empty()
            .place_piece(4, 0, Piece { kind: PieceKind::King, side: Side::White })
            .unwrap()
            .place_piece(4, 7, Piece { kind: PieceKind::King, side: Side::Black })
            .unwrap();
        let up_a_queen = kings
            .place_piece(3, 3, Piece { kind: PieceKind::Queen, side: Side::White })
            .unwrap();
        assert!(up_a_queen.evaluate() > 8.0);
        assert!(up_a_queen.evaluate() > kings.evaluate());
    }

    #[test]
    fn fifty_quiet_halfmoves_score_zero() {
        let mut b = Board::starting();
        // shuffle the knights until the capture clock runs out
        for _ in 0..13 {
            b = b.make_move(6, 0, 5, 2).unwrap();
            b = b.make_move(6, 7, 5, 5).unwrap();
            b = b.make_move(5, 2, 6, 0).unwrap();
            b = b.make_move(5, 5, 6, 7).unwrap();
        }
        assert!(b.is_fifty_move_draw());
        assert_eq!(b.evaluate(), 0.0);
    }

    #[test]
    fn advanced_pawns_outscore_home_pawns() {
        let base = Board::empty()
            .place_piece(4, 0, Piece { kind: PieceKind::King, side: Side::White })
            .unwrap()
            .place_piece(4, 7, Piece { kind: PieceKind::King, side: Side::Black })
            .unwrap();
        let home = base
            .place_piece(0, 1, Piece { kind: PieceKind::Pawn, side: Side::White })
            .unwrap();
        let pushed = base
            .place_piece(0, 5, Piece { kind: PieceKind::Pawn, side: Side::White })
            .unwrap();
        assert!(pushed.evaluate() > home.evaluate());
    }
}
