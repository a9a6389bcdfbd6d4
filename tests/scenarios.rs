use phalanx::board::Board;
use phalanx::error::EngineError;
use phalanx::types::{distance_from_edge, file_of, index, rank_of, PieceKind, Side};

fn play(board: Board, moves: &[(u8, u8, u8, u8)]) -> Board {
    moves.iter().fold(board, |b, &(ff, fr, tf, tr)| {
        b.make_move(ff, fr, tf, tr)
            .unwrap_or_else(|e| panic!("{e} in\n{b}"))
    })
}

fn count_kings(b: &Board, side: Side) -> usize {
    (0..8)
        .flat_map(|f| (0..8).map(move |r| (f, r)))
        .filter(|&(f, r)| {
            matches!(b.piece_at(f, r), Some(p) if p.side == side && p.kind == PieceKind::King)
        })
        .count()
}

#[test]
fn scholars_mate_is_detected() {
    let b = play(
        Board::starting(),
        &[
            (4, 1, 4, 3),
            (4, 6, 4, 4),
            (5, 0, 2, 3),
            (5, 7, 2, 4),
            (3, 0, 5, 2),
            (0, 6, 0, 5),
            (5, 2, 5, 6),
        ],
    );
    assert!(b.in_checkmate());
    assert!(b.in_check());
    assert!(!b.in_stalemate());
    assert!(b.game_over());
    assert_eq!(b.side_to_move(), Side::Black);
}

#[test]
fn knight_raid_gives_check_but_not_mate() {
    let b = play(
        Board::starting(),
        &[
            (1, 0, 0, 2),
            (0, 6, 0, 5),
            (0, 2, 1, 4),
            (1, 6, 1, 5),
            (1, 4, 2, 6),
        ],
    );
    assert!(b.in_check());
    assert!(!b.in_checkmate());
    assert!(!b.game_over());
}

#[test]
fn pawn_cannot_slip_diagonally_without_a_capture() {
    let b = Board::starting();
    assert!(matches!(
        b.make_move(0, 1, 1, 2),
        Err(EngineError::InvalidMove { .. })
    ));
}

#[test]
fn black_cannot_move_on_whites_turn() {
    let b = Board::starting();
    assert!(matches!(
        b.make_move(0, 6, 0, 5),
        Err(EngineError::InvalidMove { .. })
    ));
}

#[test]
fn a_board_with_no_pieces_is_a_draw() {
    let b = Board::empty();
    assert!(b.is_draw());
    assert!(b.game_over());
}

#[test]
fn distance_from_edge_matches_the_board_geometry() {
    assert_eq!(distance_from_edge(index(3, 3)), 3);
    assert_eq!(distance_from_edge(index(0, 0)), 0);
    assert_eq!(distance_from_edge(index(0, 7)), 0);
    assert_eq!(distance_from_edge(index(6, 6)), 1);
}

#[test]
fn budgeted_search_returns_a_legal_successor() {
    let b = Board::starting();
    let chosen = phalanx::search::search_within(&b, 500);
    assert!(b.successors().iter().any(|s| s.key() == chosen.key()));
}

// --- invariants over reachable boards ---

#[test]
fn exactly_one_king_per_side_stays_put() {
    let mut b = Board::starting();
    assert_eq!(count_kings(&b, Side::White), 1);
    assert_eq!(count_kings(&b, Side::Black), 1);
    for _ in 0..6 {
        if b.game_over() {
            break;
        }
        b = b.successors().into_iter().next().unwrap();
        assert_eq!(count_kings(&b, Side::White), 1);
        assert_eq!(count_kings(&b, Side::Black), 1);
    }
}

#[test]
fn every_occupied_index_passes_the_sentinel_bit_test() {
    let b = Board::starting();
    for i in 0u8..128 {
        if b.at(i).is_some() {
            assert_eq!(i & 0x88, 0);
        }
    }
}

#[test]
fn successors_flip_the_side_and_advance_the_ply() {
    let b = Board::starting();
    for s in b.successors() {
        assert_eq!(s.side_to_move(), b.side_to_move().opponent());
        assert_eq!(s.ply(), b.ply() + 1);
    }
}

#[test]
fn castling_rights_never_grow_along_a_line() {
    let mut b = Board::starting();
    let mut white = b.castling_rights_count(Side::White);
    let mut black = b.castling_rights_count(Side::Black);
    let line = [
        (4u8, 1u8, 4u8, 3u8),
        (4, 6, 4, 4),
        (4, 0, 4, 1), // king walk costs both White rights
        (0, 6, 0, 5),
        (4, 1, 4, 0),
        (7, 6, 7, 5),
    ];
    for &(ff, fr, tf, tr) in &line {
        b = b.make_move(ff, fr, tf, tr).unwrap();
        let w = b.castling_rights_count(Side::White);
        let k = b.castling_rights_count(Side::Black);
        assert!(w <= white && k <= black);
        white = w;
        black = k;
    }
    assert_eq!(white, 0);
}

#[test]
fn checkmate_and_stalemate_are_mutually_exclusive() {
    let mate = play(
        Board::starting(),
        &[
            (4, 1, 4, 3),
            (4, 6, 4, 4),
            (5, 0, 2, 3),
            (5, 7, 2, 4),
            (3, 0, 5, 2),
            (0, 6, 0, 5),
            (5, 2, 5, 6),
        ],
    );
    assert!(mate.in_checkmate() && mate.in_check());
    assert!(!mate.in_stalemate());

    let quiet = Board::starting();
    assert!(!quiet.in_checkmate() && !quiet.in_stalemate());
}

#[test]
fn twenty_legal_moves_from_the_start_and_all_apply_cleanly() {
    let b = Board::starting();
    let moves = b.legal_moves();
    assert_eq!(moves.len(), 20);
    for m in moves {
        let s = b
            .make_move(file_of(m.from), rank_of(m.from), file_of(m.to), rank_of(m.to))
            .unwrap();
        assert!(s != b);
        assert!(s.side_to_move() != b.side_to_move());
        // no reply may capture a king, i.e. the mover never left one en prise
        for reply in s.legal_moves() {
            let target = s.piece_at(file_of(reply.to), rank_of(reply.to));
            assert!(target.map_or(true, |p| p.kind != PieceKind::King));
        }
    }
}

#[test]
fn starting_layout_matches_the_coordinate_convention() {
    let b = Board::starting();
    assert_eq!(
        b.piece_at(0, 1).map(|p| (p.kind, p.side)),
        Some((PieceKind::Pawn, Side::White))
    );
    assert_eq!(
        b.piece_at(4, 0).map(|p| (p.kind, p.side)),
        Some((PieceKind::King, Side::White))
    );
}
