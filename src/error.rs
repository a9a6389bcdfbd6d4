//! Error types surfaced by the board API.
//!
//! The search never sees these: it enumerates only legal successors.

use thiserror::Error;

/// Why a requested move was rejected.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum MoveRejection {
    /// No piece on the source square.
    EmptySource,
    /// The piece on the source square belongs to the side not on move.
    WrongSide,
    /// The destination is not reachable by the piece's movement rules.
    Unreachable,
    /// The move would leave the mover's own king under attack.
    LeavesKingInCheck,
    /// Castling with the king's origin, transit, or destination attacked.
    CastlingThroughCheck,
}

impl std::fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MoveRejection::EmptySource => "no piece on source square",
            MoveRejection::WrongSide => "piece belongs to the side not on move",
            MoveRejection::Unreachable => "destination unreachable",
            MoveRejection::LeavesKingInCheck => "move leaves own king in check",
            MoveRejection::CastlingThroughCheck => "castling path is attacked",
        };
        f.write_str(s)
    }
}

/// Errors that can occur when driving a board through its public API.
#[derive(Error, Clone, Eq, PartialEq, Debug)]
pub enum EngineError {
    /// Move rejected by validation; carries source, destination, and reason.
    #[error("invalid move ({from_file},{from_rank}) -> ({to_file},{to_rank}): {reason}")]
    InvalidMove {
        from_file: u8,
        from_rank: u8,
        to_file: u8,
        to_rank: u8,
        reason: MoveRejection,
    },

    /// Caller passed a file or rank outside 0-7. Programming error.
    #[error("file or rank out of range: ({file},{rank})")]
    IndexOutOfRange { file: u8, rank: u8 },
}

pub type EngineResult<T> = Result<T, EngineError>;
