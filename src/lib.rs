//! A chess engine built on an immutable 0x88 board, a purpose-parameterized
//! move generator, and negamax alpha-beta search with iterative deepening,
//! plus the small generic game framework the search is written against.

pub mod types;
pub mod error;
pub mod board;
pub mod movegen;
pub mod movecache;
pub mod zobrist;
pub mod eval;
pub mod params;
pub mod game;
pub mod search;
pub mod tictactoe;
pub mod connect_four;

pub mod perft;
