//! A small chess engine: legal move validation on a mailbox board and a
//! minimax/alpha-beta bot with a per-search transposition cache.

pub mod board;
pub mod tt;
mod zobrist;

pub use board::{Board, Bot, Color, GameState, Move, Piece, SearchParams, Square};
pub use tt::TranspositionCache;
