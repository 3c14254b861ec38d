//! Chess board representation and game logic.
//!
//! A 64-square mailbox board with piece-by-piece move validation,
//! explicit make/unmake and an alpha-beta move picker.
//!
//! # Example
//! ```
//! use chess_bot::board::{Board, Color};
//!
//! let mut board = Board::new();
//! let moves = board.get_all_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attacks;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
pub mod prelude;
mod search;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, SearchError, SquareError};
pub use fen::START_FEN;
pub use state::Board;
pub use status::GameState;
pub use types::{CastleSide, CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece, Square};

pub use search::{order_moves, Bot, SearchParams, SearchReport, MATE_SCORE};
