//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_bot::board::prelude::*;
//! ```

pub use super::{
    Board, Bot, CastleSide, CastlingRights, Color, FenError, GameState, Move, MoveList, Piece,
    SearchError, SearchParams, SearchReport, Square, SquareError,
};
