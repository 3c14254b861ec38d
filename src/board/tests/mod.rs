//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `legality.rs` - Pins, discovered attacks, castling gating, king captures
//! - `edge_cases.rs` - Special positions and edge cases
//! - `search.rs` - Move selection and pruning equivalence
//! - `proptest.rs` - Property-based tests


use crate::board::{Board, Move, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().expect("valid square")
}

/// Candidate move between two squares, capturing whatever stands on `to`.
pub(super) fn candidate(board: &Board, from: &str, to: &str) -> Move {
    Move::new(sq(from), sq(to), board.at(sq(to)))
}

/// Legal, decorated move between two squares.
pub(super) fn legal(board: &mut Board, from: &str, to: &str) -> Move {
    let mv = candidate(board, from, to);
    board
        .can_make(mv)
        .unwrap_or_else(|| panic!("{from}{to} should be legal in {}", board.to_fen()))
}
