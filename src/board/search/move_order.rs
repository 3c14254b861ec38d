//! Move ordering utilities for search.

use super::super::MoveList;

/// Captures first, most valuable victim first. The sort is stable, so quiet
/// moves (and captures of equal value) keep generation order.
pub fn order_moves(moves: &mut MoveList) {
    moves.sort_by_capture_value();
}
