#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Board;

/// Outcome of a position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    Continue,
    Checkmate,
    Stalemate,
}

impl Board {
    /// Whether the side to move is in check.
    #[must_use]
    pub fn in_check(&self) -> bool {
        !self.is_king_safe(self.side_to_move)
    }

    /// Checkmate or stalemate when the side to move has no legal move,
    /// otherwise `Continue`.
    pub fn game_state(&mut self) -> GameState {
        if !self.get_all_moves(self.side_to_move).is_empty() {
            GameState::Continue
        } else if self.in_check() {
            GameState::Checkmate
        } else {
            GameState::Stalemate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_continues() {
        let mut board = Board::new();
        assert!(!board.in_check());
        assert_eq!(board.game_state(), GameState::Continue);
    }

    #[test]
    fn test_back_rank_mate() {
        let mut board = Board::from_fen("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert!(board.in_check());
        assert_eq!(board.game_state(), GameState::Checkmate);
    }

    #[test]
    fn test_stalemate() {
        let mut board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(!board.in_check());
        assert_eq!(board.game_state(), GameState::Stalemate);
    }
}
