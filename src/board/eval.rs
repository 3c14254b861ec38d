use super::{Board, Color};

impl Board {
    /// Material balance from `perspective`'s point of view: own piece values
    /// minus the opponent's.
    #[must_use]
    pub fn evaluate(&self, perspective: Color) -> i32 {
        self.pieces()
            .map(|(_, color, piece)| {
                if color == perspective {
                    piece.value()
                } else {
                    -piece.value()
                }
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_is_balanced() {
        let board = Board::new();
        assert_eq!(board.evaluate(Color::White), 0);
        assert_eq!(board.evaluate(Color::Black), 0);
    }

    #[test]
    fn test_material_counts() {
        // White: Q + R + P = 15, Black: N + B = 6
        let board = Board::from_fen("4k3/8/3nb3/8/8/8/4P3/R2QK3 w - - 0 1");
        assert_eq!(board.evaluate(Color::White), 9);
        assert_eq!(board.evaluate(Color::Black), -9);
    }
}
