use std::str::FromStr;

use super::error::FenError;
use super::{Board, CastleSide, CastlingRights, Color, Piece, Square};

/// Standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn parse_counter(field: &str) -> Option<u32> {
    if field.is_empty() || !field.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// All six fields are required. Nothing is built unless every field is
    /// valid; the error names the field or character that was rejected.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 6 {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        // Parse piece placement
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        let mut squares = [None; 64];
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut width = 0usize;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    width += run as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if width < 8 {
                    squares[Square(rank_idx, width).index()] = Some((color, piece));
                }
                width += 1;
            }
            if width != 8 {
                return Err(FenError::BadRankWidth {
                    rank: rank_idx,
                    width,
                });
            }
        }

        // Parse side to move
        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        // Parse castling rights
        let mut castling_rights = CastlingRights::none();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                let (color, side) = match c {
                    'K' => (Color::White, CastleSide::Kingside),
                    'Q' => (Color::White, CastleSide::Queenside),
                    'k' => (Color::Black, CastleSide::Kingside),
                    'q' => (Color::Black, CastleSide::Queenside),
                    _ => {
                        return Err(FenError::InvalidCastling {
                            found: parts[2].to_string(),
                        })
                    }
                };
                castling_rights.set(color, side);
            }
        }

        // Parse en passant target
        let en_passant_target = if parts[3] == "-" {
            None
        } else {
            Some(
                parts[3]
                    .parse::<Square>()
                    .map_err(|_| FenError::InvalidEnPassant {
                        found: parts[3].to_string(),
                    })?,
            )
        };

        let halfmove_clock = parse_counter(parts[4]).ok_or_else(|| FenError::InvalidHalfmoveClock {
            found: parts[4].to_string(),
        })?;
        let fullmove_number =
            parse_counter(parts[5]).ok_or_else(|| FenError::InvalidFullmoveNumber {
                found: parts[5].to_string(),
            })?;
        // Twice the clock may differ from the move number by at most one.
        if (2 * i64::from(halfmove_clock) - i64::from(fullmove_number)).abs() > 1 {
            return Err(FenError::InconsistentMoveCounters {
                halfmove: halfmove_clock,
                fullmove: fullmove_number,
            });
        }

        Ok(Board {
            squares,
            side_to_move,
            castling_rights,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
        })
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in 0..8 {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.at(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling_rights,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position() {
        let board = Board::try_from_fen(START_FEN).unwrap();
        let white = board.pieces().filter(|&(_, c, _)| c == Color::White).count();
        let black = board.pieces().filter(|&(_, c, _)| c == Color::Black).count();
        assert_eq!(white, 16);
        assert_eq!(black, 16);
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.castling_rights(), CastlingRights::all());
        assert_eq!(board.en_passant_target(), None);
        assert_eq!(board.halfmove_clock(), 0);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_start_position_piece_placement() {
        let board = Board::from_fen(START_FEN);
        let back_rank = "rnbqkbnr";
        for (file, c) in back_rank.chars().enumerate() {
            let piece = Piece::from_char(c).unwrap();
            assert_eq!(board.at(Square(0, file)), Some((Color::Black, piece)));
            assert_eq!(board.at(Square(1, file)), Some((Color::Black, Piece::Pawn)));
            assert_eq!(board.at(Square(6, file)), Some((Color::White, Piece::Pawn)));
            assert_eq!(board.at(Square(7, file)), Some((Color::White, piece)));
        }
        for rank in 2..6 {
            for file in 0..8 {
                assert_eq!(board.at(Square(rank, file)), None);
            }
        }
    }

    #[test]
    fn test_fen_round_trip() {
        for fen in [
            START_FEN,
            "1r1q3r/3b2bk/p5pp/2QB4/5p2/P5nP/1PP5/2KRR3 b - - 6 12",
            "8/6P1/2Q5/4p3/3qP3/5Q2/1q3PK1/qk6 w - - 36 73",
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w Kq e6 0 1",
        ] {
            assert_eq!(Board::from_fen(fen).to_fen(), fen);
        }
    }

    #[test]
    fn test_fen_black_to_move_with_en_passant() {
        let board =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
                .unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.en_passant_target(), Some(Square(5, 4)));
    }

    #[test]
    fn test_fen_error_wrong_field_count() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -");
        assert_eq!(result, Err(FenError::WrongFieldCount { found: 4 }));
    }

    #[test]
    fn test_fen_error_short_rank() {
        let result = Board::try_from_fen("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(result, Err(FenError::BadRankWidth { rank: 1, width: 7 }));
    }

    #[test]
    fn test_fen_error_long_rank() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(result, Err(FenError::BadRankWidth { rank: 2, width: 9 }));
        let result = Board::try_from_fen("rnbqkbnrp/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(result, Err(FenError::BadRankWidth { rank: 0, width: 9 }));
    }

    #[test]
    fn test_fen_error_rank_count() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(result, Err(FenError::WrongRankCount { found: 7 }));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let result =
            Board::try_from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(result, Err(FenError::InvalidPiece { char: 'x' }));
    }

    #[test]
    fn test_fen_error_invalid_side_to_move() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSideToMove { .. })));
    }

    #[test]
    fn test_fen_error_invalid_castling() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidCastling { .. })));
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w -K - 0 1");
        assert!(matches!(result, Err(FenError::InvalidCastling { .. })));
    }

    #[test]
    fn test_fen_error_invalid_en_passant() {
        for ep in ["z9", "e", "e33", "i3"] {
            let fen = format!("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq {ep} 0 1");
            assert!(matches!(
                Board::try_from_fen(&fen),
                Err(FenError::InvalidEnPassant { .. })
            ));
        }
    }

    #[test]
    fn test_fen_error_non_numeric_counters() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1");
        assert!(matches!(result, Err(FenError::InvalidHalfmoveClock { .. })));
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 -1");
        assert!(matches!(result, Err(FenError::InvalidFullmoveNumber { .. })));
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - +0 1");
        assert!(matches!(result, Err(FenError::InvalidHalfmoveClock { .. })));
    }

    #[test]
    fn test_fen_error_inconsistent_counters() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 5");
        assert_eq!(
            result,
            Err(FenError::InconsistentMoveCounters {
                halfmove: 0,
                fullmove: 5
            })
        );
        assert!(Board::try_from_fen("8/8/8/8/8/8/8/K1k5 w - - 42 85").is_ok());
    }

    #[test]
    fn test_fen_no_castling() {
        let board =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1").unwrap();
        assert!(board.castling_rights().is_empty());
    }

    #[test]
    fn test_fen_partial_castling() {
        let board =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1").unwrap();
        let rights = board.castling_rights();
        assert!(rights.has(Color::White, CastleSide::Kingside));
        assert!(!rights.has(Color::White, CastleSide::Queenside));
        assert!(!rights.has(Color::Black, CastleSide::Kingside));
        assert!(rights.has(Color::Black, CastleSide::Queenside));
    }

    #[test]
    fn test_from_str_trait() {
        let board: Board = START_FEN.parse().unwrap();
        assert_eq!(board.side_to_move(), Color::White);
    }

    #[test]
    fn test_halfmove_clock_parsing() {
        let board = Board::try_from_fen("8/8/8/8/8/8/8/K1k5 w - - 42 84").unwrap();
        assert_eq!(board.halfmove_clock(), 42);
        assert_eq!(board.fullmove_number(), 84);
    }
}
