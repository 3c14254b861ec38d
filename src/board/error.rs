//! Error types for chess board operations.

use std::fmt;

use super::Color;

/// Error type for FEN parsing failures. Each variant names the field or
/// character that was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string must have exactly 6 whitespace-separated fields
    WrongFieldCount { found: usize },
    /// Piece placement must describe exactly 8 ranks
    WrongRankCount { found: usize },
    /// A rank of the piece placement does not cover exactly 8 squares
    BadRankWidth { rank: usize, width: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling field
    InvalidCastling { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Half-move clock is not a non-negative integer
    InvalidHalfmoveClock { found: String },
    /// Full-move number is not a non-negative integer
    InvalidFullmoveNumber { found: String },
    /// Full-move number disagrees with the half-move clock
    InconsistentMoveCounters { halfmove: u32, fullmove: u32 },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have 6 fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "Piece placement must have 8 ranks, found {found}")
            }
            FenError::BadRankWidth { rank, width } => {
                write!(f, "Rank {rank} of piece placement covers {width} squares, expected 8")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { found } => {
                write!(f, "Invalid castling field '{found}'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidHalfmoveClock { found } => {
                write!(f, "Invalid half-move clock '{found}'")
            }
            FenError::InvalidFullmoveNumber { found } => {
                write!(f, "Invalid full-move number '{found}'")
            }
            FenError::InconsistentMoveCounters { halfmove, fullmove } => {
                write!(
                    f,
                    "Full-move number {fullmove} is inconsistent with half-move clock {halfmove}"
                )
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The side asked to move has no legal move (checkmate or stalemate)
    NoLegalMoves { color: Color },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NoLegalMoves { color } => {
                write!(f, "{color} has no legal moves")
            }
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_error_wrong_field_count() {
        let err = FenError::WrongFieldCount { found: 2 };
        assert!(err.to_string().contains('2'));
        assert!(err.to_string().contains('6'));
    }

    #[test]
    fn test_fen_error_bad_rank_width() {
        let err = FenError::BadRankWidth { rank: 3, width: 9 };
        let msg = err.to_string();
        assert!(msg.contains("Rank 3"));
        assert!(msg.contains('9'));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_fen_error_inconsistent_counters() {
        let err = FenError::InconsistentMoveCounters {
            halfmove: 10,
            fullmove: 3,
        };
        assert!(err.to_string().contains("10"));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_fen_error_equality() {
        let err1 = FenError::WrongFieldCount { found: 2 };
        let err2 = FenError::WrongFieldCount { found: 2 };
        assert_eq!(err1, err2);
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_search_error_names_color() {
        let err = SearchError::NoLegalMoves {
            color: Color::Black,
        };
        assert_eq!(err.to_string(), "Black has no legal moves");
    }

    #[test]
    fn test_errors_are_std_errors() {
        let err: Box<dyn std::error::Error> = Box::new(FenError::InvalidPiece { char: 'x' });
        assert!(err.to_string().contains('x'));
    }
}
