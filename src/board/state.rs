use std::fmt;

use crate::zobrist::ZOBRIST;

use super::{CastleSide, CastlingRights, Color, Piece, Square};

/// A chess position: 64 squares in FEN reading order plus the side to
/// move, castling rights, en passant target and move counters.
///
/// Positions are only mutated through `make_move`/`unmake_move`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [Option<(Color, Piece)>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Board {
    /// The standard starting position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (i, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(7, i), Color::White, *piece);
            board.set_piece(Square(0, i), Color::Black, *piece);
            board.set_piece(Square(6, i), Color::White, Piece::Pawn);
            board.set_piece(Square(1, i), Color::Black, Piece::Pawn);
        }

        board.castling_rights = CastlingRights::all();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [None; 64],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Build a position from an explicit array of 64 occupants, indexed in
    /// FEN reading order. No castling rights, no en passant target.
    ///
    /// The array is taken as-is: callers must not inject positions without
    /// exactly one king per side.
    #[must_use]
    pub fn from_squares(squares: [Option<(Color, Piece)>; 64], side_to_move: Color) -> Self {
        Board {
            squares,
            side_to_move,
            ..Board::empty()
        }
    }

    /// Occupant of a square.
    #[inline]
    #[must_use]
    pub fn at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.index()]
    }

    /// Occupant at (file, rank) coordinates. Anything off the board reads
    /// as empty, which lets ray scans probe one step past the edge.
    #[inline]
    #[must_use]
    pub fn at_coords(&self, file: isize, rank: isize) -> Option<(Color, Piece)> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            self.squares[rank as usize * 8 + file as usize]
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.index()] = Some((color, piece));
    }

    #[inline]
    pub(crate) fn put(&mut self, sq: Square, occupant: Option<(Color, Piece)>) {
        self.squares[sq.index()] = occupant;
    }

    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.index()].take()
    }

    /// Every occupied square with its occupant, in board-scan order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(idx, occ)| occ.map(|(color, piece)| (Square::from_index(idx), color, piece)))
    }

    pub(crate) fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, c, p)| c == color && p == Piece::King)
            .map(|(sq, _, _)| sq)
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Zobrist hash of the position.
    ///
    /// Folds piece placement, side to move, castling rights and the en
    /// passant target, so two boards hash alike exactly when they agree on
    /// all four, however they were reached.
    #[must_use]
    pub fn hash(&self) -> u64 {
        let mut hash: u64 = 0;

        for (sq, color, piece) in self.pieces() {
            hash ^= ZOBRIST.piece(color, piece, sq);
        }

        if self.side_to_move == Color::Black {
            hash ^= ZOBRIST.black_to_move_key;
        }

        for color in Color::BOTH {
            for side in [CastleSide::Kingside, CastleSide::Queenside] {
                if self.castling_rights.has(color, side) {
                    hash ^= ZOBRIST.castling(color, side);
                }
            }
        }

        if let Some(ep_square) = self.en_passant_target {
            hash ^= ZOBRIST.en_passant(ep_square);
        }

        hash
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// ASCII diagram, White at the bottom.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in 0..8 {
            write!(f, "{} ", 8 - rank)?;
            for file in 0..8 {
                let c = match self.at(Square(rank, file)) {
                    Some((color, piece)) => piece.to_fen_char(color),
                    None => '.',
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
