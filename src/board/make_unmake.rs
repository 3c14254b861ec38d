use super::{Board, Color, Move, Piece, Square};

impl Board {
    /// Apply a move already known to be legal.
    ///
    /// `mv` must be the decorated value returned by `try_complete` or
    /// `can_make` on this exact position.
    pub fn make_move(&mut self, mv: &Move) {
        let (from, to) = (mv.from(), mv.to());
        let mover = self.take(from);
        debug_assert!(mover.is_some(), "make_move from empty square {from}");
        let Some((color, piece)) = mover else {
            return;
        };
        debug_assert_eq!(self.at(to), mv.captured(), "make_move with stale capture");

        self.castling_rights.remove_all(mv.forfeits());
        self.set_piece(to, color, mv.promotion().unwrap_or(piece));

        if let Some(side) = mv.castle() {
            let rank = color.back_rank();
            let rook = self.take(Square(rank, side.rook_from_file()));
            self.put(Square(rank, side.rook_to_file()), rook);
        }

        self.en_passant_target = if piece == Piece::Pawn && from.rank().abs_diff(to.rank()) == 2 {
            Some(Square((from.rank() + to.rank()) / 2, from.file()))
        } else {
            None
        };

        self.side_to_move = self.side_to_move.opponent();
        self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
    }

    /// Undo `mv`, which must be the last move applied with `make_move`.
    pub fn unmake_move(&mut self, mv: &Move) {
        let (from, to) = (mv.from(), mv.to());
        let moved = self.take(to);
        debug_assert!(moved.is_some(), "unmake_move onto empty square {to}");
        debug_assert!(self.is_empty(from), "unmake_move into occupied square {from}");
        let Some((color, piece)) = moved else {
            return;
        };

        let original = if mv.promotion().is_some() {
            Piece::Pawn
        } else {
            piece
        };
        self.set_piece(from, color, original);
        self.put(to, mv.captured());

        if let Some(side) = mv.castle() {
            let rank = color.back_rank();
            let rook = self.take(Square(rank, side.rook_to_file()));
            debug_assert_eq!(rook, Some((color, Piece::Rook)), "castling rook missing");
            self.put(Square(rank, side.rook_from_file()), rook);
        }

        self.castling_rights.insert_all(mv.forfeits());
        self.en_passant_target = mv.prior_en_passant();
        self.side_to_move = self.side_to_move.opponent();
        self.halfmove_clock = self.halfmove_clock.saturating_sub(1);
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_sub(1);
        }
    }
}
