mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, CastleSide, CastlingRights, Color, Move, MoveList, Piece, Square};

pub(crate) use kings::KING_OFFSETS;
pub(crate) use knights::KNIGHT_OFFSETS;

/// The castling wing a rook standing on `sq` belongs to, if `sq` is one of
/// `color`'s home corners.
pub(crate) fn home_corner_side(sq: Square, color: Color) -> Option<CastleSide> {
    if sq.rank() != color.back_rank() {
        return None;
    }
    match sq.file() {
        0 => Some(CastleSide::Queenside),
        7 => Some(CastleSide::Kingside),
        _ => None,
    }
}

impl Board {
    /// Validate a candidate move ignoring turn order and king safety.
    ///
    /// Returns the move decorated with its castling variant, forfeited
    /// castling rights, promotion and the en passant target in force before
    /// it, or `None` when the piece cannot geometrically make the move.
    #[must_use]
    pub fn try_complete(&self, mv: Move) -> Option<Move> {
        let (from, to) = (mv.from(), mv.to());
        let (color, piece) = self.at(from)?;
        let occupant = self.at(to);

        // Stale candidate: the board changed under it.
        if mv.captured() != occupant {
            return None;
        }
        if matches!(occupant, Some((c, _)) if c == color) {
            return None;
        }

        let granted = self.castling_rights;
        let mut completed =
            Move::new(from, to, occupant).with_prior_en_passant(self.en_passant_target);

        match piece {
            Piece::Pawn => {
                if !self.pawn_move_ok(from, to, color, occupant.is_some()) {
                    return None;
                }
                if to.rank() == color.pawn_promotion_rank() {
                    completed = completed.with_promotion(Piece::Queen);
                }
            }
            Piece::Knight => {
                if !knights::knight_move_ok(from, to) {
                    return None;
                }
            }
            Piece::Bishop => {
                if !self.diagonal_path_clear(from, to) {
                    return None;
                }
            }
            Piece::Rook => {
                if !self.straight_path_clear(from, to) {
                    return None;
                }
                if let Some(side) = home_corner_side(from, color) {
                    completed = completed
                        .with_forfeits(granted.intersection(CastlingRights::only(color, side)));
                }
            }
            Piece::Queen => {
                if !self.diagonal_path_clear(from, to) && !self.straight_path_clear(from, to) {
                    return None;
                }
            }
            Piece::King => {
                if let Some(side) = kings::castle_side(from, to, color) {
                    if occupant.is_some() || !self.castle_path_ok(color, side) {
                        return None;
                    }
                    completed = completed.with_castle(side);
                } else if !kings::king_step_ok(from, to) {
                    return None;
                }
                completed =
                    completed.with_forfeits(granted.intersection(CastlingRights::both(color)));
            }
        }

        // Taking a rook off its corner removes the matching right.
        if let Some((victim, Piece::Rook)) = occupant {
            if let Some(side) = home_corner_side(to, victim) {
                completed =
                    completed.with_forfeits(granted.intersection(CastlingRights::only(victim, side)));
            }
        }

        Some(completed)
    }

    /// Full legality check for a candidate move.
    ///
    /// Runs [`Board::try_complete`], refuses king captures and castling out
    /// of or through check, then plays the move and checks the mover's king.
    /// The board is left exactly as it was.
    pub fn can_make(&mut self, mv: Move) -> Option<Move> {
        let completed = self.try_complete(mv)?;
        self.is_legal_completed(completed).then_some(completed)
    }

    /// Every legal move for `color`, own pieces in board-scan order and
    /// targets in board-scan order for each piece.
    pub fn get_all_moves(&mut self, color: Color) -> MoveList {
        let candidates = self.pseudo_legal_moves(color);
        let mut moves = MoveList::new();
        for mv in candidates {
            if self.is_legal_completed(mv) {
                moves.push(mv);
            }
        }
        moves
    }

    /// Moves that pass [`Board::try_complete`] for `color`'s pieces.
    pub(crate) fn pseudo_legal_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (from, c, _) in self.pieces() {
            if c != color {
                continue;
            }
            for to in Square::all() {
                let occupant = self.at(to);
                if matches!(occupant, Some((c, _)) if c == color) {
                    continue;
                }
                if let Some(mv) = self.try_complete(Move::new(from, to, occupant)) {
                    moves.push(mv);
                }
            }
        }
        moves
    }

    fn is_legal_completed(&mut self, mv: Move) -> bool {
        if matches!(mv.captured(), Some((_, Piece::King))) {
            return false;
        }
        let Some((color, _)) = self.at(mv.from()) else {
            return false;
        };
        if let Some(side) = mv.castle() {
            if !self.castle_path_safe(color, side) {
                return false;
            }
        }

        self.make_move(&mv);
        let safe = self.is_king_safe(color);
        self.unmake_move(&mv);
        safe
    }
}
