use super::super::{Board, CastleSide, Color, Piece, Square};

/// (rank, file) steps a king can take.
pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) fn king_step_ok(from: Square, to: Square) -> bool {
    let dr = from.rank().abs_diff(to.rank());
    let df = from.file().abs_diff(to.file());
    dr <= 1 && df <= 1 && (dr, df) != (0, 0)
}

/// The wing a king move castles to: two files along the home rank from
/// the king's starting square.
pub(crate) fn castle_side(from: Square, to: Square, color: Color) -> Option<CastleSide> {
    let rank = color.back_rank();
    if from != Square(rank, 4) || to.rank() != rank {
        return None;
    }
    [CastleSide::Kingside, CastleSide::Queenside]
        .into_iter()
        .find(|side| to.file() == side.king_to_file())
}

impl Board {
    /// Right granted, rook on its corner and every square between king and
    /// rook empty. Does not look at attacks.
    pub(crate) fn castle_path_ok(&self, color: Color, side: CastleSide) -> bool {
        if !self.castling_rights.has(color, side) {
            return false;
        }
        let rank = color.back_rank();
        let rook_file = side.rook_from_file();
        if self.at(Square(rank, rook_file)) != Some((color, Piece::Rook)) {
            return false;
        }
        let (lo, hi) = if rook_file < 4 { (rook_file + 1, 4) } else { (5, rook_file) };
        (lo..hi).all(|file| self.is_empty(Square(rank, file)))
    }

    /// The king is not in check and does not cross an attacked square.
    /// The landing square is left to the post-move king safety test.
    pub(crate) fn castle_path_safe(&self, color: Color, side: CastleSide) -> bool {
        let rank = color.back_rank();
        let enemy = color.opponent();
        let crossed = side.rook_to_file();
        !self.is_square_attacked(Square(rank, 4), enemy)
            && !self.is_square_attacked(Square(rank, crossed), enemy)
    }
}
