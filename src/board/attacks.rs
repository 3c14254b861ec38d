//! Attack detection by ray scanning.

use super::movegen::{KING_OFFSETS, KNIGHT_OFFSETS};
use super::{Board, Color, Piece, Square};

/// (rank, file) directions along ranks and files.
const STRAIGHT_DIRS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
/// (rank, file) directions along diagonals.
const DIAGONAL_DIRS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Board {
    /// First occupant met walking from `(rank, file)` in direction
    /// `(dr, df)`, not counting the start square.
    fn first_blocker(&self, rank: isize, file: isize, dr: isize, df: isize) -> Option<(Color, Piece)> {
        let (mut r, mut f) = (rank + dr, file + df);
        while (0..8).contains(&r) && (0..8).contains(&f) {
            if let Some(occupant) = self.at_coords(f, r) {
                return Some(occupant);
            }
            r += dr;
            f += df;
        }
        None
    }

    /// Whether any piece of color `by` attacks `square`.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        let rank = square.rank() as isize;
        let file = square.file() as isize;

        for (dr, df) in STRAIGHT_DIRS {
            if let Some((color, piece)) = self.first_blocker(rank, file, dr, df) {
                if color == by && piece.attacks_straight() {
                    return true;
                }
            }
        }

        for (dr, df) in DIAGONAL_DIRS {
            if let Some((color, piece)) = self.first_blocker(rank, file, dr, df) {
                if color == by && piece.attacks_diagonally() {
                    return true;
                }
            }
        }

        if KNIGHT_OFFSETS
            .iter()
            .any(|&(dr, df)| self.at_coords(file + df, rank + dr) == Some((by, Piece::Knight)))
        {
            return true;
        }

        // An attacking pawn stands one step behind the square, seen from its
        // own direction of travel.
        let pawn_rank = rank - by.pawn_direction();
        if [-1, 1]
            .iter()
            .any(|&df| self.at_coords(file + df, pawn_rank) == Some((by, Piece::Pawn)))
        {
            return true;
        }

        KING_OFFSETS
            .iter()
            .any(|&(dr, df)| self.at_coords(file + df, rank + dr) == Some((by, Piece::King)))
    }

    /// True unless `color`'s king is attacked. A board without that king
    /// counts as safe.
    #[must_use]
    pub fn is_king_safe(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king) => !self.is_square_attacked(king, color.opponent()),
            None => true,
        }
    }
}
