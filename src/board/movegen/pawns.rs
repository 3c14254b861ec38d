use super::super::{Board, Color, Square};

impl Board {
    /// Pawn geometry: a single push onto an empty square, a double push
    /// from the start rank through an empty square, or a diagonal step
    /// that captures.
    pub(crate) fn pawn_move_ok(&self, from: Square, to: Square, color: Color, capture: bool) -> bool {
        let dir = color.pawn_direction();
        let dr = to.rank() as isize - from.rank() as isize;
        let df = to.file() as isize - from.file() as isize;

        if capture {
            return dr == dir && df.abs() == 1;
        }
        if df != 0 {
            return false;
        }
        if dr == dir {
            return true;
        }
        if dr == 2 * dir && from.rank() == color.pawn_start_rank() {
            return from
                .offset(dir, 0)
                .is_some_and(|between| self.is_empty(between));
        }
        false
    }
}
