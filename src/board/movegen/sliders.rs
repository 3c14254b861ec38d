use super::super::{Board, Square};

impl Board {
    /// Bishop geometry: equal non-zero rank and file distance, nothing in
    /// between.
    pub(crate) fn diagonal_path_clear(&self, from: Square, to: Square) -> bool {
        let dr = to.rank() as isize - from.rank() as isize;
        let df = to.file() as isize - from.file() as isize;
        if dr == 0 || dr.abs() != df.abs() {
            return false;
        }
        self.path_clear(from, to, dr.signum(), df.signum())
    }

    /// Rook geometry: same rank or same file, nothing in between.
    pub(crate) fn straight_path_clear(&self, from: Square, to: Square) -> bool {
        let dr = to.rank() as isize - from.rank() as isize;
        let df = to.file() as isize - from.file() as isize;
        if (dr == 0) == (df == 0) {
            return false;
        }
        self.path_clear(from, to, dr.signum(), df.signum())
    }

    /// Squares strictly between `from` and `to` along the given step are
    /// all empty.
    fn path_clear(&self, from: Square, to: Square, step_r: isize, step_f: isize) -> bool {
        let mut current = from.offset(step_r, step_f);
        while let Some(sq) = current {
            if sq == to {
                return true;
            }
            if !self.is_empty(sq) {
                return false;
            }
            current = sq.offset(step_r, step_f);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_blocked_in_start_position() {
        let board = Board::new();
        assert!(!board.diagonal_path_clear(sq("c1"), sq("e3")));
        assert!(!board.straight_path_clear(sq("a1"), sq("a3")));
        assert!(board.straight_path_clear(sq("a1"), sq("a2")));
    }

    #[test]
    fn test_open_lines() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/R1B1K3 w - - 0 1");
        assert!(board.diagonal_path_clear(sq("c1"), sq("h6")));
        assert!(board.straight_path_clear(sq("a1"), sq("a8")));
        assert!(!board.straight_path_clear(sq("a1"), sq("d1")));
        assert!(!board.diagonal_path_clear(sq("c1"), sq("c4")));
        assert!(!board.straight_path_clear(sq("a1"), sq("b2")));
    }
}
