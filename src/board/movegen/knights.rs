use super::super::Square;

/// (rank, file) steps a knight can take.
pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) fn knight_move_ok(from: Square, to: Square) -> bool {
    let dr = from.rank().abs_diff(to.rank());
    let df = from.file().abs_diff(to.file());
    (dr == 1 && df == 2) || (dr == 2 && df == 1)
}
