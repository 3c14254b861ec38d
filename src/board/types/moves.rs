//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::{CastleSide, CastlingRights};
use super::piece::{Color, Piece};
use super::square::Square;

/// A move record.
///
/// A caller builds a bare candidate with [`Move::new`]; the board's
/// `try_complete`/`can_make` hand back a decorated copy carrying the
/// castling variant, the rights the move gives up, an automatic promotion
/// and the en passant target in force before the move. `unmake_move`
/// relies on those decorations, so always make and unmake the decorated
/// value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    captured: Option<(Color, Piece)>,
    castle: Option<CastleSide>,
    forfeits: CastlingRights,
    promotion: Option<Piece>,
    prior_en_passant: Option<Square>,
}

impl Move {
    /// Create an undecorated candidate move. `captured` must be the current
    /// occupant of `to` (or `None`), otherwise validation rejects it as stale.
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, captured: Option<(Color, Piece)>) -> Self {
        Move {
            from,
            to,
            captured,
            castle: None,
            forfeits: CastlingRights::none(),
            promotion: None,
            prior_en_passant: None,
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The piece standing on `to` before the move, if any
    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<(Color, Piece)> {
        self.captured
    }

    /// Returns true if this move captures a piece
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// The castling variant performed, if this move castles
    #[inline]
    #[must_use]
    pub const fn castle(self) -> Option<CastleSide> {
        self.castle
    }

    /// Castling rights this move gives up
    #[inline]
    #[must_use]
    pub const fn forfeits(self) -> CastlingRights {
        self.forfeits
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    /// En passant target that was in force before this move
    #[inline]
    #[must_use]
    pub const fn prior_en_passant(self) -> Option<Square> {
        self.prior_en_passant
    }

    /// Value of the captured piece, 0 for quiet moves. Drives move ordering.
    #[inline]
    #[must_use]
    pub fn capture_value(self) -> i32 {
        self.captured.map_or(0, |(_, piece)| piece.value())
    }

    #[inline]
    pub(crate) fn with_castle(mut self, side: CastleSide) -> Self {
        self.castle = Some(side);
        self
    }

    #[inline]
    pub(crate) fn with_forfeits(mut self, rights: CastlingRights) -> Self {
        self.forfeits.insert_all(rights);
        self
    }

    #[inline]
    pub(crate) fn with_promotion(mut self, piece: Piece) -> Self {
        self.promotion = Some(piece);
        self
    }

    #[inline]
    pub(crate) fn with_prior_en_passant(mut self, target: Option<Square>) -> Self {
        self.prior_en_passant = target;
        self
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if let Some((_, piece)) = self.captured {
            write!(f, " x{}", piece.to_char())?;
        }
        match self.castle {
            Some(CastleSide::Kingside) => write!(f, " O-O")?,
            Some(CastleSide::Queenside) => write!(f, " O-O-O")?,
            None => {}
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// Initial capacity; no legal chess position has more moves than this.
pub(crate) const MAX_MOVES: usize = 256;

/// List of moves, in generation order.
///
/// Preallocates room for any legal position but grows past that, since the
/// FEN parser accepts placements (a dozen queens, say) with more candidates.
#[derive(Clone, Debug, Default)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(MAX_MOVES),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Move] {
        &mut self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    /// Find the move going from `from` to `to`, if present
    #[must_use]
    pub fn find(&self, from: Square, to: Square) -> Option<Move> {
        self.iter().copied().find(|m| m.from == from && m.to == to)
    }

    /// Stable sort by captured value, highest first. Quiet moves keep
    /// their relative order.
    pub fn sort_by_capture_value(&mut self) {
        self.as_mut_slice()
            .sort_by_key(|m| std::cmp::Reverse(m.capture_value()));
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a `MoveList`.
pub struct MoveListIntoIter {
    inner: std::vec::IntoIter<Move>,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter {
            inner: self.moves.into_iter(),
        }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}
