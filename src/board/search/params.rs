#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunables for [`super::Bot`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchParams {
    /// Depth used while the game is still in its opening plies.
    pub opening_depth: u32,
    /// Number of half-moves considered the opening.
    pub opening_plies: u32,
    /// Depth used after the opening.
    pub depth: u32,
    /// Overrides the depth schedule when set.
    pub fixed_depth: Option<u32>,
    /// Probability scale for replacing a move with an equally scored one.
    /// 0.0 keeps the first of equal moves.
    pub tie_break: f64,
    pub use_cache: bool,
    /// Number of initial `get_move` calls answered with a random legal move.
    pub random_moves: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            opening_depth: 2,
            opening_plies: 4,
            depth: 3,
            fixed_depth: None,
            tie_break: 0.2,
            use_cache: true,
            random_moves: 0,
        }
    }
}

impl SearchParams {
    #[must_use]
    pub fn with_fixed_depth(mut self, depth: u32) -> Self {
        self.fixed_depth = Some(depth);
        self
    }

    #[must_use]
    pub fn with_depths(mut self, opening_depth: u32, depth: u32) -> Self {
        self.opening_depth = opening_depth;
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_opening_plies(mut self, plies: u32) -> Self {
        self.opening_plies = plies;
        self
    }

    #[must_use]
    pub fn with_tie_break(mut self, tie_break: f64) -> Self {
        self.tie_break = tie_break;
        self
    }

    #[must_use]
    pub fn with_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }

    #[must_use]
    pub fn with_random_moves(mut self, moves: u32) -> Self {
        self.random_moves = moves;
        self
    }

    /// Search depth for a position whose half-move clock is `halfmove_clock`.
    /// Never less than one ply.
    #[must_use]
    pub fn depth_for(&self, halfmove_clock: u32) -> u32 {
        let depth = match self.fixed_depth {
            Some(depth) => depth,
            None if halfmove_clock < self.opening_plies => self.opening_depth,
            None => self.depth,
        };
        depth.max(1)
    }
}
