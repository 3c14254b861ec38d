//! Move selection for an automated player.
//!
//! Features:
//! - Minimax with alpha-beta pruning over material evaluation
//! - Captures-first move ordering
//! - Per-search transposition cache with bound-aware probes
//! - Randomised choice between equally scored moves
//! - Optional random moves at the start of a game

mod alphabeta;
mod move_order;
mod params;
mod report;

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::tt::TranspositionCache;

use super::error::SearchError;
use super::{Board, Color, Move};
use alphabeta::SearchContext;
pub use move_order::order_moves;
pub use params::SearchParams;
pub use report::SearchReport;

/// Bound used for a side that has no legal move. Larger than any material
/// balance.
pub const MATE_SCORE: i32 = 100_000;

/// Root window half-width. Leaves room for the root's one-point widening.
const INFINITY: i32 = MATE_SCORE + 1;

/// A computer player for one color.
///
/// The random source is injectable so games and tests can be replayed
/// exactly: `Bot::with_rng(color, params, StdRng::seed_from_u64(7))`.
pub struct Bot<R: Rng = StdRng> {
    color: Color,
    params: SearchParams,
    rng: R,
    cache: TranspositionCache,
    random_moves_left: u32,
}

impl Bot<StdRng> {
    /// Bot with default parameters and an entropy-seeded generator.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Bot::with_rng(color, SearchParams::default(), StdRng::from_entropy())
    }
}

impl<R: Rng> Bot<R> {
    pub fn with_rng(color: Color, params: SearchParams, rng: R) -> Self {
        let random_moves_left = params.random_moves;
        Bot {
            color,
            params,
            rng,
            cache: TranspositionCache::new(),
            random_moves_left,
        }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Make the next `moves` calls to [`Bot::get_move`] play a random legal
    /// move instead of searching.
    pub fn set_random_moves(&mut self, moves: u32) {
        self.random_moves_left = moves;
    }

    /// Choose a move for the bot's color.
    ///
    /// `last_move` is the opponent's previous move, used only for logging.
    /// The board is searched in place and restored before returning.
    pub fn get_move(
        &mut self,
        board: &mut Board,
        last_move: Option<Move>,
    ) -> Result<(Move, SearchReport), SearchError> {
        let start = Instant::now();
        if let Some(mv) = last_move {
            log::debug!("{} to move after {}", self.color, mv);
        }

        let legal = board.get_all_moves(self.color);
        if legal.is_empty() {
            return Err(SearchError::NoLegalMoves { color: self.color });
        }
        self.cache.clear();

        if self.random_moves_left > 0 {
            self.random_moves_left -= 1;
            let mv = legal[self.rng.gen_range(0..legal.len())];
            log::debug!("playing random move {mv} ({} left)", self.random_moves_left);
            let report = SearchReport {
                score: board.evaluate(self.color),
                elapsed: start.elapsed(),
                states: 0,
                depth: 0,
                cache_hits: 0,
                random: true,
            };
            log::info!("{}: {mv} {report}", self.color);
            return Ok((mv, report));
        }

        let depth = self.params.depth_for(board.halfmove_clock());
        log::debug!(
            "searching {} plies for {} (half-move clock {})",
            depth,
            self.color,
            board.halfmove_clock()
        );

        let mut ctx = SearchContext {
            board,
            color: self.color,
            params: &self.params,
            rng: &mut self.rng,
            cache: &mut self.cache,
            states: 0,
        };
        let (score, best) = ctx.search(-INFINITY, INFINITY, depth, true, 0);
        let states = ctx.states;

        let mv = best
            .or_else(|| legal.get(0))
            .ok_or(SearchError::NoLegalMoves { color: self.color })?;
        let report = SearchReport {
            score,
            elapsed: start.elapsed(),
            states,
            depth,
            cache_hits: self.cache.hits(),
            random: false,
        };
        log::info!("{}: {mv} {report}", self.color);
        Ok((mv, report))
    }
}
