//! Minimax with alpha-beta pruning over material evaluation.

use rand::Rng;

use crate::tt::{BoundType, CacheEntry, TranspositionCache};

use super::super::{Board, Color, Move};
use super::move_order::order_moves;
use super::{SearchParams, MATE_SCORE};

/// State for a single search from the bot's point of view.
pub(crate) struct SearchContext<'a, R: Rng> {
    pub board: &'a mut Board,
    pub color: Color,
    pub params: &'a SearchParams,
    pub rng: &'a mut R,
    pub cache: &'a mut TranspositionCache,
    /// Moves expanded so far.
    pub states: u64,
}

impl<R: Rng> SearchContext<'_, R> {
    /// Search `depth` plies below the current position.
    ///
    /// The maximizer moves the bot's color, the minimizer its opponent. A
    /// node without legal moves returns its own starting bound (`-MATE_SCORE`
    /// for the maximizer, `MATE_SCORE` for the minimizer) and no move.
    pub fn search(
        &mut self,
        mut alpha: i32,
        mut beta: i32,
        depth: u32,
        maximizing: bool,
        ply: usize,
    ) -> (i32, Option<Move>) {
        if depth == 0 {
            return (self.board.evaluate(self.color), None);
        }

        let hash = self.params.use_cache.then(|| self.board.hash());
        if let Some(hash) = hash {
            if let Some(entry) = self.cache.probe(hash, depth, alpha, beta) {
                return (entry.score, entry.best_move);
            }
        }
        let (alpha_orig, beta_orig) = (alpha, beta);

        let side = if maximizing {
            self.color
        } else {
            self.color.opponent()
        };
        let mut moves = self.board.get_all_moves(side);
        order_moves(&mut moves);

        let mut best_score = if maximizing { -MATE_SCORE } else { MATE_SCORE };
        let mut best_move: Option<Move> = None;

        for mv in moves {
            self.states += 1;

            // Widen the root window by one so a child equal to the current
            // best reports an exact score instead of a fail-low bound.
            let (child_alpha, child_beta) = match (ply, maximizing) {
                (0, true) => (alpha - 1, beta),
                (0, false) => (alpha, beta + 1),
                _ => (alpha, beta),
            };

            self.board.make_move(&mv);
            let (score, _) = self.search(child_alpha, child_beta, depth - 1, !maximizing, ply + 1);
            self.board.unmake_move(&mv);

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if best_move.is_none() || improves || (score == best_score && self.take_tie()) {
                best_score = score;
                best_move = Some(mv);
            }

            if maximizing {
                alpha = alpha.max(best_score);
            } else {
                beta = beta.min(best_score);
            }
            if beta <= alpha {
                break;
            }
        }

        if let Some(hash) = hash {
            self.cache.store(
                hash,
                CacheEntry {
                    depth,
                    score: best_score,
                    bound: BoundType::classify(best_score, alpha_orig, beta_orig),
                    best_move,
                },
            );
        }

        (best_score, best_move)
    }

    /// Exponential(1) draw compared against the tie-break threshold.
    fn take_tie(&mut self) -> bool {
        if self.params.tie_break <= 0.0 {
            return false;
        }
        let u: f64 = self.rng.gen();
        -(1.0 - u).ln() < self.params.tie_break
    }
}
