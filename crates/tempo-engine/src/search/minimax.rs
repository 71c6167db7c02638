//! Minimax with alpha-beta pruning over a shared, in-place position.

use tempo_core::{MoveGuard, Rules};
use tracing::trace;

use crate::eval::evaluate;
use crate::eval::score::{INF, Score};
use crate::search::Searcher;
use crate::search::ordering::order_moves;

impl Searcher {
    /// Search `position` to `depth` plies inside the window `(alpha, beta)`.
    ///
    /// Returns the minimax score from White's perspective and the move that
    /// achieves it. `maximizing` is `true` when White is to move at this node
    /// and `ply` is the distance from the root, used to prefer short mates.
    ///
    /// Every move is applied through a [`MoveGuard`], so `position` is back in
    /// its original state when this returns, including on a cutoff or a panic.
    /// When at least one move exists the returned move is never `None`; ties
    /// go to the earliest move in search order.
    pub fn search<R: Rules + ?Sized>(
        &mut self,
        position: &mut R,
        depth: i32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
        ply: u32,
    ) -> (Score, Option<R::Move>) {
        self.stats.nodes += 1;

        if depth <= 0 || position.is_game_over() {
            self.stats.leaves += 1;
            return (evaluate(position, ply), None);
        }

        let mut moves = position.legal_moves();
        debug_assert!(
            !moves.is_empty(),
            "rules reported no legal moves in a position that is not game over"
        );
        if self.options.order_moves {
            moves = order_moves(position, moves);
        }

        let mut best_score = if maximizing { -INF } else { INF };
        let mut best_move: Option<R::Move> = None;

        for mv in moves {
            let score = {
                let mut child = MoveGuard::apply(&mut *position, &mv);
                self.search(&mut *child, depth - 1, alpha, beta, !maximizing, ply + 1).0
            };

            if ply == 0 {
                trace!(mv = ?mv, score, "root move searched");
            }

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves || best_move.is_none() {
                best_score = score;
                best_move = Some(mv);
            }

            if !self.options.alpha_beta {
                continue;
            }

            if maximizing {
                alpha = alpha.max(best_score);
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            } else {
                beta = beta.min(best_score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
        }

        (best_score, best_move)
    }
}
