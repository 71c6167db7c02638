//! Fixed-depth minimax search and move ordering.

pub mod minimax;
pub mod ordering;
#[cfg(test)]
pub(crate) mod tree;

use std::time::{Duration, Instant};

use tempo_core::Rules;
use tracing::debug;

use crate::eval::score::{INF, Score};

/// Switches for the two speed-ups of the search.
///
/// Neither switch changes the result of a search, only the number of nodes it
/// takes to get there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Narrow the window and cut off refuted siblings.
    pub alpha_beta: bool,
    /// Search captures and promotions first.
    pub order_moves: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            alpha_beta: true,
            order_moves: true,
        }
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, the root included.
    pub nodes: u64,
    /// Nodes scored by the evaluator.
    pub leaves: u64,
    /// Nodes whose remaining moves were pruned.
    pub cutoffs: u64,
}

/// Result of a completed search.
#[derive(Debug, Clone)]
pub struct SearchResult<M> {
    /// Minimax score in centipawns from White's perspective.
    pub score: Score,
    /// Best move, `None` when the root has no legal move or `depth <= 0`.
    pub best_move: Option<M>,
    /// Requested depth in plies.
    pub depth: i32,
    /// Node counters.
    pub stats: SearchStats,
    /// Wall-clock time spent searching.
    pub elapsed: Duration,
}

/// Fixed-depth alpha-beta searcher.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    options: SearchOptions,
    stats: SearchStats,
}

impl Searcher {
    /// A searcher with pruning and ordering enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// A searcher with the given options.
    pub fn with_options(options: SearchOptions) -> Self {
        Self {
            options,
            stats: SearchStats::default(),
        }
    }

    /// Current options.
    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Replace the options used by later searches.
    pub fn set_options(&mut self, options: SearchOptions) {
        self.options = options;
    }

    /// Find the best move for the side to move in `position`, `depth` plies deep.
    ///
    /// White maximizes and Black minimizes; the search starts from the full
    /// window. `position` is mutated during the search and restored before
    /// this returns. A `depth` of zero or less evaluates the root and returns
    /// no move.
    pub fn find_best_move<R: Rules + ?Sized>(
        &mut self,
        position: &mut R,
        depth: i32,
    ) -> SearchResult<R::Move> {
        self.stats = SearchStats::default();
        let start = Instant::now();

        let maximizing = position.side_to_move().is_maximizing();
        let (score, best_move) = self.search(position, depth, -INF, INF, maximizing, 0);

        let elapsed = start.elapsed();
        debug!(
            depth,
            score,
            best_move = ?best_move,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            elapsed_ms = elapsed.as_millis() as u64,
            "search complete"
        );

        SearchResult {
            score,
            best_move,
            depth,
            stats: self.stats,
            elapsed,
        }
    }
}

/// Search `position` with default options; see [`Searcher::find_best_move`].
pub fn find_best_move<R: Rules + ?Sized>(position: &mut R, depth: i32) -> SearchResult<R::Move> {
    Searcher::new().find_best_move(position, depth)
}
