//! Search and evaluation for tempo.

pub mod eval;
pub mod search;
pub mod selfplay;

pub use eval::evaluate;
pub use eval::score::{DRAW, INF, MATE_BASE, Score};
pub use search::{SearchOptions, SearchResult, SearchStats, Searcher, find_best_move};
pub use selfplay::{GameRecord, MoveRecord, Outcome, play_game};
