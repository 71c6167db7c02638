//! Engine-versus-engine games.

use std::fmt;
use std::time::Duration;

use tempo_core::{Color, Rules};
use tracing::info;

use crate::eval::score::Score;
use crate::search::{SearchStats, Searcher};

/// How a game ended, or that it did not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The side to move was checkmated.
    Checkmate {
        /// The side that delivered mate.
        winner: Color,
    },
    /// Stalemate or any other draw the rules recognise.
    Draw,
    /// The ply limit was reached first.
    Unfinished,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = match self {
            Outcome::Checkmate {
                winner: Color::White,
            } => "1-0",
            Outcome::Checkmate {
                winner: Color::Black,
            } => "0-1",
            Outcome::Draw => "1/2-1/2",
            Outcome::Unfinished => "*",
        };
        f.write_str(result)
    }
}

/// One move played in a game.
#[derive(Debug, Clone)]
pub struct MoveRecord<M> {
    /// Zero-based ply index within the game.
    pub ply: usize,
    /// The side that played the move.
    pub side: Color,
    /// The move itself.
    pub mv: M,
    /// Search score from White's perspective.
    pub score: Score,
    /// Counters of the search that chose the move.
    pub stats: SearchStats,
    /// Time spent choosing the move.
    pub elapsed: Duration,
}

/// A finished (or abandoned) game.
#[derive(Debug, Clone)]
pub struct GameRecord<M> {
    /// Every move in the order it was played.
    pub moves: Vec<MoveRecord<M>>,
    /// How the game ended.
    pub outcome: Outcome,
}

/// Classify `position` as won, drawn or still running.
pub fn outcome<R: Rules + ?Sized>(position: &R) -> Outcome {
    if !position.is_game_over() {
        Outcome::Unfinished
    } else if position.is_checkmate() {
        Outcome::Checkmate {
            winner: !position.side_to_move(),
        }
    } else {
        Outcome::Draw
    }
}

/// Let the engine play both sides from `position` until the game ends or
/// `max_plies` moves have been played.
///
/// Each move is chosen by a `depth`-ply search (at least one ply) and applied
/// permanently. `on_move` sees every move right after it is chosen, before it is played.
pub fn play_game<R, F>(
    position: &mut R,
    depth: i32,
    max_plies: usize,
    mut on_move: F,
) -> GameRecord<R::Move>
where
    R: Rules + ?Sized,
    F: FnMut(&MoveRecord<R::Move>),
{
    let mut searcher = Searcher::new();
    let mut moves = Vec::new();

    while moves.len() < max_plies && !position.is_game_over() {
        let side = position.side_to_move();
        let result = searcher.find_best_move(position, depth.max(1));
        let Some(mv) = result.best_move else {
            break;
        };

        let record = MoveRecord {
            ply: moves.len(),
            side,
            mv,
            score: result.score,
            stats: result.stats,
            elapsed: result.elapsed,
        };
        on_move(&record);
        position.apply_move(&record.mv);
        moves.push(record);
    }

    let outcome = outcome(position);
    info!(plies = moves.len(), result = %outcome, "game over");
    GameRecord { moves, outcome }
}
