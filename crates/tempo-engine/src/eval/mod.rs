//! Static evaluation.

pub mod material;
pub mod score;

use tempo_core::Rules;

use material::material;
use score::{DRAW, Score, mated};

/// Score `position` from White's perspective, `ply` plies below the root.
///
/// Finished games score as mate or draw. The mated side is always the side to
/// move at the terminal node, which is what makes the sign of a mate score
/// correct: the search only ever evaluates a mate with the loser to move.
/// Everything else is the material balance.
pub fn evaluate<R: Rules + ?Sized>(position: &R, ply: u32) -> Score {
    if position.is_game_over() {
        if position.is_checkmate() {
            return mated(position.side_to_move(), ply);
        }
        return DRAW;
    }
    material(position)
}
