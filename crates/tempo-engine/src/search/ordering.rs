//! Move ordering by a coarse MVV-LVA and promotion bonus.
//!
//! Ordering only decides which moves are searched first. It never removes a
//! move and never changes the result of the search, only how many nodes the
//! search needs to reach it.

use tempo_core::{PieceKind, Rules};

use crate::eval::material::piece_value;

/// Bonus for promoting to a queen.
pub const QUEEN_PROMOTION_BONUS: i32 = 800;

/// Bonus for promoting to anything but a queen.
pub const UNDER_PROMOTION_BONUS: i32 = 200;

/// Divisor applied to the attacker's value in a capture.
const ATTACKER_PENALTY_DIVISOR: i32 = 10;

/// Priority of `mv` in `position`; higher is searched first.
///
/// - Capture: `+value(victim) - value(attacker) / 10`. The victim is whatever
///   stands on the destination square, so en passant gets no victim credit.
/// - Promotion: `+800` for a queen, `+200` otherwise.
/// - Anything else: `0`.
pub fn rank_move<R: Rules + ?Sized>(position: &R, mv: &R::Move) -> i32 {
    let mut priority = 0;

    if position.is_capture(mv) {
        if let Some(victim) = position.piece_kind_at(R::destination(mv)) {
            priority += piece_value(victim);
        }
        if let Some(attacker) = position.piece_kind_at(R::origin(mv)) {
            priority -= piece_value(attacker) / ATTACKER_PENALTY_DIVISOR;
        }
    }

    match R::promotion_kind(mv) {
        Some(PieceKind::Queen) => priority += QUEEN_PROMOTION_BONUS,
        Some(_) => priority += UNDER_PROMOTION_BONUS,
        None => {}
    }

    priority
}

/// Sort `moves` by descending [`rank_move`] priority.
///
/// The sort is stable: moves of equal priority keep the order they were
/// generated in, so a given move list always orders the same way.
pub fn order_moves<R: Rules + ?Sized>(position: &R, moves: Vec<R::Move>) -> Vec<R::Move> {
    let mut ranked: Vec<(i32, R::Move)> = moves
        .into_iter()
        .map(|mv| (rank_move(position, &mv), mv))
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));
    ranked.into_iter().map(|(_, mv)| mv).collect()
}
