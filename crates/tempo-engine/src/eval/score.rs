//! Score units and the reserved mate range.

use tempo_core::Color;

/// A position score in centipawns, positive when White is better.
pub type Score = i32;

/// Score of a recognised draw.
pub const DRAW: Score = 0;

/// Magnitude of a mate delivered at the root; a mate `n` plies away scores
/// `MATE_BASE - n`.
pub const MATE_BASE: Score = 10_000;

/// Deepest ply a search may reach, and so the longest mate distance
/// [`mate_distance`] recognises. Anything closer to `MATE_BASE` than the
/// depth limit allows is a material score.
pub const MAX_MATE_PLY: u32 = 64;

/// Bound of the unbounded search window.
///
/// `-INF` is representable, so negating a bound never overflows.
pub const INF: Score = i32::MAX;

/// Score for a position where `loser` is checkmated, `ply` plies from the root.
#[inline]
pub const fn mated(loser: Color, ply: u32) -> Score {
    -loser.sign() * (MATE_BASE - ply as Score)
}

/// Plies until mate for a mate score, `None` for material or draw scores.
pub fn mate_distance(score: Score) -> Option<u32> {
    let magnitude = score.checked_abs()?;
    if magnitude > MATE_BASE {
        return None;
    }
    let distance = (MATE_BASE - magnitude) as u32;
    (distance <= MAX_MATE_PLY).then_some(distance)
}
