//! Standard chess rules for tempo, backed by the `shakmaty` library.
//!
//! [`Game`] implements [`tempo_core::Rules`] so the search can drive it with
//! make/unmake, and adds the front-end conveniences (FEN, UCI notation,
//! termination reasons) that the search itself never needs.

mod error;
mod game;

pub use error::BoardError;
pub use game::{Game, Termination, uci};
pub use shakmaty::{Move, Square};

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
