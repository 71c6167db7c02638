//! Shared vocabulary for tempo: sides, piece kinds, and the rules contract
//! the search is written against.

mod color;
mod guard;
mod piece_kind;
mod rules;

pub use color::Color;
pub use guard::MoveGuard;
pub use piece_kind::PieceKind;
pub use rules::Rules;
