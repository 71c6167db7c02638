//! The contract between the search and a rules library.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A game position together with the rules that drive it.
///
/// The search holds exactly one `&mut` implementor for a whole search and
/// walks the tree by applying and undoing moves in place. Implementors are
/// trusted: a move returned by [`legal_moves`](Rules::legal_moves) is
/// assumed legal, and the game-over flags are assumed consistent with it.
pub trait Rules {
    /// A legal transition from the current position.
    type Move: Clone + PartialEq + fmt::Debug;

    /// A board coordinate, only ever fed back into [`piece_kind_at`](Rules::piece_kind_at).
    type Square: Copy;

    /// `true` when the game has ended (mate, stalemate or any draw rule).
    fn is_game_over(&self) -> bool;

    /// `true` when the side to move is checkmated.
    ///
    /// Only meaningful when [`is_game_over`](Rules::is_game_over) is `true`.
    fn is_checkmate(&self) -> bool;

    /// The side whose turn it is.
    fn side_to_move(&self) -> Color;

    /// All legal moves in the current position.
    ///
    /// The order is not required to be stable between calls.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// `true` when `mv` removes an enemy piece.
    fn is_capture(&self, mv: &Self::Move) -> bool;

    /// The kind of piece standing on `square`, if any.
    fn piece_kind_at(&self, square: Self::Square) -> Option<PieceKind>;

    /// The square the moving piece leaves.
    fn origin(mv: &Self::Move) -> Self::Square;

    /// The square the moving piece lands on.
    fn destination(mv: &Self::Move) -> Self::Square;

    /// The piece kind a pawn turns into, for promotions.
    fn promotion_kind(mv: &Self::Move) -> Option<PieceKind>;

    /// Number of `side`'s pieces of the given kind.
    fn piece_count(&self, side: Color, kind: PieceKind) -> u32;

    /// Play `mv`, mutating the position in place.
    fn apply_move(&mut self, mv: &Self::Move);

    /// Take back the most recent move that has not been undone yet.
    fn undo_last_move(&mut self);
}
