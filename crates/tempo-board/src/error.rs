//! Errors raised while building or driving a [`Game`](crate::Game).

/// Errors from FEN parsing and move input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The FEN string is syntactically malformed.
    #[error("invalid FEN {fen:?}: {reason}")]
    InvalidFen {
        /// The FEN string that failed to parse.
        fen: String,
        /// What the parser rejected.
        reason: String,
    },

    /// The FEN parses but does not describe a legal chess position.
    #[error("illegal position {fen:?}: {reason}")]
    IllegalPosition {
        /// The offending FEN string.
        fen: String,
        /// Why the position was rejected.
        reason: String,
    },

    /// A UCI move string is malformed or not legal in the current position.
    #[error("invalid move: {uci_move}")]
    InvalidMove {
        /// The UCI move string that was rejected.
        uci_move: String,
    },
}
