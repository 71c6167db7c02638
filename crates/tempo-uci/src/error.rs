//! UCI protocol errors.

/// Errors that can occur during UCI protocol handling.
#[derive(Debug, thiserror::Error)]
pub enum UciError {
    /// The `position` command is missing `startpos` or `fen` keyword.
    #[error("malformed position command: missing startpos or fen keyword")]
    MalformedPosition,

    /// The FEN in a `position` command was rejected.
    #[error("invalid FEN {fen:?}: {reason}")]
    InvalidFen {
        /// The FEN string that failed to load.
        fen: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A move in the `position` command is malformed or illegal.
    #[error("invalid move: {uci_move}")]
    InvalidMove {
        /// The UCI move string that was rejected.
        uci_move: String,
    },

    /// A `go` parameter was given without its value.
    #[error("missing value for go parameter {param}")]
    MissingGoValue {
        /// The parameter name.
        param: String,
    },

    /// A `go` parameter value could not be parsed or is out of range.
    #[error("invalid value {value:?} for go parameter {param}")]
    InvalidGoValue {
        /// The parameter name.
        param: String,
        /// The offending value.
        value: String,
    },

    /// A `setoption` command names an unknown option or carries a bad value.
    #[error("invalid option {name:?} = {value:?}")]
    InvalidOption {
        /// The option name as given.
        name: String,
        /// The value as given, empty when missing.
        value: String,
    },

    /// An I/O error occurred while talking to the GUI.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
