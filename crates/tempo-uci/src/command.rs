//! UCI command parsing.

use tempo_board::{BoardError, Game};
use tempo_engine::eval::score::MAX_MATE_PLY;

use crate::error::UciError;

/// Deepest search accepted from `go depth` or `setoption name Depth`.
///
/// Tied to the mate range so every mate found can be reported as one.
pub const MAX_DEPTH: i32 = MAX_MATE_PLY as i32;

/// Parameters for the `go` command.
///
/// Only `depth` is honoured; clock and node limits are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Search to this depth instead of the configured one.
    pub depth: Option<i32>,
}

/// An option settable with `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UciOption {
    /// `Depth`: default search depth in plies.
    Depth(i32),
    /// `AlphaBeta`: enable alpha-beta pruning.
    AlphaBeta(bool),
    /// `MoveOrdering`: enable capture and promotion ordering.
    MoveOrdering(bool),
}

/// A parsed UCI command.
#[derive(Debug)]
pub enum Command {
    /// `uci` -- identify the engine.
    Uci,
    /// `isready` -- synchronization ping.
    IsReady,
    /// `ucinewgame` -- reset engine state.
    UciNewGame,
    /// `position` -- set up a game with optional moves applied.
    Position(Box<Game>),
    /// `go` -- search the current position.
    Go(GoParams),
    /// `setoption` -- change an engine option.
    SetOption(UciOption),
    /// `stop` -- accepted and ignored, searches run to completion.
    Stop,
    /// `quit` -- exit the engine.
    Quit,
    /// Unrecognized command, ignored.
    Unknown(String),
}

/// Parse a single line of UCI input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, UciError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match head {
        "uci" => Ok(Command::Uci),
        "isready" => Ok(Command::IsReady),
        "ucinewgame" => Ok(Command::UciNewGame),
        "stop" => Ok(Command::Stop),
        "quit" => Ok(Command::Quit),
        "position" => parse_position(args),
        "go" => parse_go(args),
        "setoption" => parse_setoption(args),
        _ => Ok(Command::Unknown(head.to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves e2e4 d7d5 ...]`
/// - `position fen <fen-string> [moves e2e4 d7d5 ...]`
fn parse_position(tokens: &[&str]) -> Result<Command, UciError> {
    let (mut game, rest) = match tokens.first() {
        Some(&"startpos") => (Game::new(), &tokens[1..]),
        Some(&"fen") => {
            // FEN is 6 space-separated fields
            if tokens.len() < 7 {
                return Err(UciError::InvalidFen {
                    fen: tokens[1..].join(" "),
                    reason: "expected six fields".to_string(),
                });
            }
            let fen = tokens[1..7].join(" ");
            let game = Game::from_fen(&fen).map_err(|e| match e {
                BoardError::InvalidFen { fen, reason }
                | BoardError::IllegalPosition { fen, reason } => {
                    UciError::InvalidFen { fen, reason }
                }
                BoardError::InvalidMove { uci_move } => UciError::InvalidMove { uci_move },
            })?;
            (game, &tokens[7..])
        }
        _ => return Err(UciError::MalformedPosition),
    };

    if let Some((&"moves", moves)) = rest.split_first() {
        for uci_move in moves {
            game.play_uci(uci_move).map_err(|_| UciError::InvalidMove {
                uci_move: uci_move.to_string(),
            })?;
        }
    }

    Ok(Command::Position(Box::new(game)))
}

/// Parse the `go` command arguments.
///
/// Unknown tokens, including clock parameters, are silently skipped.
fn parse_go(tokens: &[&str]) -> Result<Command, UciError> {
    let mut params = GoParams::default();

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            "depth" => {
                params.depth = Some(parse_depth(tokens.get(i + 1))?);
                i += 2;
            }
            _ => i += 1,
        }
    }

    Ok(Command::Go(params))
}

fn parse_depth(token: Option<&&str>) -> Result<i32, UciError> {
    let value = token.ok_or_else(|| UciError::MissingGoValue {
        param: "depth".to_string(),
    })?;
    match value.parse::<i32>() {
        Ok(depth) if (1..=MAX_DEPTH).contains(&depth) => Ok(depth),
        _ => Err(UciError::InvalidGoValue {
            param: "depth".to_string(),
            value: value.to_string(),
        }),
    }
}

/// Parse `setoption name <name> [value <value>]`.
///
/// Option names match case-insensitively and may span several tokens.
fn parse_setoption(tokens: &[&str]) -> Result<Command, UciError> {
    let tokens = match tokens.split_first() {
        Some((&"name", rest)) => rest,
        _ => {
            return Err(UciError::InvalidOption {
                name: String::new(),
                value: tokens.join(" "),
            });
        }
    };
    let split = tokens.iter().position(|&t| t == "value");
    let (name, value) = match split {
        Some(at) => (tokens[..at].join(" "), tokens[at + 1..].join(" ")),
        None => (tokens.join(" "), String::new()),
    };

    let invalid = || UciError::InvalidOption {
        name: name.clone(),
        value: value.clone(),
    };
    let parse_bool = || match value.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(invalid()),
    };

    let option = match name.to_ascii_lowercase().as_str() {
        "depth" => match value.parse::<i32>() {
            Ok(depth) if (1..=MAX_DEPTH).contains(&depth) => UciOption::Depth(depth),
            _ => return Err(invalid()),
        },
        "alphabeta" => UciOption::AlphaBeta(parse_bool()?),
        "moveordering" => UciOption::MoveOrdering(parse_bool()?),
        _ => return Err(invalid()),
    };

    Ok(Command::SetOption(option))
}
