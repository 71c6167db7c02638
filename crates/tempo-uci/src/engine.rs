//! Synchronous UCI engine loop.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use tempo_board::{Game, uci};
use tempo_core::{Color, Rules};
use tempo_engine::eval::score::mate_distance;
use tempo_engine::{Score, SearchOptions, SearchResult, Searcher};

use crate::command::{Command, GoParams, MAX_DEPTH, UciOption, parse_command};
use crate::error::UciError;

/// Configuration knobs adjustable via `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Search depth used when `go` does not give one.
    pub depth: i32,
    /// Pruning and ordering switches.
    pub options: SearchOptions,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            options: SearchOptions::default(),
        }
    }
}

/// The UCI engine, holding the current game and searcher.
///
/// Searches run on the calling thread; `stop` is accepted but a search always
/// finishes its full depth.
pub struct UciEngine {
    game: Game,
    searcher: Searcher,
    config: EngineConfig,
}

impl UciEngine {
    /// Create a new engine with the starting position and default settings.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create a new engine with the starting position and `config`.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            game: Game::new(),
            searcher: Searcher::with_options(config.options),
            config,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the UCI loop on stdin and stdout until `quit` or input closes.
    pub fn run(self) -> Result<(), UciError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the UCI loop on arbitrary streams until `quit` or input closes.
    pub fn run_with<I: BufRead, O: Write>(mut self, input: I, mut output: O) -> Result<(), UciError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received UCI command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.handle(cmd, &mut output)?,
                Err(e) => warn!(error = %e, "UCI parse error"),
            }
            output.flush()?;
        }

        info!("tempo shutting down");
        Ok(())
    }

    /// Execute one parsed command, writing any response to `out`.
    pub fn handle<O: Write>(&mut self, cmd: Command, out: &mut O) -> io::Result<()> {
        match cmd {
            Command::Uci => self.handle_uci(out),
            Command::IsReady => writeln!(out, "readyok"),
            Command::UciNewGame => {
                self.game = Game::new();
                Ok(())
            }
            Command::Position(game) => {
                self.game = *game;
                Ok(())
            }
            Command::Go(params) => self.handle_go(params, out),
            Command::SetOption(option) => {
                self.handle_setoption(option);
                Ok(())
            }
            Command::Stop | Command::Quit | Command::Unknown(_) => Ok(()),
        }
    }

    fn handle_uci<O: Write>(&self, out: &mut O) -> io::Result<()> {
        writeln!(out, "id name tempo {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "id author the tempo authors")?;
        writeln!(
            out,
            "option name Depth type spin default {} min 1 max {MAX_DEPTH}",
            self.config.depth
        )?;
        writeln!(
            out,
            "option name AlphaBeta type check default {}",
            self.config.options.alpha_beta
        )?;
        writeln!(
            out,
            "option name MoveOrdering type check default {}",
            self.config.options.order_moves
        )?;
        writeln!(out, "uciok")
    }

    fn handle_setoption(&mut self, option: UciOption) {
        match option {
            UciOption::Depth(depth) => self.config.depth = depth,
            UciOption::AlphaBeta(on) => self.config.options.alpha_beta = on,
            UciOption::MoveOrdering(on) => self.config.options.order_moves = on,
        }
        self.searcher.set_options(self.config.options);
        debug!(?option, "option set");
    }

    fn handle_go<O: Write>(&mut self, params: GoParams, out: &mut O) -> io::Result<()> {
        let depth = params.depth.unwrap_or(self.config.depth);
        let side = self.game.side_to_move();
        let result = self.searcher.find_best_move(&mut self.game, depth);

        writeln!(out, "{}", info_line(&result, side))?;
        match &result.best_move {
            Some(mv) => writeln!(out, "bestmove {}", uci(mv)),
            None => writeln!(out, "bestmove 0000"),
        }
    }
}

impl Default for UciEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// UCI score field for a White-relative `score` with `side` to move.
fn score_field(score: Score, side: Color) -> String {
    let relative = if side == Color::White { score } else { -score };
    match mate_distance(relative) {
        Some(plies) => {
            let moves = (plies as i32 + 1) / 2;
            let moves = if relative < 0 { -moves } else { moves };
            format!("mate {moves}")
        }
        None => format!("cp {relative}"),
    }
}

fn info_line(result: &SearchResult<tempo_board::Move>, side: Color) -> String {
    let mut line = format!(
        "info depth {} score {} nodes {} time {}",
        result.depth,
        score_field(result.score, side),
        result.stats.nodes,
        result.elapsed.as_millis()
    );
    if let Some(mv) = &result.best_move {
        line.push_str(" pv ");
        line.push_str(&uci(mv));
    }
    line
}
