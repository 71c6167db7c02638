use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use tempo_board::{Game, uci};
use tempo_engine::{Outcome, SearchOptions, Searcher, play_game};
use tempo_uci::command::MAX_DEPTH;
use tempo_uci::{EngineConfig, UciEngine};

#[derive(Debug, Parser)]
#[command(name = "tempo", version, about = "Fixed-depth alpha-beta chess engine")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Speak UCI on stdin and stdout (the default).
    Uci(UciArgs),
    /// Let the engine play a game against itself.
    Selfplay {
        /// Search depth in plies for every move.
        #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(i32).range(1..=i64::from(MAX_DEPTH)))]
        depth: i32,
        /// Stop after this many plies.
        #[arg(long, default_value_t = 200)]
        max_plies: usize,
        /// Start from this position instead of the initial one.
        #[arg(long)]
        fen: Option<String>,
    },
    /// Search one position with every pruning and ordering combination.
    Bench {
        /// Search depth in plies.
        #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(i32).range(1..=i64::from(MAX_DEPTH)))]
        depth: i32,
        /// Position to search instead of the initial one.
        #[arg(long)]
        fen: Option<String>,
    },
}

#[derive(Debug, Default, Args)]
struct UciArgs {
    /// Default search depth in plies.
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..=i64::from(MAX_DEPTH)))]
    depth: Option<i32>,
    /// Disable alpha-beta pruning.
    #[arg(long)]
    no_alpha_beta: bool,
    /// Disable capture and promotion ordering.
    #[arg(long)]
    no_move_ordering: bool,
}

impl UciArgs {
    fn config(&self) -> EngineConfig {
        let defaults = EngineConfig::default();
        EngineConfig {
            depth: self.depth.unwrap_or(defaults.depth),
            options: SearchOptions {
                alpha_beta: !self.no_alpha_beta,
                order_moves: !self.no_move_ordering,
            },
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout belongs to the UCI protocol.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load(fen: Option<&str>) -> Result<Game> {
    Ok(match fen {
        Some(fen) => Game::from_fen(fen)?,
        None => Game::new(),
    })
}

fn selfplay(depth: i32, max_plies: usize, fen: Option<&str>) -> Result<()> {
    let mut game = load(fen)?;
    info!(depth, max_plies, fen = %game.fen(), "self-play starting");

    let record = play_game(&mut game, depth, max_plies, |record| {
        info!(
            ply = record.ply,
            side = %record.side,
            mv = %uci(&record.mv),
            score = record.score,
            nodes = record.stats.nodes,
            elapsed_ms = record.elapsed.as_millis() as u64,
            "move played"
        );
    });

    let moves: Vec<String> = record.moves.iter().map(|m| uci(&m.mv)).collect();
    println!("{}", moves.join(" "));
    println!("{}", result_line(record.outcome, &game));
    println!("final {}", game.fen());
    Ok(())
}

/// `result <score>`, followed by why the game ended when it did.
fn result_line(outcome: Outcome, game: &Game) -> String {
    match game.termination() {
        Some(reason) => format!("result {outcome} ({reason})"),
        None => format!("result {outcome}"),
    }
}

fn bench(depth: i32, fen: Option<&str>) -> Result<()> {
    let mut game = load(fen)?;
    info!(depth, fen = %game.fen(), "bench starting");

    for alpha_beta in [false, true] {
        for order_moves in [false, true] {
            let options = SearchOptions {
                alpha_beta,
                order_moves,
            };
            let result = Searcher::with_options(options).find_best_move(&mut game, depth);
            let best = result
                .best_move
                .as_ref()
                .map_or_else(|| "0000".to_string(), uci);
            println!(
                "alpha_beta={alpha_beta:<5} ordering={order_moves:<5} score={:<6} best={best:<5} nodes={:<10} cutoffs={:<8} time_ms={}",
                result.score,
                result.stats.nodes,
                result.stats.cutoffs,
                result.elapsed.as_millis()
            );
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    info!("tempo starting");

    match cli.command.unwrap_or(Commands::Uci(UciArgs::default())) {
        Commands::Uci(args) => UciEngine::with_config(args.config()).run()?,
        Commands::Selfplay {
            depth,
            max_plies,
            fen,
        } => selfplay(depth, max_plies, fen.as_deref())?,
        Commands::Bench { depth, fen } => bench(depth, fen.as_deref())?,
    }
    Ok(())
}
