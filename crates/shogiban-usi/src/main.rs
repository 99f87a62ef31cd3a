use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::{Builder, Env, Target, WriteStyle};
use serde::Serialize;
use shogiban_core::{
    BoardStateJson, Color, EnteringKingRule, Game, GameRules, Position, ReplayResult, decode_move, encode_move,
    replay,
};
use shogiban_usi::{EngineReply, GoParams, MockEngine, UsiCommand, accept_engine_reply, parse_usi_line, position_command};

/// Shogi rules checker and USI mock self-play driver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Entering-king declaration rule
    #[arg(long, value_enum, default_value_t = EnteringKingArg::None, global = true)]
    entering_king: EnteringKingArg,

    /// Prior occurrences of a position that make the next one a repetition
    #[arg(long, default_value_t = 3, global = true)]
    repetition_limit: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum EnteringKingArg {
    None,
    Points24,
}

impl From<EnteringKingArg> for EnteringKingRule {
    fn from(arg: EnteringKingArg) -> Self {
        match arg {
            EnteringKingArg::None => EnteringKingRule::None,
            EnteringKingArg::Points24 => EnteringKingRule::Points24,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every legal move of a position
    Moves {
        /// SFEN string or "startpos"
        sfen: String,
    },
    /// Check whether a USI move is legal
    Check {
        /// SFEN string or "startpos"
        sfen: String,
        /// Move in USI notation (e.g. 7g7f, 8h2b+, P*5e)
        usi_move: String,
    },
    /// Replay moves from a position and report the resulting state
    Status {
        /// SFEN string or "startpos"
        sfen: String,
        /// Moves in USI notation
        moves: Vec<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Play two mock engines against each other
    Selfplay {
        /// Random seed of the first engine (the second uses seed + 1)
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Maximum number of plies
        #[arg(long, default_value_t = 256)]
        max_plies: u32,
    },
}

#[derive(Serialize)]
struct StatusReport {
    #[serde(flatten)]
    replay: ReplayResult,
    board: BoardStateJson,
}

fn main() {
    if let Err(e) = run() {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    Builder::from_env(Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level))
        .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
        .write_style(WriteStyle::Never)
        .target(Target::Stderr)
        .init();

    let rules = GameRules {
        entering_king: args.entering_king.into(),
        repetition_limit: args.repetition_limit,
    };
    log::debug!("rules: {rules:?}");

    match args.command {
        Commands::Moves { sfen } => list_moves(&sfen, rules),
        Commands::Check { sfen, usi_move } => check_move(&sfen, &usi_move, rules),
        Commands::Status { sfen, moves, json } => report_status(&sfen, &moves, json, rules),
        Commands::Selfplay { seed, max_plies } => selfplay(seed, max_plies, rules),
    }
}

fn list_moves(sfen: &str, rules: GameRules) -> Result<()> {
    let game = Game::from_sfen(sfen, rules).context("failed to parse position")?;
    let moves = game.legal_moves();
    log::debug!("{} legal moves", moves.len());
    for mv in &moves {
        println!("{}", encode_move(mv));
    }
    Ok(())
}

fn check_move(sfen: &str, usi_move: &str, rules: GameRules) -> Result<()> {
    let game = Game::from_sfen(sfen, rules).context("failed to parse position")?;
    let parsed = decode_move(usi_move).with_context(|| format!("failed to parse move {usi_move}"))?;
    let verdict = parsed.resolve(&game.position().board).and_then(|mv| game.validate(&mv));
    match verdict {
        Ok(()) => {
            println!("legal");
            Ok(())
        }
        Err(reason) => {
            println!("illegal: {reason}");
            std::process::exit(1);
        }
    }
}

fn report_status(sfen: &str, moves: &[String], json: bool, rules: GameRules) -> Result<()> {
    let result = replay(sfen, moves, rules).context("failed to parse position")?;
    if let Some(error) = &result.error {
        log::warn!("replay stopped: {error}");
    }

    if json {
        let position = Position::from_sfen(&result.sfen)?;
        let report = StatusReport { board: BoardStateJson::from_position(&position), replay: result };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("status: {}", result.status);
    println!("sfen: {}", result.sfen);
    println!("applied: {}", result.applied.len());
    if let Some(error) = &result.error {
        println!("error: {error}");
    }
    Ok(())
}

fn side_name(color: Color) -> &'static str {
    match color {
        Color::Black => "black",
        Color::White => "white",
    }
}

fn selfplay(seed: u64, max_plies: u32, rules: GameRules) -> Result<()> {
    let mut game = Game::new(rules);
    let mut engines = [MockEngine::with_rules(seed, rules), MockEngine::with_rules(seed.wrapping_add(1), rules)];
    for engine in &mut engines {
        engine.handle(&UsiCommand::UsiNewGame);
    }

    let mut outcome = None;
    'game: for _ in 0..max_plies {
        if game.status().is_terminal() {
            break;
        }
        let side = game.side_to_move();
        let engine = &mut engines[side.index()];
        engine.handle(&position_command(&game));
        for line in engine.handle(&UsiCommand::Go(GoParams::Byoyomi(1000))) {
            let reply = accept_engine_reply(&mut game, &parse_usi_line(&line))?;
            match reply {
                EngineReply::Moved(status) => {
                    let ply = game.moves().len();
                    let mv = game.usi_moves().pop().unwrap_or_default();
                    println!("{ply} {mv} {status}");
                }
                EngineReply::Resign => {
                    outcome = Some(format!("{} resigns", side_name(side)));
                    break 'game;
                }
                EngineReply::DeclareWin { accepted: true } => {
                    outcome = Some(format!("{} declares win", side_name(side)));
                    break 'game;
                }
                EngineReply::DeclareWin { accepted: false } => {
                    outcome = Some(format!("{} loses by false declaration", side_name(side)));
                    break 'game;
                }
                EngineReply::Ignored => {}
            }
        }
    }

    let outcome = outcome.unwrap_or_else(|| match game.winner() {
        Some(winner) => format!("{} wins by {}", side_name(winner), game.status()),
        None if game.status().is_terminal() => format!("game over by {}", game.status()),
        None => format!("unfinished after {} plies", game.moves().len()),
    });
    println!("result: {outcome}");
    Ok(())
}
