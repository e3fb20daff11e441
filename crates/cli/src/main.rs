//! Terminal driver for the oxo engine.
//!
//! `play` runs an interactive game in the terminal, standing in for the
//! browser UI the engine was designed to sit behind. `bench` pits the
//! engine against a seeded random opponent across many games in parallel
//! and can dump per-game records as JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use oxo_board::{status, Board, Coord, GameStatus, Player};
use oxo_minimax::{Minimax, MinimaxConfig, Scoring};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Oxo tic-tac-toe engine driver.
#[derive(Parser)]
#[command(name = "oxo")]
#[command(about = "Play against or benchmark the oxo tic-tac-toe engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the engine.
    Play {
        /// Side the human plays. O always moves first.
        #[arg(long, value_enum, default_value = "o")]
        human: SideArg,

        /// Terminal scoring convention for the engine.
        #[arg(long, value_enum, default_value = "depth")]
        scoring: ScoringArg,
    },

    /// Run engine-vs-random games and report results.
    Bench {
        /// Number of games to play.
        #[arg(short, long, default_value = "100")]
        games: usize,

        /// Base random seed; game i uses seed + i.
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Side the engine plays. O always moves first.
        #[arg(long, value_enum, default_value = "x")]
        engine: SideArg,

        /// Terminal scoring convention for the engine.
        #[arg(long, value_enum, default_value = "depth")]
        scoring: ScoringArg,

        /// Write per-game records to this file as JSON.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SideArg {
    O,
    X,
}

impl From<SideArg> for Player {
    fn from(side: SideArg) -> Player {
        match side {
            SideArg::O => Player::O,
            SideArg::X => Player::X,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ScoringArg {
    /// Depth-adjusted: prefer faster wins and slower losses.
    Depth,
    /// Flat +1/-1: all wins equal.
    Flat,
}

impl From<ScoringArg> for Scoring {
    fn from(arg: ScoringArg) -> Scoring {
        match arg {
            ScoringArg::Depth => Scoring::DepthAdjusted,
            ScoringArg::Flat => Scoring::Flat,
        }
    }
}

/// Result of one benchmark game, from the engine's point of view.
#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
enum GameOutcome {
    EngineWin,
    OpponentWin,
    Draw,
}

/// A complete benchmark game.
#[derive(Serialize, Debug)]
struct GameRecord {
    /// Seed of this game's random opponent.
    seed: u64,

    /// Moves in play order, engine and opponent interleaved.
    moves: Vec<Coord>,

    outcome: GameOutcome,

    /// Total positions the engine searched over the whole game.
    nodes: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { human, scoring } => play(human.into(), scoring.into()),
        Commands::Bench {
            games,
            seed,
            engine,
            scoring,
            output,
        } => bench(games, seed, engine.into(), scoring.into(), output),
    }
}

/// Interactive game loop: print the board, read the human's move, let the
/// engine answer, stop on a terminal position.
fn play(human: Player, scoring: Scoring) -> Result<()> {
    let engine_side = human.opposite();
    let mut minimax = Minimax::new(MinimaxConfig::with_scoring(scoring));
    let mut board = Board::standard();
    let mut turn = Player::O;

    println!("You play {}, the engine plays {}. O moves first.", human, engine_side);
    println!("Enter moves as: row col (both 0-2)\n");

    loop {
        println!("{}", board);

        if turn == human {
            let coord = read_move(&board)?;
            // apply re-checks bounds and occupancy; read_move already
            // re-prompted for both, so this cannot fail here.
            board.apply(coord, human).context("applying human move")?;
        } else {
            let decision = minimax.decide(&board, engine_side);
            let coord = decision
                .best_move
                .context("engine asked to move on a terminal board")?;
            board.apply(coord, engine_side).context("applying engine move")?;
            println!(
                "Engine plays {} (score {}, {} positions searched)",
                coord,
                decision.score,
                minimax.nodes()
            );
        }
        turn = turn.opposite();

        match status(&board) {
            GameStatus::InProgress => {}
            GameStatus::Won(line) => {
                println!("{}", board);
                println!(
                    "{} wins: line from {} to {}",
                    line.player,
                    line.origin,
                    line.end()
                );
                return Ok(());
            }
            GameStatus::Draw => {
                println!("{}", board);
                println!("Draw.");
                return Ok(());
            }
        }
    }
}

/// Read a "row col" move from stdin, re-prompting until it is in-bounds
/// and targets an empty cell.
fn read_move(board: &Board) -> Result<Coord> {
    let stdin = io::stdin();
    loop {
        print!("Your move> ");
        io::stdout().flush().context("flushing prompt")?;

        let mut line = String::new();
        let read = stdin.read_line(&mut line).context("reading move")?;
        if read == 0 {
            anyhow::bail!("stdin closed mid-game");
        }

        let mut parts = line.split_whitespace();
        let (Some(row), Some(col)) = (parts.next(), parts.next()) else {
            println!("Expected two numbers, e.g.: 1 2");
            continue;
        };
        let (Ok(row), Ok(col)) = (row.parse::<i16>(), col.parse::<i16>()) else {
            println!("Expected two numbers, e.g.: 1 2");
            continue;
        };

        let Some(coord) = board.coord_at(row, col) else {
            println!("({}, {}) is off the board", row, col);
            continue;
        };
        if !board.is_empty(coord) {
            println!("{} is already taken", coord);
            continue;
        }
        return Ok(coord);
    }
}

/// Play one engine-vs-random game with the given opponent seed.
fn bench_game(engine_side: Player, scoring: Scoring, seed: u64) -> GameRecord {
    let mut minimax = Minimax::new(MinimaxConfig::with_scoring(scoring));
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut board = Board::standard();
    let mut turn = Player::O;
    let mut moves = Vec::new();
    let mut nodes = 0;

    while !status(&board).is_terminal() {
        let coord = if turn == engine_side {
            let decision = minimax.decide(&board, turn);
            nodes += minimax.nodes();
            decision.best_move.expect("non-terminal position has a move")
        } else {
            let available = board.available_moves();
            available[rng.gen_range(0..available.len())]
        };
        board.apply(coord, turn).expect("chosen moves are legal");
        moves.push(coord);
        turn = turn.opposite();
    }

    let outcome = match status(&board) {
        GameStatus::Won(line) if line.player == engine_side => GameOutcome::EngineWin,
        GameStatus::Won(_) => GameOutcome::OpponentWin,
        _ => GameOutcome::Draw,
    };

    GameRecord {
        seed,
        moves,
        outcome,
        nodes,
    }
}

/// Run `games` engine-vs-random games in parallel and print a summary.
fn bench(
    games: usize,
    seed: u64,
    engine_side: Player,
    scoring: Scoring,
    output: Option<PathBuf>,
) -> Result<()> {
    let start = Instant::now();

    let records: Vec<GameRecord> = (0..games)
        .into_par_iter()
        .map(|i| bench_game(engine_side, scoring, seed + i as u64))
        .collect();

    let elapsed = start.elapsed();

    let wins = records
        .iter()
        .filter(|r| r.outcome == GameOutcome::EngineWin)
        .count();
    let losses = records
        .iter()
        .filter(|r| r.outcome == GameOutcome::OpponentWin)
        .count();
    let draws = games - wins - losses;
    let total_nodes: u64 = records.iter().map(|r| r.nodes).sum();

    println!(
        "{} games as {} vs random opponent in {:.2?}",
        games, engine_side, elapsed
    );
    println!("  wins:   {}", wins);
    println!("  draws:  {}", draws);
    println!("  losses: {}", losses);
    println!(
        "  avg positions searched per game: {}",
        total_nodes / games.max(1) as u64
    );

    if losses > 0 {
        println!("WARNING: the engine lost {} games; that is a bug", losses);
    }

    if let Some(path) = output {
        let file = File::create(&path)
            .with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &records)
            .context("writing game records")?;
        println!("Wrote {} records to {}", records.len(), path.display());
    }

    Ok(())
}
