//! Terminal driver: play Hackenbush against another person or the solver.
//!
//! The engine only hands back positions and search results; everything
//! here is prompting and printing.

use clap::{Parser, ValueEnum};
use colored::Colorize;
use dialoguer::Input;
use hackenbush::{AlphaBeta, Color, Game, Level, Move, Position, SearchConfig};
use std::error::Error;

/// Play Hackenbush in the terminal.
#[derive(Parser)]
#[command(name = "hackenbush")]
#[command(about = "Cut your branches, keep the other side's from falling")]
struct Cli {
    /// Which level to play.
    #[arg(long, value_enum, default_value = "sample")]
    level: LevelKind,

    /// Red branches in a random level.
    #[arg(long, default_value = "4")]
    red: usize,

    /// Blue branches in a random level.
    #[arg(long, default_value = "4")]
    blue: usize,

    /// Random seed for level generation.
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Who plays which side.
    #[arg(long, value_enum, default_value = "bot")]
    mode: Mode,

    /// Color the solver plays in bot mode.
    #[arg(long, default_value = "red")]
    bot: Color,

    /// Color that moves first.
    #[arg(long, default_value = "blue")]
    first: Color,

    /// Disable alpha-beta cutoffs.
    #[arg(long)]
    exhaustive: bool,

    /// Search root moves in parallel.
    #[arg(long)]
    parallel: bool,

    /// Print the solver's verdict for the opening position and exit.
    #[arg(long)]
    analyze: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum LevelKind {
    Sample,
    Random,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// One human against the solver.
    Bot,
    /// Two humans at one keyboard.
    Pvp,
    /// Solver against itself.
    Watch,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run(Cli::parse()) {
        log::error!("{}", err);
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let level = match cli.level {
        LevelKind::Sample => Level::sample(),
        LevelKind::Random => Level::random(cli.red, cli.blue, cli.seed),
    };
    let mut game = Game::from_level(level, cli.first)?;
    let mut search = AlphaBeta::new(
        SearchConfig::default()
            .with_pruning(!cli.exhaustive)
            .with_parallel(cli.parallel),
    );

    println!("Welcome to Hackenbush!");
    render(game.position());

    if cli.analyze {
        let analysis = game.analyze(&mut search)?;
        let verdict = match analysis.winner() {
            Some(winner) => format!("{} wins", winner),
            None => "too deep to call".to_string(),
        };
        println!(
            "{} to move: value {}, {}, best cut {}",
            game.to_move(),
            analysis.value,
            verdict,
            analysis
                .best_move()
                .map_or_else(|| "none".to_string(), |mv| mv.to_string()),
        );
        log::info!(
            "searched {} nodes in {}us",
            search.stats().nodes,
            search.stats().time_us
        );
        return Ok(());
    }

    while !game.is_over() {
        let player = game.to_move();
        let automated = match cli.mode {
            Mode::Bot => player == cli.bot,
            Mode::Pvp => false,
            Mode::Watch => true,
        };

        let record = if automated {
            game.bot_move(&mut search)?
        } else {
            match prompt(player, &game.legal_moves())? {
                Some(mv) => Some(game.play(mv)?),
                None => return Ok(()),
            }
        };

        if let Some(record) = record {
            println!(
                "{} cut branch {}{}",
                player,
                record.branch,
                match record.fallen {
                    0 => String::new(),
                    n => format!(", {} more fell", n),
                }
            );
        }
        render(game.position());
    }

    if let Some(result) = game.result() {
        println!(
            "{} has nothing left to cut. {} wins after {} moves.",
            result.loser(),
            result.winner,
            result.plies
        );
    }
    Ok(())
}

/// Print one line per branch in the branch's color.
fn render(position: &Position) {
    if position.is_empty() {
        println!("  (only the ground is left)");
        return;
    }
    for (mv, branch) in position.branches() {
        let line = format!("{:>4}: {}-{}", mv.0, branch.from, branch.to);
        match branch.color {
            Color::Red => println!("{}", line.red()),
            Color::Blue => println!("{}", line.blue()),
        }
    }
}

/// Ask for a branch until the answer is legal. `None` means quit.
fn prompt(player: Color, legal: &[Move]) -> Result<Option<Move>, dialoguer::Error> {
    let options: Vec<String> = legal.iter().map(Move::to_string).collect();
    println!("{}'s turn, possible moves: {}", player, options.join(", "));
    loop {
        let answer: String = Input::new()
            .with_prompt("enter branch to cut or q to exit")
            .interact_text()?;
        let answer = answer.trim();
        if answer.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match answer.parse::<u32>().map(Move) {
            Ok(mv) if legal.contains(&mv) => return Ok(Some(mv)),
            _ => println!("invalid branch"),
        }
    }
}
