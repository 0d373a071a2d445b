//! Passcode Trainer - CLI
//!
//! Deduction puzzle trainer with TUI and CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use passcode_trainer::{
    commands::{run_clues, run_simple},
    core::AnnotationMode,
    engine::PuzzleEngine,
    puzzles::classic,
};

#[derive(Parser)]
#[command(
    name = "passcode_trainer",
    about = "Practice cracking a three-digit passcode from clues",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Initial marking mode
    #[arg(short, long, global = true, value_enum, default_value_t = ModeArg::Exclude)]
    mode: ModeArg,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based trainer without TUI)
    Simple,

    /// Print the clues and instructions, then exit
    Clues,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Marking a digit rules it out (×)
    Exclude,
    /// Marking a digit flags it as possibly correct (○)
    Correct,
}

impl From<ModeArg> for AnnotationMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Exclude => Self::Exclude,
            ModeArg::Correct => Self::MarkCorrect,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut engine = PuzzleEngine::from_puzzle(classic());
    engine.set_annotation_mode(cli.mode.into());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(engine),
        Commands::Simple => {
            env_logger::init();
            log::info!("starting line-mode trainer");
            run_simple(&mut engine)
        }
        Commands::Clues => {
            env_logger::init();
            run_clues(&engine);
            Ok(())
        }
    }
}

fn run_play_command(engine: PuzzleEngine) -> Result<()> {
    use passcode_trainer::interactive::{App, run_tui};

    // No stderr logger here: it would draw over the alternate screen.
    let app = App::new(engine);
    run_tui(app)
}
