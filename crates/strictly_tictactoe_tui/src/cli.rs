//! Command-line interface for strictly_tictactoe_tui.

use clap::Parser;
use std::path::PathBuf;
use strictly_tictactoe::Mode;

/// Tic-tac-toe in the terminal, against a friend or a random AI.
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe_tui")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Mode of the first game (human-vs-human or human-vs-ai)
    #[arg(short, long)]
    pub mode: Option<Mode>,

    /// Seed for the AI opponent, for reproducible games
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Path to the TOML config file
    #[arg(short, long, default_value = "strictly_tictactoe.toml")]
    pub config: PathBuf,

    /// File to write logs to
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
