//! Terminal front end for the rock-paper-scissors game.

mod commands;
mod presenter;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rps",
    about = "Rock, paper, scissors with streaks and achievements",
    version,
    propagate_version = true
)]
struct Cli {
    /// Save file holding achievements and the best streak
    #[arg(short, long, global = true, default_value = "rps-save.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive game
    Play {
        /// RNG seed for a reproducible opponent
        #[arg(short, long)]
        seed: Option<u64>,

        /// Do not show achievement popups
        #[arg(short, long)]
        quiet: bool,
    },

    /// Play a single round
    Throw {
        /// rock, paper or scissors (or r, p, s)
        #[arg(value_name = "MOVE")]
        choice: String,

        /// RNG seed for a reproducible opponent
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Show the best streak and achievement progress
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List locked and unlocked achievements
    Achievements,

    /// Relock all achievements
    Reset {
        /// Also forget the best winning streak
        #[arg(long)]
        all: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let data = cli.data.as_path();

    let result = match cli.command {
        Commands::Play { seed, quiet } => commands::play::run(data, seed, quiet),
        Commands::Throw { choice, seed } => commands::throw::run(data, &choice, seed),
        Commands::Stats { json } => commands::stats::run(data, json),
        Commands::Achievements => commands::achievements::run(data),
        Commands::Reset { all } => commands::reset::run(data, all),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
