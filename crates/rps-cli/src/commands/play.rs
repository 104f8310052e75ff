use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use rps_core::{GameSession, Move};

use super::CliStore;
use crate::presenter::{TerminalPresenter, render_achievements, scoreboard};

const HELP: &str = "\
Commands:
  rock | paper | scissors   play a round (r, p, s also work)
  stats                     show the scoreboard
  achievements              list locked and unlocked achievements
  reset                     zero the score and relock achievements
  help                      show this help
  quit                      leave the game";

pub fn run(data: &Path, seed: Option<u64>, quiet: bool) -> Result<(), String> {
    let mut session = super::open_session(data, seed);
    let mut presenter = TerminalPresenter::new(quiet);

    println!("  {} Rock, Paper, Scissors", "Starting".bold());
    println!("  Highest Winning Streak: {}", session.state().best_streak);
    println!("  Type 'help' for commands, 'quit' to exit.\n");
    let evaluation = session.checkpoint(&mut presenter);
    if !evaluation.already_unlocked.is_empty() {
        println!("{}", render_achievements(&session.achievements()));
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            println!("Goodbye!");
            break;
        }

        match process(&mut session, &mut presenter, input) {
            Ok(()) => println!(),
            Err(e) => println!("{}\n", e.yellow()),
        }
    }

    Ok(())
}

fn process(
    session: &mut GameSession<CliStore>,
    presenter: &mut TerminalPresenter,
    input: &str,
) -> Result<(), String> {
    match input.to_lowercase().as_str() {
        "stats" | "score" => println!("{}", scoreboard(session.state())),
        "achievements" => print!("{}", render_achievements(&session.achievements())),
        "reset" => session.reset(presenter),
        "help" => println!("{HELP}"),
        other => {
            let player: Move = other
                .parse()
                .map_err(|e: rps_core::GameError| format!("{e}; type 'help' for commands"))?;
            session.submit_move(player, presenter);
        }
    }
    Ok(())
}
