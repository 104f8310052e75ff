use std::path::Path;

use rps_core::Move;

use crate::presenter::TerminalPresenter;

pub fn run(data: &Path, choice: &str, seed: Option<u64>) -> Result<(), String> {
    let player: Move = choice.parse().map_err(|e: rps_core::GameError| e.to_string())?;

    let mut session = super::open_session(data, seed);
    let mut presenter = TerminalPresenter::new(false);
    session.checkpoint(&mut presenter);
    session.submit_move(player, &mut presenter);

    Ok(())
}
