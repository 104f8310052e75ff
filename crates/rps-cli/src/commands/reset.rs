use std::path::Path;

use crate::presenter::TerminalPresenter;

pub fn run(data: &Path, all: bool) -> Result<(), String> {
    let mut session = super::open_reset_session(data);
    let mut presenter = TerminalPresenter::new(false);

    if all {
        session.wipe(&mut presenter);
    } else {
        session.reset(&mut presenter);
    }

    if session.is_storage_degraded() {
        return Err(format!("reset could not be saved to {}", data.display()));
    }
    if all {
        println!("Best streak cleared.");
    } else {
        println!("Best streak kept: {}", session.state().best_streak);
    }

    Ok(())
}
