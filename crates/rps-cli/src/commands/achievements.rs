use std::path::Path;

use crate::presenter::render_achievements;

pub fn run(data: &Path) -> Result<(), String> {
    let mut session = super::open_session(data, None);
    print!("{}", render_achievements(&session.achievements()));
    Ok(())
}
