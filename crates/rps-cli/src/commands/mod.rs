pub mod achievements;
pub mod play;
pub mod reset;
pub mod stats;
pub mod throw;

use std::path::Path;

use rps_core::storage::{DisabledStore, JsonFileStore};
use rps_core::{GameConfig, GameSession, KeyValueStore, StorageError};

/// Store type used by every command.
pub type CliStore = Box<dyn KeyValueStore>;

/// Open the save file. An unreadable file leaves the game playable without
/// saving; the session reports that through the presenter. With
/// `replace_corrupt`, a file that is not a valid save is overwritten with an
/// empty one instead.
fn open_store(path: &Path, replace_corrupt: bool) -> CliStore {
    let opened = match JsonFileStore::open(path) {
        Err(StorageError::Corrupt(e)) if replace_corrupt => {
            log::warn!("replacing corrupt save file {}: {e}", path.display());
            JsonFileStore::create(path)
        }
        other => other,
    };
    match opened {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("cannot open save file {}: {e}", path.display());
            Box::new(DisabledStore::new(format!(
                "cannot open {}: {e}",
                path.display()
            )))
        }
    }
}

/// Open a session on the save file at `path`.
fn open_session(path: &Path, seed: Option<u64>) -> GameSession<CliStore> {
    let config = GameConfig::default().with_optional_seed(seed);
    GameSession::new(open_store(path, false), &config)
}

/// Open a session for `rps reset`, which may discard a corrupt save file.
fn open_reset_session(path: &Path) -> GameSession<CliStore> {
    GameSession::new(open_store(path, true), &GameConfig::default())
}
