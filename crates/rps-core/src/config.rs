//! Configuration for a game session.

/// Configuration for a game session.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// RNG seed for a reproducible opponent. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Set the opponent RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set or clear the opponent RNG seed.
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}
