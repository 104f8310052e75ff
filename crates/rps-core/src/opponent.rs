//! Opponent move selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::moves::Move;

/// Source of the opponent's move for each round.
pub trait Opponent {
    /// Draw the opponent's next move.
    fn draw(&mut self) -> Move;
}

/// Opponent drawing uniformly at random from the three moves.
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    /// Create an opponent seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create an opponent with a fixed seed, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, entropy-seeded otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::seeded)
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for RandomOpponent {
    fn draw(&mut self) -> Move {
        Move::ALL[self.rng.random_range(0..Move::ALL.len())]
    }
}
