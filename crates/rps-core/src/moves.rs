//! Moves, outcomes and round resolution.
//!
//! The beats-relation is cyclic and fixed: Rock beats Scissors, Scissors
//! beats Paper, Paper beats Rock.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// One of the three hand shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    /// Beats Scissors.
    Rock,
    /// Beats Rock.
    Paper,
    /// Beats Paper.
    Scissors,
}

impl Move {
    /// All moves, in draw order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The move this one defeats.
    pub fn beats(self) -> Move {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "Rock"),
            Self::Paper => write!(f, "Paper"),
            Self::Scissors => write!(f, "Scissors"),
        }
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "r" | "rock" => Ok(Self::Rock),
            "p" | "paper" => Ok(Self::Paper),
            "s" | "scissors" => Ok(Self::Scissors),
            _ => Err(GameError::InvalidMove(s.to_string())),
        }
    }
}

/// Result of a round, from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The player's move beat the opponent's.
    Win,
    /// The opponent's move beat the player's.
    Lose,
    /// Both played the same move.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "Win"),
            Self::Lose => write!(f, "Lose"),
            Self::Draw => write!(f, "Draw"),
        }
    }
}

/// Resolve a round between the player's move and the opponent's move.
pub fn resolve(player: Move, opponent: Move) -> Outcome {
    if player == opponent {
        Outcome::Draw
    } else if player.beats() == opponent {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
