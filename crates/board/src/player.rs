use serde::{Deserialize, Serialize};
use std::fmt;

/// A tic-tac-toe player.
///
/// The engine is symmetric: which player is the human and which is the
/// computer is the caller's policy. By scoring convention X maximizes and
/// O minimizes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Player {
    O,
    X,
}

impl Player {
    /// Get the opposing player.
    pub fn opposite(self) -> Self {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }

    /// The cell character used by board notation.
    pub fn to_char(self) -> char {
        match self {
            Player::O => 'O',
            Player::X => 'X',
        }
    }

    /// Parse a notation character, returning None for anything else.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'O' | 'o' => Some(Player::O),
            'X' | 'x' => Some(Player::X),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
