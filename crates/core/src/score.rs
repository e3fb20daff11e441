//! The game-theoretic score of a position.
//!
//! Scores are signed: positive favors X, negative favors O, zero is a draw.
//! Under depth-adjusted scoring the magnitude encodes distance to the end of
//! the game (`10 - depth` for an X win, `depth - 10` for an O win), so on a
//! 3x3 board every real score fits in [-10, 10].

use std::fmt;

/// A minimax score. Positive favors X, negative favors O.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(i8);

impl Score {
    /// Score of a drawn (or even) position.
    pub const DRAW: Self = Self(0);

    /// Sentinel below every real score. Initial best for a maximizing node.
    pub const NEG_INFINITY: Self = Self(i8::MIN);

    /// Sentinel above every real score. Initial best for a minimizing node.
    pub const INFINITY: Self = Self(i8::MAX);

    /// Create a score from a raw value.
    pub const fn new(value: i8) -> Self {
        Self(value)
    }

    /// Get the underlying value.
    pub const fn get(self) -> i8 {
        self.0
    }

    /// True if this score represents a forced X win (positive).
    pub const fn favors_x(self) -> bool {
        self.0 > 0
    }

    /// True if this score represents a forced O win (negative).
    pub const fn favors_o(self) -> bool {
        self.0 < 0
    }

    /// True if this score represents a draw under optimal play.
    pub const fn is_draw(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

impl From<Score> for i8 {
    fn from(s: Score) -> i8 {
        s.0
    }
}
