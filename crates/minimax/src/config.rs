//! Search configuration.

use oxo_board::Player;
use oxo_core::Score;

/// Terminal scoring convention.
///
/// Both conventions agree on which positions are winning; they differ in
/// which of several equally-winning moves gets picked, because row-major
/// tie-breaking only sees scores.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Scoring {
    /// `10 - depth` for an X win, `depth - 10` for an O win: faster wins
    /// and slower losses score better, so the engine finishes games off
    /// and drags out lost ones. The default.
    #[default]
    DepthAdjusted,

    /// Flat `+1` / `-1`: every win is equal, so among several winning
    /// lines the first in row-major order is chosen even when a quicker
    /// one exists.
    Flat,
}

impl Scoring {
    /// Score a won position at the given search depth.
    pub fn terminal(self, winner: Player, depth: u8) -> Score {
        match (self, winner) {
            (Scoring::DepthAdjusted, Player::X) => Score::new(10 - depth as i8),
            (Scoring::DepthAdjusted, Player::O) => Score::new(depth as i8 - 10),
            (Scoring::Flat, Player::X) => Score::new(1),
            (Scoring::Flat, Player::O) => Score::new(-1),
        }
    }
}

/// Minimax configuration.
#[derive(Clone, Debug, Default)]
pub struct MinimaxConfig {
    /// Terminal scoring convention.
    pub scoring: Scoring,
}

impl MinimaxConfig {
    /// Config with the given scoring convention.
    pub fn with_scoring(scoring: Scoring) -> Self {
        Self { scoring }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_depth_adjusted() {
        assert_eq!(MinimaxConfig::default().scoring, Scoring::DepthAdjusted);
    }

    #[test]
    fn test_depth_adjusted_prefers_faster_wins() {
        let s = Scoring::DepthAdjusted;
        assert!(s.terminal(Player::X, 2) > s.terminal(Player::X, 4));
        assert!(s.terminal(Player::O, 2) < s.terminal(Player::O, 4));
    }

    #[test]
    fn test_flat_is_depth_agnostic() {
        let s = Scoring::Flat;
        assert_eq!(s.terminal(Player::X, 0), s.terminal(Player::X, 8));
        assert_eq!(s.terminal(Player::O, 0).get(), -1);
    }

    #[test]
    fn test_signs() {
        for scoring in [Scoring::DepthAdjusted, Scoring::Flat] {
            for depth in 0..9 {
                assert!(scoring.terminal(Player::X, depth).favors_x());
                assert!(scoring.terminal(Player::O, depth).favors_o());
            }
        }
    }
}
