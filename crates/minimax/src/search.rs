//! Pure minimax over the full game tree.
//!
//! The searcher clones the caller's board once into a scratch buffer and
//! then explores by mutating that buffer in place: each candidate move is
//! placed, the recursion descends, and the cell is reverted to empty before
//! the next sibling is tried. No per-node allocation, and no observable
//! mutation escapes a `decide` call.

use crate::MinimaxConfig;
use oxo_board::{winner, Board, Coord, Player};
use oxo_core::Score;

/// The outcome of a search: the chosen move and the game-theoretic value
/// of the position under optimal play.
///
/// `best_move` is `None` only when the position is already terminal (won,
/// or full with no winner). Callers check for `None` before applying.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Decision {
    pub best_move: Option<Coord>,
    pub score: Score,
}

/// Exhaustive minimax move selector.
///
/// X maximizes and O minimizes; the searcher itself is symmetric and does
/// not know which side the computer plays. Apart from a node counter kept
/// for diagnostics, `decide` is a pure function of (board, player): calling
/// it twice on the same position returns the same decision both times.
pub struct Minimax {
    config: MinimaxConfig,
    /// Positions visited by the most recent `decide` call.
    nodes: u64,
}

impl Minimax {
    /// Create a searcher with the given configuration.
    pub fn new(config: MinimaxConfig) -> Self {
        Self { config, nodes: 0 }
    }

    /// Choose the optimal move for `to_move` on `board`.
    ///
    /// The input board is untouched; the whole search runs on an internal
    /// scratch clone.
    pub fn decide(&mut self, board: &Board, to_move: Player) -> Decision {
        self.nodes = 0;
        let mut scratch = board.clone();
        self.search(&mut scratch, to_move, 0)
    }

    /// Positions visited by the last `decide` call. Diagnostic only; it
    /// never feeds back into move selection.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn search(&mut self, board: &mut Board, to_move: Player, depth: u8) -> Decision {
        self.nodes += 1;

        // Terminal checks come first: a completed line ends the game even
        // when empty cells remain.
        if let Some(line) = winner(board) {
            return Decision {
                best_move: None,
                score: self.config.scoring.terminal(line.player, depth),
            };
        }

        let moves = board.available_moves();
        if moves.is_empty() {
            return Decision {
                best_move: None,
                score: Score::DRAW,
            };
        }

        let mut best_score = match to_move {
            Player::X => Score::NEG_INFINITY,
            Player::O => Score::INFINITY,
        };
        let mut best_move = None;

        for coord in moves {
            board.place(coord, to_move);
            let reply = self.search(board, to_move.opposite(), depth + 1);
            board.clear(coord);

            // Strict comparison: among equal scores the earliest move in
            // row-major order stays selected.
            let better = match to_move {
                Player::X => reply.score > best_score,
                Player::O => reply.score < best_score,
            };
            if better {
                best_score = reply.score;
                best_move = Some(coord);
            }
        }

        Decision {
            best_move,
            score: best_score,
        }
    }
}
