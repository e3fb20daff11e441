//! Oxo Minimax - Exhaustive game-tree search
//!
//! This crate selects moves by pure minimax: every legal continuation is
//! explored to the end of the game, terminal positions are scored, and the
//! optimal move is backed up. No pruning, no depth limit, no transposition
//! table; a full 3x3 tree is far below 9! positions once win detection cuts
//! lines short, and completes in well under a millisecond.
//!
//! # Example
//!
//! ```
//! use oxo_board::{Board, Coord, Player};
//! use oxo_minimax::{Minimax, MinimaxConfig};
//!
//! // X to move, one move from completing the top row.
//! let board = Board::from_notation("XX./OO./...").unwrap();
//! let mut minimax = Minimax::new(MinimaxConfig::default());
//!
//! let decision = minimax.decide(&board, Player::X);
//! assert_eq!(decision.best_move, Some(Coord::new(0, 2)));
//! assert!(decision.score.favors_x());
//! ```

mod config;
mod search;

pub use config::{MinimaxConfig, Scoring};
pub use search::{Decision, Minimax};
