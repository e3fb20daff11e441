//! Oxo Board - Board model and win detection
//!
//! This crate implements the grid the game is played on and the rule that
//! decides when a line is complete. It is pure state and queries: no I/O,
//! no presentation, no search.
//!
//! The win rule is deliberately the reference rule, not a generic
//! N-in-a-row scan: for each of the 8 directions through a cell, the cells
//! at distance 1 and distance 2 are tested independently and a count of 2
//! matches completes a line. On a 3x3 board distance 2 spans edge to edge,
//! so this is exactly 3 in a row.

mod board;
mod coord;
mod direction;
mod player;
mod win;

pub use board::Board;
pub use coord::Coord;
pub use direction::Direction;
pub use player::Player;
pub use win::{line_through_cell, status, winner, GameStatus, WinLine};
