//! Oxo Core - Shared vocabulary for the tic-tac-toe engine
//!
//! This crate provides the error taxonomy and the `Score` type used by the
//! board model and the minimax searcher.
//!
//! # Types
//!
//! - [`EngineError`] - Everything that can go wrong applying a move or
//!   parsing a board
//! - [`Score`] - Game-theoretic value of a position, totally ordered

mod error;
mod score;

pub use error::{EngineError, Result};
pub use score::Score;
