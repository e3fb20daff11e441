use thiserror::Error;

/// Errors that can occur in the engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Board dimensions must be at least 1x1")]
    InvalidDimensions,

    #[error("Coordinate ({row}, {col}) is out of bounds")]
    OutOfBounds { row: i16, col: i16 },

    #[error("Cell ({row}, {col}) is already occupied")]
    CellOccupied { row: u8, col: u8 },

    #[error("Invalid board notation: {0}")]
    InvalidNotation(String),
}

/// Convenience Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
