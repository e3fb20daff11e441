use crate::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A board coordinate: (row, column), both zero-based.
///
/// Row-major ordering (row ascending, then column ascending) is the
/// canonical scan order everywhere in the engine; it is also the minimax
/// tie-break order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Create a coordinate. Bounds are the board's concern, not the
    /// coordinate's.
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// The row (zero-based).
    pub const fn row(self) -> u8 {
        self.row
    }

    /// The column (zero-based).
    pub const fn col(self) -> u8 {
        self.col
    }

    /// The signed coordinates `steps` cells along `dir` from here.
    /// May land outside any board; callers bound-check the result.
    pub fn stepped(self, dir: Direction, steps: i16) -> (i16, i16) {
        let (dr, dc) = dir.delta();
        (
            self.row as i16 + dr as i16 * steps,
            self.col as i16 + dc as i16 * steps,
        )
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let c = Coord::new(1, 2);
        assert_eq!(c.row(), 1);
        assert_eq!(c.col(), 2);
    }

    #[test]
    fn test_stepped() {
        let c = Coord::new(1, 1);
        assert_eq!(c.stepped(Direction::Right, 1), (1, 2));
        assert_eq!(c.stepped(Direction::UpLeft, 2), (-1, -1));
        assert_eq!(c.stepped(Direction::DownRight, 2), (3, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Coord::new(0, 2)), "(0, 2)");
    }
}
