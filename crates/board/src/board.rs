use crate::{Coord, Player};
use oxo_core::{EngineError, Result};
use std::fmt;

/// The playing grid: an R x C board of cells, row-major.
///
/// Dimensions are fixed at creation. The reference game is 3x3
/// ([`Board::standard`]); the model generalizes, but the win rule's
/// "3 in a row" assumption only holds its usual meaning at 3x3.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Board {
    rows: u8,
    cols: u8,
    /// Row-major cells: index = row * cols + col.
    cells: Vec<Option<Player>>,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidDimensions` if either dimension is 0.
    pub fn new(rows: u8, cols: u8) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(EngineError::InvalidDimensions);
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![None; rows as usize * cols as usize],
        })
    }

    /// The standard empty 3x3 board.
    pub fn standard() -> Self {
        Self::new(3, 3).expect("3x3 dimensions are valid")
    }

    /// Number of rows.
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// True iff the signed coordinates fall on the board.
    pub fn in_bounds(&self, row: i16, col: i16) -> bool {
        row >= 0 && col >= 0 && row < self.rows as i16 && col < self.cols as i16
    }

    /// Bound-check signed coordinates into a `Coord`.
    pub fn coord_at(&self, row: i16, col: i16) -> Option<Coord> {
        if self.in_bounds(row, col) {
            Some(Coord::new(row as u8, col as u8))
        } else {
            None
        }
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row() as usize * self.cols as usize + coord.col() as usize
    }

    /// The occupant of a cell, if any. None for empty or out-of-bounds.
    pub fn get(&self, coord: Coord) -> Option<Player> {
        if !self.in_bounds(coord.row() as i16, coord.col() as i16) {
            return None;
        }
        self.cells[self.index(coord)]
    }

    /// True iff the cell is in-bounds and empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.in_bounds(coord.row() as i16, coord.col() as i16)
            && self.cells[self.index(coord)].is_none()
    }

    /// Apply a move, marking the cell for `player`.
    ///
    /// # Errors
    /// Returns `OutOfBounds` or `CellOccupied`; the board is unchanged on
    /// error. This is the engine's documented invalid-move policy: signal
    /// the caller rather than silently no-op.
    pub fn apply(&mut self, coord: Coord, player: Player) -> Result<()> {
        if !self.in_bounds(coord.row() as i16, coord.col() as i16) {
            return Err(EngineError::OutOfBounds {
                row: coord.row() as i16,
                col: coord.col() as i16,
            });
        }
        if !self.is_empty(coord) {
            return Err(EngineError::CellOccupied {
                row: coord.row(),
                col: coord.col(),
            });
        }
        let idx = self.index(coord);
        self.cells[idx] = Some(player);
        Ok(())
    }

    /// Mark a cell without validation. Search-internal fast path; the cell
    /// must be in-bounds and empty.
    pub fn place(&mut self, coord: Coord, player: Player) {
        debug_assert!(self.is_empty(coord));
        let idx = self.index(coord);
        self.cells[idx] = Some(player);
    }

    /// Revert a cell to empty. Undo counterpart of [`Board::place`].
    pub fn clear(&mut self, coord: Coord) {
        debug_assert!(self.get(coord).is_some());
        let idx = self.index(coord);
        self.cells[idx] = None;
    }

    /// All empty coordinates in row-major order.
    pub fn available_moves(&self) -> Vec<Coord> {
        let mut moves = Vec::with_capacity(self.cells.len());
        for row in 0..self.rows {
            for col in 0..self.cols {
                let coord = Coord::new(row, col);
                if self.cells[self.index(coord)].is_none() {
                    moves.push(coord);
                }
            }
        }
        moves
    }

    /// True iff no empty cells remain.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Number of marks on the board.
    pub fn move_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate all coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Coord::new(row, col)))
    }

    /// Parse compact board notation: rows joined by `/`, one of `O`, `X`
    /// or `.` per cell. `"XX./OO./..."` is the 3x3 board with X on (0,0)
    /// and (0,1), O on (1,0) and (1,1).
    ///
    /// # Errors
    /// Returns `InvalidNotation` for ragged rows, unknown characters, or an
    /// empty string.
    pub fn from_notation(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s.split('/').collect();
        if rows.is_empty() || rows[0].is_empty() {
            return Err(EngineError::InvalidNotation("empty board".to_string()));
        }
        let cols = rows[0].chars().count();
        if rows.len() > u8::MAX as usize || cols > u8::MAX as usize {
            return Err(EngineError::InvalidNotation("board too large".to_string()));
        }

        let mut board = Board::new(rows.len() as u8, cols as u8)?;
        for (r, row) in rows.iter().enumerate() {
            if row.chars().count() != cols {
                return Err(EngineError::InvalidNotation(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.chars().count(),
                    cols
                )));
            }
            for (c, ch) in row.chars().enumerate() {
                match ch {
                    '.' => {}
                    _ => match Player::from_char(ch) {
                        Some(player) => board.place(Coord::new(r as u8, c as u8), player),
                        None => {
                            return Err(EngineError::InvalidNotation(format!(
                                "unknown cell character '{}'",
                                ch
                            )))
                        }
                    },
                }
            }
        }
        Ok(board)
    }

    /// The compact notation for this board. Inverse of
    /// [`Board::from_notation`].
    pub fn notation(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.rows as usize);
        for row in 0..self.rows {
            if row > 0 {
                out.push('/');
            }
            for col in 0..self.cols {
                match self.cells[self.index(Coord::new(row, col))] {
                    Some(player) => out.push(player.to_char()),
                    None => out.push('.'),
                }
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f, "{}", "-".repeat(self.cols as usize * 4 - 1))?;
            }
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " | ")?;
                }
                match self.cells[self.index(Coord::new(row, col))] {
                    Some(player) => write!(f, " {} ", player)?,
                    None => write!(f, "   ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
