//! Win detection.
//!
//! A line is detected through a cell by probing each of the 8 directions:
//! the cells at distance 1 and distance 2 along the direction vector are
//! tested independently against the origin's occupant, out-of-bounds probes
//! are skipped rather than aborting the direction, and 2 matches complete
//! the line. On a 3x3 board distance 2 is edge to edge, so a completed line
//! is exactly 3 in a row.

use crate::{Board, Coord, Direction, Player};

/// A completed line: who won, the cell the scan reported, and the direction
/// of the line through that cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WinLine {
    pub player: Player,
    pub origin: Coord,
    pub direction: Direction,
}

impl WinLine {
    /// The far endpoint of the line, two steps from the origin. The UI
    /// layer draws its strike-through from `origin` to here.
    pub fn end(&self) -> Coord {
        let (row, col) = self.origin.stepped(self.direction, 2);
        Coord::new(row as u8, col as u8)
    }
}

/// Terminal status of a board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    InProgress,
    Won(WinLine),
    Draw,
}

impl GameStatus {
    /// True iff the game is over (won or drawn).
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Scan the 8 directions from `origin` and return the first that completes
/// a line for the occupant there. Returns None for an empty cell.
pub fn line_through_cell(board: &Board, origin: Coord) -> Option<Direction> {
    let occupant = board.get(origin)?;

    for dir in Direction::ALL {
        let mut count = 0;
        for step in 1..=2 {
            let (row, col) = origin.stepped(dir, step);
            // Out-of-bounds probes are skipped, not a scan abort.
            let Some(coord) = board.coord_at(row, col) else {
                continue;
            };
            if board.get(coord) == Some(occupant) {
                count += 1;
            }
        }
        if count >= 2 {
            return Some(dir);
        }
    }
    None
}

/// Find the winner, if any. Cells are scanned in row-major order; every
/// cell on a completed line reports it, so scan order only decides which
/// (origin, direction) pair is returned, never whether a win is found.
pub fn winner(board: &Board) -> Option<WinLine> {
    for origin in board.coords() {
        let Some(player) = board.get(origin) else {
            continue;
        };
        if let Some(direction) = line_through_cell(board, origin) {
            return Some(WinLine {
                player,
                origin,
                direction,
            });
        }
    }
    None
}

/// Terminal status: a winner, a full board with no winner (draw), or
/// neither (game continues).
pub fn status(board: &Board) -> GameStatus {
    match winner(board) {
        Some(line) => GameStatus::Won(line),
        None if board.is_full() => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_on_empty_board() {
        let board = Board::standard();
        assert_eq!(winner(&board), None);
        assert_eq!(status(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_no_winner_with_scattered_marks() {
        let board = Board::from_notation("X.O/.X./O..").unwrap();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_top_row_win() {
        let board = Board::from_notation("XXX/OO./...").unwrap();
        let line = winner(&board).expect("X completed the top row");

        assert_eq!(line.player, Player::X);
        // Row-major scan reports the leftmost cell; Right is first in
        // direction order.
        assert_eq!(line.origin, Coord::new(0, 0));
        assert_eq!(line.direction, Direction::Right);
        assert_eq!(line.end(), Coord::new(0, 2));
    }

    #[test]
    fn test_column_win() {
        let board = Board::from_notation("OX./OX./O..").unwrap();
        let line = winner(&board).expect("O completed the left column");

        assert_eq!(line.player, Player::O);
        assert_eq!(line.origin, Coord::new(0, 0));
        assert_eq!(line.direction, Direction::Down);
        assert_eq!(line.end(), Coord::new(2, 0));
    }

    #[test]
    fn test_main_diagonal_win() {
        let board = Board::from_notation("OXX/.O./X.O").unwrap();
        let line = winner(&board).expect("O completed the main diagonal");

        assert_eq!(line.player, Player::O);
        assert_eq!(line.origin, Coord::new(0, 0));
        assert_eq!(line.direction, Direction::DownRight);
        assert_eq!(line.end(), Coord::new(2, 2));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = Board::from_notation("O.X/.XO/X..").unwrap();
        let line = winner(&board).expect("X completed the anti-diagonal");

        assert_eq!(line.player, Player::X);
        assert_eq!(line.origin, Coord::new(0, 2));
        assert_eq!(line.direction, Direction::DownLeft);
        assert_eq!(line.end(), Coord::new(2, 0));
    }

    #[test]
    fn test_line_through_interior_cell() {
        let board = Board::from_notation("XXX/OO./...").unwrap();
        // From (0,1), Right and Left each match at distance 1 only, so the
        // middle of a row never reaches the count-2 threshold itself; the
        // endpoint cells carry the report.
        assert_eq!(line_through_cell(&board, Coord::new(0, 1)), None);
        // Both endpoints report it.
        assert_eq!(
            line_through_cell(&board, Coord::new(0, 0)),
            Some(Direction::Right)
        );
        assert_eq!(
            line_through_cell(&board, Coord::new(0, 2)),
            Some(Direction::Left)
        );
    }

    #[test]
    fn test_line_through_empty_cell_is_none() {
        let board = Board::from_notation("XXX/OO./...").unwrap();
        assert_eq!(line_through_cell(&board, Coord::new(2, 2)), None);
    }

    #[test]
    fn test_draw_status() {
        let board = Board::from_notation("XOX/XXO/OXO").unwrap();
        assert_eq!(winner(&board), None);
        assert_eq!(status(&board), GameStatus::Draw);
        assert!(status(&board).is_terminal());
    }

    #[test]
    fn test_won_status_is_terminal() {
        let board = Board::from_notation("XXX/OO./...").unwrap();
        assert!(status(&board).is_terminal());
    }
}
