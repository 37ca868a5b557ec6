//! Strongly-typed wrappers for board concepts
//!
//! Sides, board positions and moves. Positions are `(i, j)` pairs where `i`
//! is the column and `j` the row. Every position handed to or received from a
//! strategy is expressed in that player's own frame: both players see their
//! home corner at (0,0).

use crate::{Result, TideError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width and height of the board
pub const BOARD_SIZE: u8 = 5;

/// Index on either axis meaning "pushed off the far edge"
pub const OFF_BOARD: u8 = 5;

/// Cells where a freshly drawn card may be placed
pub const ENTRY_CELLS: [Pos; 3] = [Pos::new(0, 0), Pos::new(1, 0), Pos::new(0, 1)];

/// Cells that score for the mover when reached (the opponent's entry cells)
pub const GOAL_CELLS: [Pos; 3] = [Pos::new(4, 4), Pos::new(3, 4), Pos::new(4, 3)];

/// One of the two players
///
/// Ebb is player 0 and plays in the absolute frame. Flow is player 1 and sees
/// the board mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    Ebb,
    Flow,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Ebb, Side::Flow];

    pub fn from_index(index: u8) -> Result<Self> {
        match index {
            0 => Ok(Side::Ebb),
            1 => Ok(Side::Flow),
            _ => Err(TideError::InvalidSide(index)),
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::Ebb => 0,
            Side::Flow => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Ebb => Side::Flow,
            Side::Flow => Side::Ebb,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Ebb => write!(f, "Ebb"),
            Side::Flow => write!(f, "Flow"),
        }
    }
}

/// Mirror a coordinate pair through the board centre.
///
/// Defined on [0,5] x [0,5]. The off-board index 5 maps to -1, which is still
/// off the (opposite) edge, so the transform is only an involution on real
/// cells.
pub const fn mirror(i: i8, j: i8) -> (i8, i8) {
    (4 - i, 4 - j)
}

/// A position, either on the board or one step past its far edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub i: u8,
    pub j: u8,
}

impl Pos {
    pub const fn new(i: u8, j: u8) -> Self {
        Pos { i, j }
    }

    pub fn is_on_board(self) -> bool {
        self.i < BOARD_SIZE && self.j < BOARD_SIZE
    }

    pub fn is_off_board(self) -> bool {
        self.i == OFF_BOARD || self.j == OFF_BOARD
    }

    /// The same cell seen from the other player's frame.
    ///
    /// Only meaningful for on-board cells.
    pub fn mirrored(self) -> Pos {
        debug_assert!(self.is_on_board(), "mirrored() on off-board position {self}");
        let (i, j) = mirror(self.i as i8, self.j as i8);
        Pos::new(i as u8, j as u8)
    }

    /// Translate a position in `side`'s frame into absolute board coordinates
    pub fn to_absolute(self, side: Side) -> Pos {
        match side {
            Side::Ebb => self,
            Side::Flow => self.mirrored(),
        }
    }

    /// All 25 board cells, row by row
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..BOARD_SIZE).flat_map(|j| (0..BOARD_SIZE).map(move |i| Pos::new(i, j)))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.i, self.j)
    }
}

/// Where a moved card ends up, judged in the mover's frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    /// Reached one of the goal cells: scores for the mover
    Goal,
    /// Pushed off the board elsewhere: scores for the opponent
    Exit,
    /// Stays on the board at this (mover-relative) cell
    Cell(Pos),
}

/// A single push of a card one step right (column + 1) or down (row + 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Move {
    start: Pos,
    end: Pos,
}

impl Move {
    /// Build a move, checking that `end` is exactly one increasing step from
    /// `start` along one axis
    pub fn new(start: Pos, end: Pos) -> Result<Self> {
        if !start.is_on_board() {
            return Err(TideError::InvalidMove(format!("start {start} is not on the board")));
        }
        if end.i > OFF_BOARD || end.j > OFF_BOARD {
            return Err(TideError::InvalidMove(format!("end {end} is out of range")));
        }
        let right = end.i == start.i + 1 && end.j == start.j;
        let down = end.j == start.j + 1 && end.i == start.i;
        if !(right || down) {
            return Err(TideError::InvalidMove(format!(
                "{start} -> {end} is not a single step right or down"
            )));
        }
        Ok(Move { start, end })
    }

    /// Build a move from raw indices
    pub fn create(si: u8, sj: u8, ei: u8, ej: u8) -> Result<Self> {
        Move::new(Pos::new(si, sj), Pos::new(ei, ej))
    }

    /// Push along the row (column index increases)
    pub(crate) fn step_right(start: Pos) -> Self {
        Move {
            start,
            end: Pos::new(start.i + 1, start.j),
        }
    }

    /// Push along the column (row index increases)
    pub(crate) fn step_down(start: Pos) -> Self {
        Move {
            start,
            end: Pos::new(start.i, start.j + 1),
        }
    }

    pub fn start(&self) -> Pos {
        self.start
    }

    pub fn end(&self) -> Pos {
        self.end
    }

    /// Classify the destination. Goal cells take precedence over exits.
    pub fn landing(&self) -> Landing {
        if GOAL_CELLS.contains(&self.end) {
            Landing::Goal
        } else if self.end.is_off_board() {
            Landing::Exit
        } else {
            Landing::Cell(self.end)
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}>{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_basics() {
        assert_eq!(Side::Ebb.index(), 0);
        assert_eq!(Side::Flow.index(), 1);
        assert_eq!(Side::Ebb.opponent(), Side::Flow);
        assert_eq!(Side::from_index(1).unwrap(), Side::Flow);
        assert!(matches!(Side::from_index(2), Err(TideError::InvalidSide(2))));
    }

    #[test]
    fn test_mirror_is_involution_on_board() {
        for pos in Pos::all() {
            assert_eq!(pos.mirrored().mirrored(), pos);
        }
        assert_eq!(Pos::new(0, 0).mirrored(), Pos::new(4, 4));
        assert_eq!(Pos::new(1, 0).mirrored(), Pos::new(3, 4));
    }

    #[test]
    fn test_mirror_off_edge() {
        assert_eq!(mirror(5, 2), (-1, 2));
        assert_eq!(mirror(4, 5), (0, -1));
    }

    #[test]
    fn test_entry_cells_mirror_to_goal_cells() {
        let mirrored: Vec<Pos> = ENTRY_CELLS.iter().map(|p| p.mirrored()).collect();
        assert_eq!(mirrored, GOAL_CELLS.to_vec());
    }

    #[test]
    fn test_move_validation() {
        assert!(Move::create(0, 1, 1, 1).is_ok());
        assert!(Move::create(4, 2, 5, 2).is_ok());
        assert!(Move::create(2, 4, 2, 5).is_ok());

        // Diagonal, backwards, two steps, off-board start
        assert!(Move::create(0, 0, 1, 1).is_err());
        assert!(Move::create(2, 2, 1, 2).is_err());
        assert!(Move::create(0, 0, 2, 0).is_err());
        assert!(Move::create(5, 0, 5, 1).is_err());
        assert!(Move::create(0, 0, 0, 0).is_err());
    }

    #[test]
    fn test_landing() {
        assert_eq!(Move::create(3, 4, 4, 4).unwrap().landing(), Landing::Goal);
        assert_eq!(Move::create(4, 2, 4, 3).unwrap().landing(), Landing::Goal);
        assert_eq!(Move::create(4, 1, 5, 1).unwrap().landing(), Landing::Exit);
        assert_eq!(Move::create(4, 4, 4, 5).unwrap().landing(), Landing::Exit);
        assert_eq!(
            Move::create(0, 1, 1, 1).unwrap().landing(),
            Landing::Cell(Pos::new(1, 1))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::create(0, 1, 1, 1).unwrap().to_string(), "0,1>1,1");
        assert_eq!(Side::Flow.to_string(), "Flow");
    }
}
