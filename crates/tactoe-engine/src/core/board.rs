use std::{fmt, str::FromStr};

use arrayvec::ArrayVec;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{IllegalMoveError, ParseBoardError};

use super::{
    line::{Line, Position},
    mark::{Cell, Mark},
};

/// Occupied-cell counts of the four board edges.
///
/// Each edge is a full row or column of 3 cells, so a corner contributes to
/// two edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeOccupancy {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

/// A 3×3 tic-tac-toe grid stored row-major.
///
/// `Board` is a small value type: copying it yields a fully independent board,
/// so speculative moves are explored on copies (see [`Board::with_move`]) and
/// the original is never mutated by search.
///
/// A cell, once marked, is never overwritten; [`Board::place`] reports an
/// [`IllegalMoveError`] instead.
///
/// # Text Forms
///
/// - [`Display`](fmt::Display) renders a human-readable grid.
/// - [`Board::to_notation`] / [`FromStr`] use 9 row-major characters (`X`,
///   `O`, and `.` for empty). Parsing also accepts `' '`, `-` and `_` as
///   empty cells.
///
/// ```
/// use tactoe_engine::{Board, Cell, Mark, Position};
///
/// let board: Board = "X.O.X...O".parse()?;
/// assert_eq!(board.cell(Position::new(0, 2)), Cell::Marked(Mark::O));
/// assert_eq!(board.legal_moves().len(), 5);
/// # Ok::<(), tactoe_engine::ParseBoardError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Cell; Board::SIZE]; Board::SIZE],
}

impl Board {
    pub const SIZE: usize = 3;
    pub const CELL_COUNT: usize = Self::SIZE * Self::SIZE;

    pub const EMPTY: Self = Self {
        cells: [[Cell::Empty; Self::SIZE]; Self::SIZE],
    };

    #[must_use]
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Returns the 3 cells of a line, in line order.
    #[must_use]
    pub fn line_cells(&self, line: &Line) -> [Cell; 3] {
        line.map(|pos| self.cell(pos))
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; Board::SIZE]> {
        self.cells.iter()
    }

    /// Marks an empty cell.
    ///
    /// Fails without modifying the board if the cell is already occupied.
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), IllegalMoveError> {
        let cell = &mut self.cells[pos.row][pos.col];
        if !cell.is_empty() {
            return Err(IllegalMoveError { position: pos });
        }
        *cell = Cell::Marked(mark);
        Ok(())
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    pub fn with_move(&self, pos: Position, mark: Mark) -> Result<Self, IllegalMoveError> {
        let mut next = *self;
        next.place(pos, mark)?;
        Ok(next)
    }

    /// Returns every empty position in row-major order.
    ///
    /// The order is significant: greedy move selection breaks score ties in
    /// favor of the earliest move.
    #[must_use]
    pub fn legal_moves(&self) -> ArrayVec<Position, { Board::CELL_COUNT }> {
        Position::all()
            .filter(|pos| self.cell(*pos).is_empty())
            .collect()
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_marked())
            .count()
    }

    /// Returns `true` if no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied_count() == Self::CELL_COUNT
    }

    /// Returns the board rotated 90° clockwise.
    #[must_use]
    pub fn rotate_clockwise(&self) -> Self {
        let mut rotated = Self::EMPTY;
        for pos in Position::all() {
            rotated.cells[pos.col][Self::SIZE - 1 - pos.row] = self.cell(pos);
        }
        rotated
    }

    /// Returns the board mirrored left-to-right (columns swapped).
    #[must_use]
    pub fn reflect_horizontal(&self) -> Self {
        let mut reflected = *self;
        for row in &mut reflected.cells {
            row.reverse();
        }
        reflected
    }

    /// Returns the board mirrored top-to-bottom (rows swapped).
    #[must_use]
    pub fn reflect_vertical(&self) -> Self {
        let mut reflected = *self;
        reflected.cells.reverse();
        reflected
    }

    #[must_use]
    pub fn edge_occupancy(&self) -> EdgeOccupancy {
        let last = Self::SIZE - 1;
        let count = |edge: &dyn Fn(usize) -> Position| {
            (0..Self::SIZE)
                .filter(|i| self.cell(edge(*i)).is_marked())
                .count()
        };
        EdgeOccupancy {
            top: count(&|c| Position::new(0, c)),
            bottom: count(&|c| Position::new(last, c)),
            left: count(&|r| Position::new(r, 0)),
            right: count(&|r| Position::new(r, last)),
        }
    }

    /// Returns the canonical representative of this board's reflection class.
    ///
    /// The board is reflected horizontally when its left edge holds more marks
    /// than its right edge, and vertically when its top edge holds more marks
    /// than its bottom edge. Equal counts leave that axis alone. Rotation is
    /// not applied.
    ///
    /// Canonicalization is idempotent.
    ///
    /// ```
    /// use tactoe_engine::Board;
    ///
    /// let board: Board = "X........".parse()?;
    /// let canonical = board.canonicalize();
    /// assert_eq!(canonical.to_notation(), "........X");
    /// assert_eq!(canonical.canonicalize(), canonical);
    /// # Ok::<(), tactoe_engine::ParseBoardError>(())
    /// ```
    #[must_use]
    pub fn canonicalize(&self) -> Self {
        let edges = self.edge_occupancy();
        let mut board = *self;
        if edges.left > edges.right {
            board = board.reflect_horizontal();
        }
        if edges.top > edges.bottom {
            board = board.reflect_vertical();
        }
        board
    }

    /// Returns the 9-character row-major notation (`.` for empty).
    #[must_use]
    pub fn to_notation(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|cell| cell.mark().map_or('.', Mark::as_char))
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f, "─┼─┼─")?;
            }
            writeln!(f, "{}│{}│{}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != Self::CELL_COUNT {
            return Err(ParseBoardError::InvalidLength { len: chars.len() });
        }
        let mut board = Self::EMPTY;
        for (index, (pos, ch)) in Position::all().zip(chars).enumerate() {
            board.cells[pos.row][pos.col] = match ch {
                ' ' | '.' | '-' | '_' => Cell::Empty,
                _ => Mark::from_char(ch)
                    .map(Cell::Marked)
                    .ok_or(ParseBoardError::InvalidMark { ch, index })?,
            };
        }
        Ok(board)
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_notation())
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
