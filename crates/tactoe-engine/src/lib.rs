//! Board model and game rules for 3×3 tic-tac-toe.
//!
//! This crate holds everything the evaluator and training layers need to know
//! about the game itself:
//!
//! - [`Mark`], [`Cell`] and [`Position`] - what can occupy a cell and where
//! - [`Board`] - a value-type 3×3 grid with move application, legal-move
//!   enumeration, symmetry primitives and canonicalization
//! - [`LINES`] - the 8 winning triples (3 rows, 3 columns, 2 diagonals)
//! - [`outcome`] - termination detection and per-line counting
//!
//! # Copy-on-Branch
//!
//! [`Board`] is `Copy`. Search code never mutates a board it does not own; it
//! explores a candidate move with [`Board::with_move`], which returns a fresh
//! board and leaves the original untouched.
//!
//! # Example
//!
//! ```
//! use tactoe_engine::{Board, Mark, Position, outcome};
//!
//! let mut board = Board::EMPTY;
//! board.place(Position::new(0, 0), Mark::X)?;
//! board.place(Position::new(1, 1), Mark::X)?;
//! board.place(Position::new(2, 2), Mark::X)?;
//!
//! assert!(outcome::is_terminal(&board));
//! assert_eq!(outcome::winner(&board), Some(Mark::X));
//! # Ok::<(), tactoe_engine::IllegalMoveError>(())
//! ```

pub use self::core::*;

pub mod core;
pub mod outcome;

/// Attempted to place a mark on a cell that is already occupied.
///
/// Correct legal-move enumeration never produces such a move, so this error
/// always indicates a logic bug in the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("illegal move: cell {position} is already occupied")]
pub struct IllegalMoveError {
    pub position: Position,
}

/// Failed to reconstruct a board from its row-major mark characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    #[display("expected {} cells, found {len}", Board::CELL_COUNT)]
    InvalidLength { len: usize },
    #[display("invalid mark character {ch:?} at index {index}")]
    InvalidMark { ch: char, index: usize },
}
