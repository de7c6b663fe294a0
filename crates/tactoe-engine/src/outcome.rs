//! Termination detection and per-line counting.
//!
//! Every function here is a pure function of a [`Board`]. The per-line
//! counters take the perspective of one [`Mark`] and are shared by the
//! termination check and by the evaluator's line features.
//!
//! # Line Counters
//!
//! [`count_lines`] tallies, for each of the 8 [`LINES`], how many cells hold
//! the given mark and how many are empty, and counts the lines whose
//! [`LineTally`] satisfies a predicate. The named counters are:
//!
//! | Counter                 | `mine` | `empty` |
//! |-------------------------|--------|---------|
//! | [`winning_count`]       | 3      | 0       |
//! | [`losing_count`]        | 0      | 0       |
//! | [`near_complete_count`] | 2      | 1       |
//! | [`near_losing_count`]   | 0      | 1       |

use crate::{Board, LINES, Line, Mark};

/// The result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Outcome {
    /// A line was completed by this mark.
    Win(Mark),
    /// The board filled up without a completed line.
    Draw,
}

impl Outcome {
    #[must_use]
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(mark),
            Outcome::Draw => None,
        }
    }
}

/// Per-line cell counts from one mark's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineTally {
    /// Cells holding the perspective mark.
    pub mine: usize,
    /// Empty cells.
    pub empty: usize,
}

impl LineTally {
    #[must_use]
    pub fn of(board: &Board, line: &Line, mark: Mark) -> Self {
        let cells = board.line_cells(line);
        Self {
            mine: cells.iter().filter(|cell| cell.is_mark(mark)).count(),
            empty: cells.iter().filter(|cell| cell.is_empty()).count(),
        }
    }
}

/// Counts the lines whose tally for `mark` satisfies `predicate`.
pub fn count_lines<F>(board: &Board, mark: Mark, predicate: F) -> u32
where
    F: Fn(LineTally) -> bool,
{
    let count = LINES
        .iter()
        .filter(|line| predicate(LineTally::of(board, line, mark)))
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Lines fully occupied by `mark`.
#[must_use]
pub fn winning_count(board: &Board, mark: Mark) -> u32 {
    count_lines(board, mark, |t| t.mine == 3)
}

/// Lines fully occupied without any `mark`, i.e. completed by the opponent.
#[must_use]
pub fn losing_count(board: &Board, mark: Mark) -> u32 {
    count_lines(board, mark, |t| t.mine == 0 && t.empty == 0)
}

/// Lines with two `mark`s and one empty cell.
#[must_use]
pub fn near_complete_count(board: &Board, mark: Mark) -> u32 {
    count_lines(board, mark, |t| t.mine == 2 && t.empty == 1)
}

/// Lines with no `mark` and exactly one empty cell.
#[must_use]
pub fn near_losing_count(board: &Board, mark: Mark) -> u32 {
    count_lines(board, mark, |t| t.mine == 0 && t.empty == 1)
}

/// Returns the mark that completed a line, if any.
///
/// A board reached through legal play holds at most one winning mark; if both
/// marks somehow completed a line, [`Mark::X`] is reported.
#[must_use]
pub fn winner(board: &Board) -> Option<Mark> {
    Mark::ALL
        .into_iter()
        .find(|mark| winning_count(board, *mark) > 0)
}

/// Returns `true` if any line is complete or no empty cell remains.
///
/// Wins and full boards are both reported as terminal; use [`outcome`] to
/// tell them apart.
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Returns the outcome of a terminal board, or `None` while play continues.
#[must_use]
pub fn outcome(board: &Board) -> Option<Outcome> {
    if let Some(mark) = winner(board) {
        return Some(Outcome::Win(mark));
    }
    board.is_full().then_some(Outcome::Draw)
}
