//! Greedy one-ply move selection.
//!
//! [`MoveSelector`] applies every legal move to a copy of the board, scores
//! each resulting board with a [`PositionEvaluator`] and picks the maximum.
//! The opponent's reply is never considered.
//!
//! # Tie-Breaking
//!
//! Candidates are scored in [`Board::legal_moves`] order (row-major). When
//! several moves share the highest score, the first one wins. This keeps move
//! choices reproducible for a given board and weight vector.

use std::fmt;

use arrayvec::ArrayVec;
use tactoe_engine::{Board, Mark, Position};

/// Scores a board from one mark's perspective (higher is better).
pub trait PositionEvaluator: fmt::Debug {
    fn evaluate_position(&self, board: &Board, mark: Mark) -> f32;
}

/// Move selection was asked for a board without an empty cell.
///
/// Callers are expected to check for termination first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no legal move left on the board")]
pub struct NoLegalMoveError;

/// A candidate move together with the board it produces and that board's score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMove {
    pub position: Position,
    pub board: Board,
    pub score: f32,
}

/// Selects moves by scoring every legal successor board.
#[derive(Debug)]
pub struct MoveSelector<'a, E: ?Sized> {
    evaluator: &'a E,
}

impl<'a, E> MoveSelector<'a, E>
where
    E: PositionEvaluator + ?Sized,
{
    #[must_use]
    pub fn new(evaluator: &'a E) -> Self {
        Self { evaluator }
    }

    /// Scores every legal move for `mark`, in legal-move order.
    ///
    /// Each candidate is played on a copy; `board` is never modified.
    ///
    /// # Panics
    ///
    /// Never in practice: every candidate comes from
    /// [`Board::legal_moves`], so the target cell is always empty.
    #[must_use]
    pub fn score_moves(
        &self,
        board: &Board,
        mark: Mark,
    ) -> ArrayVec<ScoredMove, { Board::CELL_COUNT }> {
        board
            .legal_moves()
            .into_iter()
            .map(|position| {
                let next = board
                    .with_move(position, mark)
                    .expect("legal moves always target empty cells");
                ScoredMove {
                    position,
                    board: next,
                    score: self.evaluator.evaluate_position(&next, mark),
                }
            })
            .collect()
    }

    /// Returns the highest-scoring move, keeping the earliest one on ties.
    pub fn select_best_move(
        &self,
        board: &Board,
        mark: Mark,
    ) -> Result<ScoredMove, NoLegalMoveError> {
        let mut best: Option<ScoredMove> = None;
        for candidate in self.score_moves(board, mark) {
            if best.is_none_or(|b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }
        best.ok_or(NoLegalMoveError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scores 1.0 when the perspective mark holds `bonus`.
    #[derive(Debug)]
    struct BonusCell {
        bonus: Position,
    }

    impl PositionEvaluator for BonusCell {
        fn evaluate_position(&self, board: &Board, mark: Mark) -> f32 {
            if board.cell(self.bonus).is_mark(mark) {
                1.0
            } else {
                0.0
            }
        }
    }

    #[derive(Debug)]
    struct Flat;

    impl PositionEvaluator for Flat {
        fn evaluate_position(&self, _board: &Board, _mark: Mark) -> f32 {
            0.0
        }
    }

    #[test]
    fn test_score_moves_covers_legal_moves_in_order() {
        let board: Board = "X.O.X...O".parse().unwrap();
        let scored = MoveSelector::new(&Flat).score_moves(&board, Mark::X);
        let positions: Vec<_> = scored.iter().map(|m| m.position).collect();
        assert_eq!(positions, board.legal_moves().to_vec());
        for m in &scored {
            assert!(m.board.cell(m.position).is_mark(Mark::X));
            assert_eq!(m.board.occupied_count(), board.occupied_count() + 1);
        }
    }

    #[test]
    fn test_select_best_move_picks_maximum() {
        let evaluator = BonusCell {
            bonus: Position::new(2, 1),
        };
        let selector = MoveSelector::new(&evaluator);
        let best = selector.select_best_move(&Board::EMPTY, Mark::O).unwrap();
        assert_eq!(best.position, Position::new(2, 1));
        assert!((best.score - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_ties_resolve_to_first_legal_move() {
        let board: Board = "XO.......".parse().unwrap();
        let best = MoveSelector::new(&Flat)
            .select_best_move(&board, Mark::X)
            .unwrap();
        assert_eq!(best.position, Position::new(0, 2));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(
            MoveSelector::new(&Flat).select_best_move(&board, Mark::X),
            Err(NoLegalMoveError)
        );
    }

    #[test]
    fn test_selection_does_not_mutate_board() {
        let board: Board = "X...O....".parse().unwrap();
        let before = board;
        let _ = MoveSelector::new(&Flat).select_best_move(&board, Mark::X);
        assert_eq!(board, before);
    }
}
