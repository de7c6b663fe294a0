//! Weighted heuristic competitors.
//!
//! A [`Competitor`] is a weight vector plus lineage bookkeeping. It scores a
//! board as
//!
//! ```text
//! score = w₀·corner + w₁·center + w₂·losing + w₃·winning + w₄·near_complete + w₅·near_losing
//! ```
//!
//! with every feature measured from the perspective mark passed to the call,
//! and picks moves greedily through [`MoveSelector`].
//!
//! # Remembered Losses
//!
//! After losing a match a competitor may record the board one ply before the
//! opponent's winning move ([`Competitor::remember_loss`]). Positions are stored
//! in canonical form. The set is advisory: scoring and move selection never
//! consult it.

use std::collections::HashSet;

use arrayvec::ArrayVec;
use tactoe_engine::{Board, Mark, Position, outcome};

use crate::{
    board_feature::{self, BoardFeature},
    move_selector::{MoveSelector, NoLegalMoveError, PositionEvaluator, ScoredMove},
    weights::{InvalidWeightsError, Weights},
};

/// A loss was recorded on a board that had already finished.
///
/// The pre-terminal board must be captured before the final move is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cannot remember a loss from a terminal board")]
pub struct PrematureRememberError;

#[derive(Debug, Clone, PartialEq)]
pub struct Competitor {
    weights: Weights,
    generation: usize,
    lost_positions: HashSet<Board>,
}

impl Competitor {
    #[must_use]
    pub fn new(weights: Weights, generation: usize) -> Self {
        Self {
            weights,
            generation,
            lost_positions: HashSet::new(),
        }
    }

    /// Like [`Self::new`], but validates the length of a raw weight slice.
    pub fn from_slice(weights: &[f32], generation: usize) -> Result<Self, InvalidWeightsError> {
        Ok(Self::new(Weights::try_from(weights)?, generation))
    }

    #[must_use]
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Generation in which this competitor was created.
    #[must_use]
    pub fn generation(&self) -> usize {
        self.generation
    }

    #[must_use]
    pub fn lost_positions(&self) -> &HashSet<Board> {
        &self.lost_positions
    }

    /// Returns `true` if `board` is equivalent to a remembered losing position.
    #[must_use]
    pub fn has_lost_from(&self, board: &Board) -> bool {
        self.lost_positions.contains(&board.canonicalize())
    }

    /// Raw feature values of `board` from `mark`'s perspective.
    #[must_use]
    pub fn feature_values(&self, board: &Board, mark: Mark) -> [u32; BoardFeature::COUNT] {
        board_feature::extract_all(board, mark)
    }

    /// Weighted sum of the feature values of `board` for `mark`.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn score(&self, board: &Board, mark: Mark) -> f32 {
        self.feature_values(board, mark)
            .into_iter()
            .zip(self.weights.iter())
            .map(|(value, weight)| value as f32 * weight)
            .sum()
    }

    /// Scores every legal move for `mark`, in legal-move order.
    #[must_use]
    pub fn score_moves(
        &self,
        board: &Board,
        mark: Mark,
    ) -> ArrayVec<ScoredMove, { Board::CELL_COUNT }> {
        MoveSelector::new(self).score_moves(board, mark)
    }

    /// Picks the legal move whose resulting board scores highest for `mark`.
    ///
    /// Ties go to the earliest move in row-major order. Fails on a board with
    /// no empty cell.
    pub fn best_move(&self, board: &Board, mark: Mark) -> Result<Position, NoLegalMoveError> {
        MoveSelector::new(self)
            .select_best_move(board, mark)
            .map(|best| best.position)
    }

    /// Records the canonical form of a board that led to a loss.
    ///
    /// Returns `true` if the position was not already remembered. Fails if
    /// `board` is already terminal.
    pub fn remember_loss(&mut self, board: &Board) -> Result<bool, PrematureRememberError> {
        if outcome::is_terminal(board) {
            return Err(PrematureRememberError);
        }
        Ok(self.lost_positions.insert(board.canonicalize()))
    }
}

impl PositionEvaluator for Competitor {
    fn evaluate_position(&self, board: &Board, mark: Mark) -> f32 {
        self.score(board, mark)
    }
}
