//! Heuristic position scoring and greedy move selection for tic-tac-toe.
//!
//! This crate implements the evaluator side of the system in three layers:
//!
//! 1. **Board Features** ([`board_feature`]) - Six positional measurements taken
//!    from one mark's perspective (corner occupancy, center occupancy and four
//!    line counts).
//!
//! 2. **Position Evaluation** ([`competitor`]) - A [`Competitor`](competitor::Competitor)
//!    scores a board as the weighted sum of its feature values.
//!
//! 3. **Move Selection** ([`move_selector`]) - Applies every legal move to a copy
//!    of the board, scores each result and picks the maximum.
//!
//! # Architecture
//!
//! ```text
//! Move Selection (pick best legal move)
//!     ↓ uses
//! Position Evaluation (score = Σ wᵢ × featureᵢ)
//!     ↓ uses
//! Board Features (raw counts for one mark)
//! ```
//!
//! # Example
//!
//! ```
//! use tactoe_engine::{Board, Mark, Position};
//! use tactoe_evaluator::{competitor::Competitor, weights::Weights};
//!
//! // reward completed lines above everything else
//! let competitor = Competitor::new(Weights::from_array([0.0, 0.0, 0.0, 10.0, 0.0, 0.0]), 0);
//!
//! let board: Board = "XX.OO....".parse()?;
//! assert_eq!(competitor.best_move(&board, Mark::X)?, Position::new(0, 2));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Design: Greedy One-Ply Lookahead
//!
//! Move selection looks exactly one move ahead and never models the opponent's
//! reply. It is not minimax; deeper search would change which moves are chosen.
//!
//! # Design: Explicit Perspective
//!
//! Features and scores take the perspective [`Mark`](tactoe_engine::Mark) as an
//! argument instead of storing it, so a single competitor can play either side
//! across matches without any per-match state.

pub mod board_feature;
pub mod competitor;
pub mod move_selector;
pub mod weights;
