//! Positional features measured from one mark's perspective.
//!
//! Each feature maps a `(board, mark)` pair to a non-negative count. The
//! evaluator multiplies these counts by per-feature weights; nothing is
//! normalized, so the weights alone set the scale.
//!
//! | Index | Feature                   | Counts                                        |
//! |-------|---------------------------|-----------------------------------------------|
//! | 0     | [`CornerCount`]           | corners holding the mark                      |
//! | 1     | [`CenterCount`]           | 1 if the center holds the mark                |
//! | 2     | [`LosingLineCount`]       | lines completed by the opponent               |
//! | 3     | [`WinningLineCount`]      | lines completed by the mark                   |
//! | 4     | [`NearCompleteLineCount`] | lines with two of the mark and one empty cell |
//! | 5     | [`NearLosingLineCount`]   | lines with none of the mark and one empty cell|
//!
//! The order is fixed and is the order of weight vectors everywhere in the
//! workspace.
//!
//! [`CornerCount`]: BoardFeature::CornerCount
//! [`CenterCount`]: BoardFeature::CenterCount
//! [`LosingLineCount`]: BoardFeature::LosingLineCount
//! [`WinningLineCount`]: BoardFeature::WinningLineCount
//! [`NearCompleteLineCount`]: BoardFeature::NearCompleteLineCount
//! [`NearLosingLineCount`]: BoardFeature::NearLosingLineCount

use serde::{Deserialize, Serialize};
use tactoe_engine::{Board, Mark, Position, outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardFeature {
    CornerCount,
    CenterCount,
    LosingLineCount,
    WinningLineCount,
    NearCompleteLineCount,
    NearLosingLineCount,
}

impl BoardFeature {
    pub const COUNT: usize = 6;

    /// All features in weight-vector order.
    pub const ALL: [Self; Self::COUNT] = [
        BoardFeature::CornerCount,
        BoardFeature::CenterCount,
        BoardFeature::LosingLineCount,
        BoardFeature::WinningLineCount,
        BoardFeature::NearCompleteLineCount,
        BoardFeature::NearLosingLineCount,
    ];

    /// Position of this feature in a weight vector.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            BoardFeature::CornerCount => "corner_count",
            BoardFeature::CenterCount => "center_count",
            BoardFeature::LosingLineCount => "losing_line_count",
            BoardFeature::WinningLineCount => "winning_line_count",
            BoardFeature::NearCompleteLineCount => "near_complete_line_count",
            BoardFeature::NearLosingLineCount => "near_losing_line_count",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            BoardFeature::CornerCount => "Corner Occupancy",
            BoardFeature::CenterCount => "Center Occupancy",
            BoardFeature::LosingLineCount => "Opponent Completed Lines",
            BoardFeature::WinningLineCount => "Own Completed Lines",
            BoardFeature::NearCompleteLineCount => "Own Near-Complete Lines",
            BoardFeature::NearLosingLineCount => "Opponent Near-Complete Lines",
        }
    }

    /// Measures this feature on `board` from `mark`'s perspective.
    #[must_use]
    pub fn extract(self, board: &Board, mark: Mark) -> u32 {
        match self {
            BoardFeature::CornerCount => {
                let corners = Position::CORNERS
                    .iter()
                    .filter(|pos| board.cell(**pos).is_mark(mark))
                    .count();
                u32::try_from(corners).unwrap_or(u32::MAX)
            }
            BoardFeature::CenterCount => u32::from(board.cell(Position::CENTER).is_mark(mark)),
            BoardFeature::LosingLineCount => outcome::losing_count(board, mark),
            BoardFeature::WinningLineCount => outcome::winning_count(board, mark),
            BoardFeature::NearCompleteLineCount => outcome::near_complete_count(board, mark),
            BoardFeature::NearLosingLineCount => outcome::near_losing_count(board, mark),
        }
    }
}

/// Measures every feature, in weight-vector order.
#[must_use]
pub fn extract_all(board: &Board, mark: Mark) -> [u32; BoardFeature::COUNT] {
    BoardFeature::ALL.map(|feature| feature.extract(board, mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_indices_follow_all_order() {
        for (i, feature) in BoardFeature::ALL.into_iter().enumerate() {
            assert_eq!(feature.index(), i);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<_> = BoardFeature::ALL.iter().map(|f| f.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), BoardFeature::COUNT);
    }

    #[test]
    fn test_empty_board_features_are_zero() {
        for mark in Mark::ALL {
            assert_eq!(extract_all(&Board::EMPTY, mark), [0; BoardFeature::COUNT]);
        }
    }

    #[test]
    fn test_corner_and_center() {
        let b = board("X.O.X...X");
        assert_eq!(BoardFeature::CornerCount.extract(&b, Mark::X), 2);
        assert_eq!(BoardFeature::CornerCount.extract(&b, Mark::O), 1);
        assert_eq!(BoardFeature::CenterCount.extract(&b, Mark::X), 1);
        assert_eq!(BoardFeature::CenterCount.extract(&b, Mark::O), 0);
    }

    #[test]
    fn test_line_features_use_own_perspective() {
        // X│X│
        // ─┼─┼─
        //  │O│
        // ─┼─┼─
        //  │ │O
        let b = board("XX..O...O");
        // [corner, center, losing, winning, near complete, near losing]
        // X's open top row is O's only blocking threat
        assert_eq!(extract_all(&b, Mark::X), [1, 0, 0, 0, 1, 0]);
        // O's diagonal is already blocked at the top-left corner
        assert_eq!(extract_all(&b, Mark::O), [1, 1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_completed_lines() {
        let b = board("XXXOO....");
        assert_eq!(BoardFeature::WinningLineCount.extract(&b, Mark::X), 1);
        assert_eq!(BoardFeature::LosingLineCount.extract(&b, Mark::O), 1);
        assert_eq!(BoardFeature::LosingLineCount.extract(&b, Mark::X), 0);
    }

    #[test]
    fn test_serde_uses_snake_case_ids() {
        for feature in BoardFeature::ALL {
            let json = serde_json::to_string(&feature).unwrap();
            assert_eq!(json, format!("\"{}\"", feature.id()));
        }
    }
}
