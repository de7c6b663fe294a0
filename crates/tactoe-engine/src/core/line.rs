/// A cell coordinate on the board.
///
/// Both `row` and `col` must be in `0..3`. Out-of-range coordinates are a
/// programming error and cause a panic when used to index a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const CENTER: Self = Self::new(1, 1);
    pub const CORNERS: [Self; 4] = [
        Self::new(0, 0),
        Self::new(0, 2),
        Self::new(2, 0),
        Self::new(2, 2),
    ];

    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns all 9 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..3).flat_map(|row| (0..3).map(move |col| Self::new(row, col)))
    }
}

/// One of the 8 winning triples.
pub type Line = [Position; 3];

const fn row(r: usize) -> Line {
    [Position::new(r, 0), Position::new(r, 1), Position::new(r, 2)]
}

const fn column(c: usize) -> Line {
    [Position::new(0, c), Position::new(1, c), Position::new(2, c)]
}

/// Every line on the board: 3 rows, 3 columns, then the 2 diagonals.
pub const LINES: [Line; 8] = [
    row(0),
    row(1),
    row(2),
    column(0),
    column(1),
    column(2),
    [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
    [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)],
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_all_positions_row_major() {
        let all: Vec<_> = Position::all().collect();
        assert_eq!(all.len(), 9);
        assert_eq!(all[0], Position::new(0, 0));
        assert_eq!(all[1], Position::new(0, 1));
        assert_eq!(all[3], Position::new(1, 0));
        assert_eq!(all[8], Position::new(2, 2));
    }

    #[test]
    fn test_lines_are_distinct() {
        let unique: HashSet<_> = LINES.iter().collect();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn test_cell_membership_counts() {
        // center lies on 4 lines, corners on 3, edges on 2
        let count = |pos: Position| LINES.iter().filter(|line| line.contains(&pos)).count();
        assert_eq!(count(Position::CENTER), 4);
        for corner in Position::CORNERS {
            assert_eq!(count(corner), 3);
        }
        assert_eq!(count(Position::new(0, 1)), 2);
        assert_eq!(count(Position::new(1, 0)), 2);
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(2, 1).to_string(), "(2, 1)");
    }
}
