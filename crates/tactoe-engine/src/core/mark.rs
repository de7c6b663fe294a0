use std::fmt;

/// A player's symbol.
///
/// [`Mark::X`] always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark of the player who moves first.
    pub const FIRST: Self = Mark::X;
    pub const ALL: [Self; 2] = [Mark::X, Mark::O];

    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// Parses a mark character, accepting either case.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The state of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    /// Returns the occupying mark, if any.
    #[must_use]
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    #[must_use]
    pub fn is_mark(self, mark: Mark) -> bool {
        self == Cell::Marked(mark)
    }

    #[must_use]
    pub fn as_char(self) -> char {
        self.mark().map_or(' ', Mark::as_char)
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Marked(mark)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
