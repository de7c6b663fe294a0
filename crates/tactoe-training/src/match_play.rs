//! Playing a single greedy game between two competitors.

use arrayvec::ArrayVec;
use tactoe_engine::{
    Board, IllegalMoveError, Mark, Position,
    outcome::{self, Outcome},
};
use tactoe_evaluator::{
    competitor::{Competitor, PrematureRememberError},
    move_selector::NoLegalMoveError,
};

/// A match was asked to start from a board that is already terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("the game on this board is already over")]
pub struct GameOverError;

/// A match was aborted by a sequencing bug or a finished start board.
///
/// Apart from [`MatchError::GameOver`], none of these can occur when
/// legal-move enumeration and the game loop are correct; they are propagated
/// so that such bugs surface instead of being hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum MatchError {
    #[display("{_0}")]
    GameOver(GameOverError),
    #[display("{_0}")]
    IllegalMove(IllegalMoveError),
    #[display("{_0}")]
    NoLegalMove(NoLegalMoveError),
    #[display("{_0}")]
    PrematureRemember(PrematureRememberError),
}

/// Which competitor of a match moved first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    #[must_use]
    pub fn mark(self) -> Mark {
        match self {
            Seat::First => Mark::FIRST,
            Seat::Second => Mark::FIRST.opponent(),
        }
    }

    #[must_use]
    pub fn of_mark(mark: Mark) -> Self {
        if mark == Mark::FIRST {
            Seat::First
        } else {
            Seat::Second
        }
    }

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// Everything that happened in one finished match.
#[derive(Debug, Clone)]
pub struct MatchRecord {
    pub outcome: Outcome,
    pub moves: ArrayVec<Position, { Board::CELL_COUNT }>,
    pub final_board: Board,
    /// The board just before the final move.
    pub pre_terminal_board: Board,
}

impl MatchRecord {
    /// The seat that completed a line, or `None` for a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        self.outcome.winner().map(Seat::of_mark)
    }

    /// The seat that lost, or `None` for a draw.
    #[must_use]
    pub fn loser(&self) -> Option<Seat> {
        self.winner().map(Seat::other)
    }
}

/// Plays one game to completion, `first` moving as [`Mark::FIRST`].
///
/// Both sides pick moves with [`Competitor::best_move`] until the board is
/// terminal. The competitors are not modified.
pub fn play_match(first: &Competitor, second: &Competitor) -> Result<MatchRecord, MatchError> {
    play_from(Board::EMPTY, first, second)
}

/// Like [`play_match`], but starting from a non-terminal `board` with
/// [`Mark::FIRST`] to move when the mark counts are equal.
///
/// Fails with [`MatchError::GameOver`] if `board` is already terminal, so a
/// returned `pre_terminal_board` is never terminal itself.
pub fn play_from(
    board: Board,
    first: &Competitor,
    second: &Competitor,
) -> Result<MatchRecord, MatchError> {
    if outcome::is_terminal(&board) {
        return Err(GameOverError.into());
    }
    let mut board = board;
    let mut pre_terminal_board = board;
    let mut moves = ArrayVec::new();
    let mut seat = seat_to_move(&board);

    while !outcome::is_terminal(&board) {
        let player = match seat {
            Seat::First => first,
            Seat::Second => second,
        };
        let mark = seat.mark();
        let position = player.best_move(&board, mark)?;
        pre_terminal_board = board;
        board.place(position, mark)?;
        moves.push(position);
        seat = seat.other();
    }

    // is_terminal just returned true, so an outcome exists
    let outcome = outcome::outcome(&board).unwrap_or(Outcome::Draw);
    Ok(MatchRecord {
        outcome,
        moves,
        final_board: board,
        pre_terminal_board,
    })
}

/// The seat to move on `board`, assuming [`Mark::FIRST`] opened the game.
#[must_use]
pub fn seat_to_move(board: &Board) -> Seat {
    let count = |mark: Mark| {
        board
            .rows()
            .flatten()
            .filter(|cell| cell.is_mark(mark))
            .count()
    };
    if count(Mark::FIRST) > count(Mark::FIRST.opponent()) {
        Seat::Second
    } else {
        Seat::First
    }
}
