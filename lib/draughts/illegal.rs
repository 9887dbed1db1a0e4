use crate::draughts::{Board, Path};
use derive_more::{Constructor, Display, Error};
use test_strategy::Arbitrary;

/// The rule a rejected move violates.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary, Error)]
pub enum Violation {
    #[display(fmt = "you have to move your own piece")]
    NotOwnPiece,
    #[display(fmt = "you have to move to an empty square")]
    DestinationOccupied,
    #[display(fmt = "you have to capture")]
    CaptureRequired,
    #[display(fmt = "you have to capture an opponent's piece")]
    NoEnemyToCapture,
    #[display(fmt = "you cannot capture more than one piece at once")]
    MultipleCaptureInOneSlide,
    #[display(fmt = "you cannot move over this square")]
    PathBlocked,
    #[display(fmt = "the square is out of reach for this piece")]
    IllegalGeometry,
    #[display(fmt = "you have to move to a new square")]
    EmptyOrTooShortPath,
}

/// Represents an illegal move on a given [`Board`].
///
/// Holds a snapshot of the board as it stood when the offending segment was
/// validated, which already reflects captures made by earlier segments.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, Constructor)]
#[display(fmt = "move `{}` is illegal: {}", path, violation)]
pub struct IllegalMove {
    violation: Violation,
    board: Board,
    path: Path,
    must_capture: bool,
    first_segment: bool,
}

impl IllegalMove {
    /// The rule violated.
    pub fn violation(&self) -> Violation {
        self.violation
    }

    /// The [`Board`] the offending segment was validated against.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The [`Path`] submitted.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the offending segment had to capture.
    pub fn must_capture(&self) -> bool {
        self.must_capture
    }

    /// Whether the offending segment was the first of the move.
    pub fn first_segment(&self) -> bool {
        self.first_segment
    }
}
