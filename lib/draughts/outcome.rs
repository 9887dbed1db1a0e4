use crate::draughts::Color;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use test_strategy::Arbitrary;

/// One of the possible outcomes of a game of draughts.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary, Deserialize, Serialize)]
#[serde(deny_unknown_fields, rename_all = "lowercase")]
pub enum Outcome {
    /// The side of this [`Color`] has no piece left that can move.
    #[display(fmt = "the {} player cannot move", _0)]
    Immobilized(Color),

    #[display(fmt = "the {} player lost on time", _0)]
    LossOnTime(Color),

    /// The side of this [`Color`] attempted an illegal move.
    #[display(fmt = "the {} player forfeited by an illegal move", _0)]
    Forfeit(Color),

    #[display(fmt = "draw by lack of progress")]
    DrawByBoringMoves,
}

impl Outcome {
    /// Whether the outcome is a draw and neither side has won.
    pub fn is_draw(&self) -> bool {
        !self.is_decisive()
    }

    /// Whether the outcome is decisive and one of the sides has won.
    pub fn is_decisive(&self) -> bool {
        use Outcome::*;
        matches!(self, Immobilized(_) | LossOnTime(_) | Forfeit(_))
    }

    /// The winning side, if the outcome is [decisive](`Self::is_decisive`).
    pub fn winner(&self) -> Option<Color> {
        match *self {
            Outcome::Immobilized(c) => Some(!c),
            Outcome::LossOnTime(c) => Some(!c),
            Outcome::Forfeit(c) => Some(!c),
            Outcome::DrawByBoringMoves => None,
        }
    }
}
