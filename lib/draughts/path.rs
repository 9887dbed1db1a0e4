use crate::draughts::{ParseSquareError, Square};
use derive_more::{Deref, Display, Error, From};
use proptest::{collection::vec, prelude::*};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use test_strategy::Arbitrary;

/// A move as the ordered sequence of [`Square`]s the moving piece visits.
///
/// The first square holds the piece, every following square is where it lands
/// after each step or capture, so a simple step has two squares and a chain of
/// `n` captures has `n + 1`.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Deref, From, Arbitrary, Deserialize, Serialize)]
#[serde(into = "String", try_from = "String")]
pub struct Path(#[strategy(vec(any::<Square>(), 0..=4))] Vec<Square>);

impl Path {
    /// The square the moving piece starts from.
    pub fn whence(&self) -> Option<Square> {
        self.first().copied()
    }

    /// The square the moving piece ends on.
    pub fn whither(&self) -> Option<Square> {
        self.last().copied()
    }

    /// An iterator over consecutive pairs of squares.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = (Square, Square)> + '_ {
        self.windows(2).map(|w| (w[0], w[1]))
    }
}

impl<const N: usize> From<[Square; N]> for Path {
    fn from(squares: [Square; N]) -> Self {
        Path(squares.into())
    }
}

impl FromIterator<Square> for Path {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, sq) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }

            fmt::Display::fmt(sq, f)?;
        }

        Ok(())
    }
}

/// The reason why parsing [`Path`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse path, expected squares separated by `-`")]
pub struct ParsePathError(ParseSquareError);

impl FromStr for Path {
    type Err = ParsePathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Path::default());
        }

        Ok(s.split('-').map(str::parse).collect::<Result<_, _>>()?)
    }
}

impl From<Path> for String {
    fn from(path: Path) -> Self {
        path.to_string()
    }
}

impl TryFrom<String> for Path {
    type Error = ParsePathError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
