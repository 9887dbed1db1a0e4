use crate::draughts::Perspective;
use derive_more::{Display, Error};
use std::{ops::Sub, str::FromStr};
use test_strategy::Arbitrary;

/// A square on the draughts board, addressed by row and column.
///
/// A [`Square`] may lie outside of the board, which lets [`Square::offset`]
/// step past the edges; check with [`Square::is_on_board`] before use.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary)]
#[display(fmt = "{}{}", row, col)]
pub struct Square {
    #[strategy(0..Square::SIZE)]
    row: i8,
    #[strategy(0..Square::SIZE)]
    col: i8,
}

impl Square {
    /// The number of rows and columns on the board.
    pub const SIZE: i8 = 10;

    /// The row farthest from the side to move, where men are crowned.
    pub const LAST_ROW: i8 = Self::SIZE - 1;

    /// Constructs [`Square`] from a pair of row and column.
    #[inline(always)]
    pub const fn new(row: i8, col: i8) -> Self {
        Square { row, col }
    }

    /// This square's row.
    #[inline(always)]
    pub fn row(&self) -> i8 {
        self.row
    }

    /// This square's column.
    #[inline(always)]
    pub fn col(&self) -> i8 {
        self.col
    }

    /// Whether this square lies within the board.
    #[inline(always)]
    pub fn is_on_board(&self) -> bool {
        (0..Self::SIZE).contains(&self.row) && (0..Self::SIZE).contains(&self.col)
    }

    /// Whether this square is one of the dark squares pieces are placed on.
    #[inline(always)]
    pub fn is_dark(&self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// The square `dy` rows and `dx` columns away, which may be off the board.
    #[inline(always)]
    pub fn offset(&self, dy: i8, dx: i8) -> Self {
        Square::new(self.row + dy, self.col + dx)
    }

    /// The square halfway to `other`, rounding towards zero.
    ///
    /// Only meaningful if `other` is two steps away along a diagonal.
    #[inline(always)]
    pub fn midpoint(&self, other: Square) -> Self {
        Square::new((self.row + other.row) / 2, (self.col + other.col) / 2)
    }

    /// An iterator over all squares on the board in row-major order.
    pub fn iter() -> impl DoubleEndedIterator<Item = Square> {
        (0..Self::SIZE).flat_map(|row| (0..Self::SIZE).map(move |col| Square::new(row, col)))
    }
}

impl Perspective for Square {
    /// Rotates this square by 180 degrees around the center of the board.
    #[inline(always)]
    fn flip(&self) -> Self {
        Square::new(Self::LAST_ROW - self.row, Self::LAST_ROW - self.col)
    }
}

/// The displacement in rows and columns between two squares.
impl Sub for Square {
    type Output = (i8, i8);

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        (self.row - rhs.row, self.col - rhs.col)
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse square, expected a row digit followed by a column digit")]
pub struct ParseSquareError;

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match *s.as_bytes() {
            [r @ b'0'..=b'9', c @ b'0'..=b'9'] => Ok(Square::new((r - b'0') as _, (c - b'0') as _)),
            _ => Err(ParseSquareError),
        }
    }
}
