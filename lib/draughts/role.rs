use derive_more::Display;
use test_strategy::Arbitrary;

/// The rank of a draughts [`Piece`][`crate::draughts::Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary)]
#[repr(u8)]
pub enum Role {
    /// Steps one square diagonally forward, captures by jumping forward.
    #[display(fmt = "m")]
    Man,
    /// Slides along diagonals in any direction.
    #[display(fmt = "k")]
    King,
}
