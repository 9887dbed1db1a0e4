use crate::draughts::Perspective;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops::Not;
use test_strategy::Arbitrary;

/// The color of a draughts [`Piece`][`crate::draughts::Piece`].
///
/// Within a [`Board`][`crate::draughts::Board`], [`Color::White`] always
/// denotes the side to move.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    #[display(fmt = "white")]
    White,
    #[display(fmt = "black")]
    Black,
}

impl Not for Color {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl Perspective for Color {
    #[inline(always)]
    fn flip(&self) -> Self {
        !*self
    }
}
