use crate::draughts::{Color, Perspective, Role, Square};
use derive_more::{Constructor, Display};
use test_strategy::Arbitrary;

/// A draughts piece of a certain [`Color`] and [`Role`] standing on a [`Square`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary, Constructor)]
#[display(fmt = "{} {} on {}", color, role, square)]
pub struct Piece {
    color: Color,
    role: Role,
    square: Square,
}

impl Piece {
    /// This piece's [`Color`].
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.color
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        self.role
    }

    /// The [`Square`] this piece stands on.
    #[inline(always)]
    pub fn square(&self) -> Square {
        self.square
    }

    /// Whether this piece has been crowned.
    #[inline(always)]
    pub fn is_king(&self) -> bool {
        self.role == Role::King
    }

    /// The symbol of this piece in a board diagram.
    ///
    /// Men are lowercase, kings uppercase.
    pub fn symbol(&self) -> char {
        match (self.color, self.role) {
            (Color::White, Role::Man) => 'w',
            (Color::White, Role::King) => 'W',
            (Color::Black, Role::Man) => 'b',
            (Color::Black, Role::King) => 'B',
        }
    }

    /// The piece a diagram symbol stands for, if any.
    pub fn from_symbol(c: char, square: Square) -> Option<Self> {
        let (color, role) = match c {
            'w' => (Color::White, Role::Man),
            'W' => (Color::White, Role::King),
            'b' => (Color::Black, Role::Man),
            'B' => (Color::Black, Role::King),
            _ => return None,
        };

        Some(Piece::new(color, role, square))
    }

    /// Moves this piece to another [`Square`].
    #[inline(always)]
    pub(super) fn relocate(&mut self, square: Square) {
        self.square = square;
    }

    /// Crowns this piece, which is a no-op for kings.
    #[inline(always)]
    pub(super) fn promote(&mut self) {
        self.role = Role::King;
    }
}

impl Perspective for Piece {
    /// Swaps this piece's [`Color`] and rotates its [`Square`].
    #[inline(always)]
    fn flip(&self) -> Self {
        Piece::new(self.color.flip(), self.role, self.square.flip())
    }
}
