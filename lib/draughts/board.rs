use crate::draughts::{Color, IllegalMove, Path, Perspective, Piece, Role, Square, Violation};
use derive_more::{DebugCustom, Display, Error};
use proptest::{collection::vec, prelude::*};
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use std::{fmt, str::FromStr};

const SIZE: usize = Square::SIZE as usize;

/// The four diagonal directions as `(Δrow, Δcol)`.
const DIAGONALS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

/// Stable address of a [`Piece`] in the [`Board`]'s arena.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
struct PieceId(u8);

/// Represents a [`Square`] that cannot take another [`Piece`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "square `{}` is either occupied or off the board", _0)]
pub struct InvalidPlacement(#[error(not(source))] pub Square);

/// A snapshot of all pieces on the draughts board.
///
/// The board is always seen from the perspective of the side to move, whose
/// pieces are [`Color::White`] and start out on rows `0..3`. Every move ends by
/// [flipping](`Perspective::flip`) the board, so that the side that moves next
/// is again white.
///
/// Pieces live in an arena and are addressed by stable ids. Both the grid and
/// the per-color id sets refer into the arena and are only ever updated
/// together.
#[derive(DebugCustom, Clone)]
#[debug(fmt = "Board({})", self)]
pub struct Board {
    arena: Vec<Option<Piece>>,
    sides: [BTreeSet<PieceId>; 2],
    grid: [[Option<PieceId>; SIZE]; SIZE],
}

impl Default for Board {
    /// The starting layout, with men on the dark squares of rows `0..3` and `7..10`.
    fn default() -> Self {
        let mut board = Board::empty();

        for sq in Square::iter().filter(Square::is_dark) {
            match sq.row() {
                0..=2 => board.insert(Piece::new(Color::White, Role::Man, sq)),
                7..=9 => board.insert(Piece::new(Color::Black, Role::Man, sq)),
                _ => continue,
            };
        }

        board
    }
}

impl Board {
    /// A board with no pieces on it.
    pub fn empty() -> Self {
        Board {
            arena: Vec::new(),
            sides: Default::default(),
            grid: [[None; SIZE]; SIZE],
        }
    }

    /// Places a [`Piece`] on its [`Square`], which must be empty.
    pub fn put(&mut self, piece: Piece) -> Result<(), InvalidPlacement> {
        if self.is_empty(piece.square()) {
            self.insert(piece);
            Ok(())
        } else {
            Err(InvalidPlacement(piece.square()))
        }
    }

    /// Whether the [`Square`] lies within the board.
    #[inline(always)]
    pub fn is_on_board(&self, sq: Square) -> bool {
        sq.is_on_board()
    }

    /// The [`Piece`] on the given [`Square`], if any.
    #[inline(always)]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.id_on(sq).and_then(|id| self.arena[id.0 as usize])
    }

    /// The [`Color`] of the piece on the given [`Square`], if any.
    #[inline(always)]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_on(sq).map(|p| p.color())
    }

    /// Whether the [`Square`] holds a piece of the side to move.
    #[inline(always)]
    pub fn is_own(&self, sq: Square) -> bool {
        self.color_on(sq) == Some(Color::White)
    }

    /// Whether the [`Square`] holds a piece of the opponent.
    #[inline(always)]
    pub fn is_opponent(&self, sq: Square) -> bool {
        self.color_on(sq) == Some(Color::Black)
    }

    /// Whether the [`Square`] lies within the board and is not occupied.
    #[inline(always)]
    pub fn is_empty(&self, sq: Square) -> bool {
        sq.is_on_board() && self.id_on(sq).is_none()
    }

    /// An iterator over the pieces of a [`Color`].
    pub fn pieces(&self, c: Color) -> impl Iterator<Item = Piece> + '_ {
        self.sides[c as usize]
            .iter()
            .filter_map(|id| self.arena[id.0 as usize])
    }

    /// An iterator over all pieces on the board.
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        self.pieces(Color::White).chain(self.pieces(Color::Black))
    }

    /// The number of pieces of a [`Color`].
    pub fn count(&self, c: Color) -> usize {
        self.sides[c as usize].len()
    }

    /// Whether any piece of the side to move can capture.
    pub fn has_capture(&self) -> bool {
        self.pieces(Color::White).any(|p| {
            let sq = p.square();
            match p.role() {
                Role::Man => [-1, 1].into_iter().any(|dx| {
                    self.is_opponent(sq.offset(1, dx)) && self.is_empty(sq.offset(2, 2 * dx))
                }),

                Role::King => DIAGONALS.into_iter().any(|(dy, dx)| {
                    let mut next = sq.offset(dy, dx);
                    while self.is_empty(next) {
                        next = next.offset(dy, dx);
                    }

                    self.is_opponent(next) && self.is_empty(next.offset(dy, dx))
                }),
            }
        })
    }

    /// Whether any piece of the side to move can step without capturing.
    pub fn has_non_capture(&self) -> bool {
        self.pieces(Color::White).any(|p| {
            let sq = p.square();
            [-1, 1].into_iter().any(|dx| {
                self.is_empty(sq.offset(1, dx)) || (p.is_king() && self.is_empty(sq.offset(-1, dx)))
            })
        })
    }

    /// Whether the side to move has lost, either because it has no pieces left
    /// or because none of them can move.
    pub fn own_side_has_lost(&self) -> bool {
        self.count(Color::White) == 0 || !(self.has_capture() || self.has_non_capture())
    }

    /// Plays a move for the side to move if legal.
    ///
    /// The returned board is seen from the perspective of the opponent, who
    /// moves next. This board is never modified.
    pub fn play(&self, path: &Path) -> Result<Board, IllegalMove> {
        if path.len() < 2 {
            let v = Violation::EmptyOrTooShortPath;
            return Err(IllegalMove::new(v, self.clone(), path.clone(), false, true));
        }

        let capture = self.has_capture();
        let mut next = self.clone();

        for (i, (whence, whither)) in path.segments().enumerate() {
            let must_capture = i > 0 || capture;
            let first_segment = i == 0;

            if let Err(v) = next.advance(whence, whither, must_capture, first_segment) {
                return Err(IllegalMove::new(
                    v,
                    next,
                    path.clone(),
                    must_capture,
                    first_segment,
                ));
            }
        }

        if let Some(sq) = path.whither().filter(|sq| sq.row() == Square::LAST_ROW) {
            next.promote(sq);
        }

        debug_assert!(next.is_consistent());

        Ok(next.flip())
    }

    /// Validates and applies a single step or capture.
    ///
    /// Leaves the board untouched if the segment is illegal.
    fn advance(
        &mut self,
        whence: Square,
        whither: Square,
        must_capture: bool,
        first_segment: bool,
    ) -> Result<(), Violation> {
        let piece = match self.piece_on(whence) {
            Some(p) if p.color() == Color::White => p,
            _ => return Err(Violation::NotOwnPiece),
        };

        if !whither.is_on_board() {
            return Err(Violation::IllegalGeometry);
        } else if !self.is_empty(whither) {
            return Err(Violation::DestinationOccupied);
        }

        let (dy, dx) = whither - whence;
        let is_diagonal = dy.abs() == dx.abs();

        match (piece.role(), must_capture) {
            (Role::Man, false) => {
                if dy != 1 || dx.abs() != 1 {
                    return Err(Violation::IllegalGeometry);
                }
            }

            (Role::King, false) => {
                if !is_diagonal {
                    return Err(Violation::IllegalGeometry);
                } else if between(whence, whither).any(|sq| !self.is_empty(sq)) {
                    return Err(Violation::PathBlocked);
                }
            }

            // Only the first segment of a chain is held to jumping forward.
            (Role::Man, true) => {
                if dy.abs() != 2 || dx.abs() != 2 || (first_segment && dy != 2) {
                    return Err(Violation::CaptureRequired);
                }

                let jumped = whence.midpoint(whither);
                if !self.is_opponent(jumped) {
                    return Err(Violation::NoEnemyToCapture);
                }

                self.remove(jumped);
            }

            (Role::King, true) => {
                if !is_diagonal {
                    return Err(Violation::IllegalGeometry);
                }

                let mut captured = None;
                for sq in between(whence, whither) {
                    if self.is_own(sq) {
                        return Err(Violation::PathBlocked);
                    } else if self.is_opponent(sq) && captured.replace(sq).is_some() {
                        return Err(Violation::MultipleCaptureInOneSlide);
                    }
                }

                match captured {
                    None => return Err(Violation::CaptureRequired),
                    Some(sq) => self.remove(sq),
                };
            }
        }

        self.relocate(whence, whither);
        Ok(())
    }

    #[inline(always)]
    fn id_on(&self, sq: Square) -> Option<PieceId> {
        if sq.is_on_board() {
            self.grid[sq.row() as usize][sq.col() as usize]
        } else {
            None
        }
    }

    #[inline(always)]
    fn cell(&mut self, sq: Square) -> &mut Option<PieceId> {
        debug_assert!(sq.is_on_board());
        &mut self.grid[sq.row() as usize][sq.col() as usize]
    }

    /// Adds a [`Piece`] to the arena, the grid, and the set of its [`Color`].
    fn insert(&mut self, piece: Piece) {
        debug_assert!(self.is_empty(piece.square()));
        let id = PieceId(self.arena.len() as u8);
        self.arena.push(Some(piece));
        self.sides[piece.color() as usize].insert(id);
        *self.cell(piece.square()) = Some(id);
    }

    /// Takes the [`Piece`] on a [`Square`] off the board.
    fn remove(&mut self, sq: Square) -> Option<Piece> {
        let id = self.cell(sq).take()?;
        let piece = self.arena[id.0 as usize].take()?;
        self.sides[piece.color() as usize].remove(&id);
        Some(piece)
    }

    /// Moves the piece on `whence` to the empty square `whither`.
    fn relocate(&mut self, whence: Square, whither: Square) {
        debug_assert!(self.is_empty(whither));
        if let Some(id) = self.cell(whence).take() {
            if let Some(piece) = &mut self.arena[id.0 as usize] {
                piece.relocate(whither);
            }

            *self.cell(whither) = Some(id);
        }
    }

    /// Crowns the piece on a [`Square`], if any.
    fn promote(&mut self, sq: Square) {
        if let Some(id) = self.id_on(sq) {
            if let Some(piece) = &mut self.arena[id.0 as usize] {
                piece.promote();
            }
        }
    }

    /// Whether the grid, the arena, and the per-color sets agree with each other.
    fn is_consistent(&self) -> bool {
        let grid = Square::iter().all(|sq| match self.id_on(sq) {
            None => true,
            Some(id) => match self.arena[id.0 as usize] {
                None => false,
                Some(p) => p.square() == sq && self.sides[p.color() as usize].contains(&id),
            },
        });

        let sides = [Color::White, Color::Black].into_iter().all(|c| {
            self.sides[c as usize].iter().all(|&id| match self.arena[id.0 as usize] {
                None => false,
                Some(p) => p.color() == c && self.id_on(p.square()) == Some(id),
            })
        });

        let live = self.arena.iter().flatten().count();
        grid && sides && live == self.count(Color::White) + self.count(Color::Black)
    }
}

/// The squares strictly between two squares on the same diagonal.
fn between(whence: Square, whither: Square) -> impl Iterator<Item = Square> {
    let (dy, dx) = whither - whence;
    let (sy, sx) = (dy.signum(), dx.signum());
    (1..dy.abs()).map(move |k| whence.offset(k * sy, k * sx))
}

impl Perspective for Board {
    /// Swaps the colors of all pieces and rotates the board by 180 degrees.
    fn flip(&self) -> Self {
        let mut board = Board::empty();
        for p in self.iter() {
            board.insert(p.flip());
        }

        board
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        Square::iter().all(|sq| self.piece_on(sq) == other.piece_on(sq))
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for sq in Square::iter() {
            self.piece_on(sq).hash(state);
        }
    }
}

impl Arbitrary for Board {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let cell = prop_oneof![3 => Just(None), 1 => any::<(Color, Role)>().prop_map(Some)];
        let darks = Square::iter().filter(Square::is_dark).count();

        vec(cell, darks)
            .prop_map(|cells| {
                let mut board = Board::empty();
                for (sq, cell) in Square::iter().filter(Square::is_dark).zip(cells) {
                    if let Some((c, r)) = cell {
                        board.insert(Piece::new(c, r, sq));
                    }
                }

                board
            })
            .boxed()
    }
}

/// Prints the board as a diagram of rows from the last to the first, separated by `/`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..Square::SIZE).rev() {
            for col in 0..Square::SIZE {
                let symbol = self.piece_on(Square::new(row, col)).map_or('.', |p| p.symbol());
                fmt::Write::write_char(f, symbol)?;
            }

            if row > 0 {
                f.write_str("/")?;
            }
        }

        Ok(())
    }
}

/// The reason why parsing a board diagram failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseBoardError {
    #[display(fmt = "expected {} rows separated by `/`", Square::SIZE)]
    InvalidRowCount,
    #[display(fmt = "expected {} squares in every row", Square::SIZE)]
    InvalidRowLength,
    #[display(fmt = "unexpected symbol `{}`", _0)]
    InvalidSymbol(#[error(not(source))] char),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<_> = s.trim().split('/').collect();
        if rows.len() != SIZE {
            return Err(ParseBoardError::InvalidRowCount);
        }

        let mut board = Board::empty();
        for (row, line) in (0..Square::SIZE).rev().zip(rows) {
            if line.chars().count() != SIZE {
                return Err(ParseBoardError::InvalidRowLength);
            }

            for (col, c) in (0..Square::SIZE).zip(line.chars()) {
                let sq = Square::new(row, col);
                match Piece::from_symbol(c, sq) {
                    Some(p) => board.insert(p),
                    None if c == '.' => continue,
                    None => return Err(ParseBoardError::InvalidSymbol(c)),
                }
            }
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::sample::Selector;
    use test_strategy::proptest;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col)
    }

    fn board(pieces: &[(Color, Role, Square)]) -> Board {
        let mut board = Board::empty();
        for &(c, r, s) in pieces {
            board.put(Piece::new(c, r, s)).unwrap();
        }

        board
    }

    #[test]
    fn starting_layout_has_fifteen_men_per_side_on_dark_squares() {
        let board = Board::default();
        assert_eq!(board.count(Color::White), 15);
        assert_eq!(board.count(Color::Black), 15);
        assert!(board.iter().all(|p| p.role() == Role::Man && p.square().is_dark()));
        assert!(board.pieces(Color::White).all(|p| p.square().row() < 3));
        assert!(board.pieces(Color::Black).all(|p| p.square().row() > 6));
        assert!(!board.own_side_has_lost());
        assert!(board.is_consistent());
    }

    #[test]
    fn starting_layout_is_symmetric() {
        assert_eq!(Board::default().flip(), Board::default());
    }

    #[proptest]
    fn arbitrary_boards_are_consistent(b: Board) {
        assert!(b.is_consistent());
        assert!(b.flip().is_consistent());
    }

    #[proptest]
    fn flipping_board_twice_is_an_identity(b: Board) {
        assert_eq!(b.flip().flip(), b);
    }

    #[proptest]
    fn flipping_board_swaps_sides(b: Board) {
        assert_eq!(b.flip().count(Color::White), b.count(Color::Black));
        assert_eq!(b.flip().count(Color::Black), b.count(Color::White));
    }

    #[proptest]
    fn flipping_board_rotates_every_piece(b: Board, sq: Square) {
        assert_eq!(b.flip().piece_on(sq.flip()), b.piece_on(sq).map(|p| p.flip()));
    }

    #[proptest]
    fn flipping_board_does_not_modify_it(b: Board) {
        let copy = b.clone();
        b.flip();
        assert_eq!(b, copy);
    }

    #[proptest]
    fn cloned_board_is_independent_of_the_original(b: Board, #[filter(#b.is_empty(#sq))] sq: Square, p: Role) {
        let mut copy = b.clone();
        copy.put(Piece::new(Color::White, p, sq))?;
        assert!(b.is_empty(sq));
        assert_ne!(b, copy);
    }

    #[proptest]
    fn squares_off_the_board_are_neither_empty_nor_occupied(
        b: Board,
        sq: Square,
        #[strategy(Square::SIZE..20)] d: i8,
    ) {
        let off = sq.offset(d, 0);
        assert!(!b.is_on_board(off));
        assert!(!b.is_empty(off));
        assert!(!b.is_own(off));
        assert!(!b.is_opponent(off));
    }

    #[proptest]
    fn every_square_is_either_empty_own_or_opponent(b: Board, sq: Square) {
        let states = [b.is_empty(sq), b.is_own(sq), b.is_opponent(sq)];
        assert_eq!(states.into_iter().filter(|&s| s).count(), 1);
    }

    #[proptest]
    fn putting_piece_on_occupied_square_fails(
        #[filter(#b.count(Color::White) > 0)] b: Board,
        selector: Selector,
        c: Color,
        r: Role,
    ) {
        let sq = selector.select(b.pieces(Color::White)).square();
        let mut copy = b.clone();
        assert_eq!(copy.put(Piece::new(c, r, sq)), Err(InvalidPlacement(sq)));
        assert_eq!(copy, b);
    }

    #[test]
    fn putting_piece_off_the_board_fails() {
        let mut b = Board::empty();
        let p = Piece::new(Color::White, Role::Man, sq(10, 0));
        assert_eq!(b.put(p), Err(InvalidPlacement(sq(10, 0))));
    }

    #[proptest]
    fn side_without_pieces_has_lost(b: Board) {
        let mut opponent_only = Board::empty();
        for p in b.pieces(Color::Black) {
            opponent_only.insert(p);
        }

        assert!(opponent_only.own_side_has_lost());
    }

    #[proptest]
    fn side_that_can_move_has_not_lost(
        #[filter(#b.has_capture() || #b.has_non_capture())] b: Board,
    ) {
        assert!(!b.own_side_has_lost());
    }

    #[test]
    fn blocked_men_have_lost() {
        let b = board(&[
            (Color::White, Role::Man, sq(0, 0)),
            (Color::Black, Role::Man, sq(1, 1)),
            (Color::Black, Role::Man, sq(2, 2)),
        ]);

        assert!(!b.has_capture());
        assert!(!b.has_non_capture());
        assert!(b.own_side_has_lost());
    }

    #[test]
    fn man_cannot_step_backward() {
        let b = board(&[
            (Color::White, Role::Man, sq(9, 1)),
            (Color::Black, Role::Man, sq(5, 5)),
        ]);

        assert!(!b.has_non_capture());
        assert!(b.own_side_has_lost());
    }

    #[test]
    fn king_can_step_backward() {
        let b = board(&[
            (Color::White, Role::King, sq(9, 1)),
            (Color::Black, Role::Man, sq(5, 5)),
        ]);

        assert!(b.has_non_capture());
        assert!(!b.own_side_has_lost());
    }

    #[test]
    fn man_captures_forward_only() {
        let forward = board(&[
            (Color::White, Role::Man, sq(4, 4)),
            (Color::Black, Role::Man, sq(5, 5)),
        ]);

        let backward = board(&[
            (Color::White, Role::Man, sq(4, 4)),
            (Color::Black, Role::Man, sq(3, 3)),
        ]);

        assert!(forward.has_capture());
        assert!(!backward.has_capture());
    }

    #[test]
    fn man_cannot_capture_if_landing_square_is_occupied() {
        let b = board(&[
            (Color::White, Role::Man, sq(4, 4)),
            (Color::Black, Role::Man, sq(5, 5)),
            (Color::Black, Role::Man, sq(6, 6)),
        ]);

        assert!(!b.has_capture());
    }

    #[test]
    fn king_captures_from_a_distance_in_any_direction() {
        let b = board(&[
            (Color::White, Role::King, sq(7, 7)),
            (Color::Black, Role::Man, sq(3, 3)),
        ]);

        assert!(b.has_capture());
    }

    #[test]
    fn king_cannot_capture_two_adjacent_pieces() {
        let b = board(&[
            (Color::White, Role::King, sq(0, 0)),
            (Color::Black, Role::Man, sq(3, 3)),
            (Color::Black, Role::Man, sq(4, 4)),
        ]);

        assert!(!b.has_capture());
    }

    #[test]
    fn king_cannot_capture_behind_own_piece() {
        let b = board(&[
            (Color::White, Role::King, sq(0, 0)),
            (Color::White, Role::Man, sq(2, 2)),
            (Color::Black, Role::Man, sq(4, 4)),
        ]);

        assert!(!b.has_capture());
    }

    #[test]
    fn man_steps_diagonally_forward() {
        let b = Board::default();
        let next = b.play(&Path::from([sq(2, 0), sq(3, 1)])).unwrap();

        // seen from the opponent, the man now stands on the mirrored square
        assert_eq!(
            next.piece_on(sq(3, 1).flip()),
            Some(Piece::new(Color::Black, Role::Man, sq(3, 1).flip()))
        );

        assert!(next.is_empty(sq(2, 0).flip()));
        assert_eq!(next.count(Color::White), 15);
        assert_eq!(next.count(Color::Black), 15);
    }

    #[test]
    fn man_cannot_step_sideways_or_too_far() {
        let b = Board::default();

        for whither in [sq(3, 0), sq(4, 2), sq(2, 2), sq(1, 1)] {
            let e = b.play(&Path::from([sq(2, 0), whither])).unwrap_err();
            assert!(
                matches!(
                    e.violation(),
                    Violation::IllegalGeometry | Violation::DestinationOccupied
                ),
                "{e}"
            );
        }
    }

    #[test]
    fn moving_from_empty_or_opponent_square_is_illegal() {
        let b = Board::default();

        let e = b.play(&Path::from([sq(3, 1), sq(4, 2)])).unwrap_err();
        assert_eq!(e.violation(), Violation::NotOwnPiece);

        let e = b.play(&Path::from([sq(7, 1), sq(6, 0)])).unwrap_err();
        assert_eq!(e.violation(), Violation::NotOwnPiece);
    }

    #[test]
    fn moving_to_occupied_square_is_illegal() {
        let e = Board::default()
            .play(&Path::from([sq(1, 1), sq(2, 2)]))
            .unwrap_err();

        assert_eq!(e.violation(), Violation::DestinationOccupied);
    }

    #[test]
    fn moving_off_the_board_is_illegal() {
        let e = Board::default()
            .play(&Path::from([sq(2, 0), sq(3, -1)]))
            .unwrap_err();

        assert_eq!(e.violation(), Violation::IllegalGeometry);
    }

    #[proptest]
    fn paths_shorter_than_two_squares_are_illegal(
        b: Board,
        #[strategy(proptest::collection::vec(any::<Square>(), 0..2))] squares: Vec<Square>,
    ) {
        let path = Path::from(squares);
        let e = b.play(&path).unwrap_err();
        assert_eq!(e.violation(), Violation::EmptyOrTooShortPath);
        assert_eq!(e.path(), &path);
        assert_eq!(e.board(), &b);
    }

    #[test]
    fn man_captures_by_jumping_forward() {
        let b = board(&[
            (Color::White, Role::Man, sq(4, 4)),
            (Color::Black, Role::Man, sq(5, 5)),
            (Color::Black, Role::Man, sq(9, 9)),
        ]);

        let next = b.play(&Path::from([sq(4, 4), sq(6, 6)])).unwrap().flip();

        assert_eq!(next.count(Color::Black), 1);
        assert!(next.is_empty(sq(5, 5)));
        assert!(next.is_own(sq(6, 6)));
    }

    #[test]
    fn man_cannot_start_a_capture_backward() {
        let b = board(&[
            (Color::White, Role::Man, sq(4, 4)),
            (Color::Black, Role::Man, sq(3, 3)),
            (Color::Black, Role::Man, sq(5, 5)),
        ]);

        let e = b.play(&Path::from([sq(4, 4), sq(2, 2)])).unwrap_err();
        assert_eq!(e.violation(), Violation::CaptureRequired);
        assert!(e.must_capture());
        assert!(e.first_segment());
    }

    #[test]
    fn man_may_continue_a_chain_backward() {
        let b = board(&[
            (Color::White, Role::Man, sq(2, 2)),
            (Color::Black, Role::Man, sq(3, 3)),
            (Color::Black, Role::Man, sq(3, 5)),
        ]);

        let path = Path::from([sq(2, 2), sq(4, 4), sq(2, 6)]);
        let next = b.play(&path).unwrap().flip();

        assert_eq!(next.count(Color::Black), 0);
        assert_eq!(next.piece_on(sq(2, 6)).map(|p| p.role()), Some(Role::Man));
    }

    #[test]
    fn chain_is_validated_against_the_board_after_each_capture() {
        let b = board(&[
            (Color::White, Role::Man, sq(5, 1)),
            (Color::Black, Role::Man, sq(6, 2)),
            (Color::Black, Role::Man, sq(0, 9)),
        ]);

        let e = b
            .play(&Path::from([sq(5, 1), sq(7, 3), sq(9, 5)]))
            .unwrap_err();

        assert_eq!(e.violation(), Violation::NoEnemyToCapture);
        assert!(e.must_capture());
        assert!(!e.first_segment());

        // the snapshot reflects the first capture, but the board is untouched
        assert!(e.board().is_empty(sq(6, 2)));
        assert!(e.board().is_own(sq(7, 3)));
        assert!(b.is_opponent(sq(6, 2)));
        assert!(b.is_own(sq(5, 1)));
    }

    #[test]
    fn king_slides_along_clear_diagonals() {
        let b = board(&[
            (Color::White, Role::King, sq(0, 0)),
            (Color::Black, Role::Man, sq(9, 1)),
        ]);

        let next = b.play(&Path::from([sq(0, 0), sq(7, 7)])).unwrap().flip();
        assert_eq!(next.piece_on(sq(7, 7)).map(|p| p.role()), Some(Role::King));
    }

    #[test]
    fn king_cannot_slide_over_pieces_without_capturing() {
        let b = board(&[
            (Color::White, Role::King, sq(0, 0)),
            (Color::White, Role::Man, sq(3, 3)),
            (Color::Black, Role::Man, sq(9, 1)),
        ]);

        let e = b.play(&Path::from([sq(0, 0), sq(5, 5)])).unwrap_err();
        assert_eq!(e.violation(), Violation::PathBlocked);
        assert!(!e.must_capture());
    }

    #[test]
    fn king_cannot_leave_the_diagonal() {
        let b = board(&[
            (Color::White, Role::King, sq(0, 0)),
            (Color::Black, Role::Man, sq(9, 1)),
        ]);

        let e = b.play(&Path::from([sq(0, 0), sq(2, 4)])).unwrap_err();
        assert_eq!(e.violation(), Violation::IllegalGeometry);
    }

    #[test]
    fn king_captures_a_distant_piece_and_lands_anywhere_beyond() {
        let b = board(&[
            (Color::White, Role::King, sq(0, 4)),
            (Color::Black, Role::Man, sq(3, 1)),
            (Color::Black, Role::Man, sq(9, 9)),
        ]);

        let next = b.play(&Path::from([sq(0, 4), sq(4, 0)])).unwrap().flip();
        assert!(next.is_empty(sq(3, 1)));
        assert!(next.is_own(sq(4, 0)));
        assert_eq!(next.count(Color::Black), 1);
    }

    #[test]
    fn king_cannot_capture_two_pieces_in_one_slide() {
        let b = board(&[
            (Color::White, Role::King, sq(0, 0)),
            (Color::Black, Role::Man, sq(2, 2)),
            (Color::Black, Role::Man, sq(5, 5)),
        ]);

        let e = b.play(&Path::from([sq(0, 0), sq(7, 7)])).unwrap_err();
        assert_eq!(e.violation(), Violation::MultipleCaptureInOneSlide);
    }

    #[test]
    fn king_cannot_capture_over_own_piece() {
        let b = board(&[
            (Color::White, Role::King, sq(0, 0)),
            (Color::Black, Role::Man, sq(2, 2)),
            (Color::White, Role::Man, sq(3, 3)),
            (Color::Black, Role::Man, sq(7, 1)),
        ]);

        let e = b.play(&Path::from([sq(0, 0), sq(5, 5)])).unwrap_err();
        assert_eq!(e.violation(), Violation::PathBlocked);
    }

    #[test]
    fn king_chains_captures_in_different_directions() {
        let b = board(&[
            (Color::White, Role::King, sq(0, 0)),
            (Color::Black, Role::Man, sq(3, 3)),
            (Color::Black, Role::Man, sq(6, 6)),
            (Color::Black, Role::Man, sq(8, 6)),
        ]);

        let path = Path::from([sq(0, 0), sq(4, 4), sq(7, 7), sq(9, 5)]);
        assert_eq!(b.play(&path).map(|b| b.count(Color::White)), Ok(0));
    }

    #[test]
    fn man_reaching_the_last_row_is_crowned() {
        let b = board(&[
            (Color::White, Role::Man, sq(8, 2)),
            (Color::Black, Role::Man, sq(0, 0)),
        ]);

        let next = b.play(&Path::from([sq(8, 2), sq(9, 3)])).unwrap().flip();
        assert_eq!(next.piece_on(sq(9, 3)).map(|p| p.role()), Some(Role::King));
    }

    #[test]
    fn man_passing_through_the_last_row_is_not_crowned() {
        let b = board(&[
            (Color::White, Role::Man, sq(7, 3)),
            (Color::Black, Role::Man, sq(8, 4)),
            (Color::Black, Role::Man, sq(8, 6)),
        ]);

        let path = Path::from([sq(7, 3), sq(9, 5), sq(7, 7)]);
        let next = b.play(&path).unwrap().flip();
        assert_eq!(next.piece_on(sq(7, 7)).map(|p| p.role()), Some(Role::Man));
    }

    #[proptest]
    fn steps_are_illegal_while_a_capture_is_available(
        #[filter(#b.has_capture())] b: Board,
        selector: Selector,
        #[strategy(0usize..4)] direction: usize,
        #[strategy(1i8..10)] distance: i8,
    ) {
        let piece = selector.select(b.pieces(Color::White));
        let (dy, dx) = match piece.role() {
            Role::Man => (1, DIAGONALS[direction % 2].1),
            Role::King => DIAGONALS[direction],
        };

        let distance = if piece.is_king() { distance } else { 1 };
        let whence = piece.square();
        let whither = whence.offset(dy * distance, dx * distance);

        prop_assume!(b.is_empty(whither));
        prop_assume!(between(whence, whither).all(|sq| b.is_empty(sq)));

        let e = b.play(&Path::from([whence, whither])).unwrap_err();
        assert_eq!(e.violation(), Violation::CaptureRequired);
    }

    #[proptest]
    fn legal_moves_only_ever_remove_opponent_pieces(
        #[filter(#b.count(Color::White) > 0)] b: Board,
        selector: Selector,
        #[strategy(0usize..4)] direction: usize,
        #[strategy(1i8..10)] distance: i8,
    ) {
        let (dy, dx) = DIAGONALS[direction];
        let whence = selector.select(b.pieces(Color::White)).square();
        let whither = whence.offset(dy * distance, dx * distance);
        let path = Path::from([whence, whither]);

        if let Ok(next) = b.play(&path) {
            assert_eq!(next.count(Color::Black), b.count(Color::White));
            assert!(next.count(Color::White) + 1 >= b.count(Color::Black));
            assert!(next.count(Color::White) <= b.count(Color::Black));
            assert!(next.is_consistent());
        }
    }

    #[proptest]
    fn playing_a_move_never_modifies_the_board(b: Board, path: Path) {
        let copy = b.clone();
        let _ = b.play(&path);
        assert_eq!(b, copy);
    }

    #[proptest]
    fn parsing_printed_board_is_an_identity(b: Board) {
        assert_eq!(b.to_string().parse(), Ok(b));
    }

    #[test]
    fn starting_layout_is_printed_as_diagram() {
        assert_eq!(
            Board::default().to_string(),
            ".b.b.b.b.b/b.b.b.b.b./.b.b.b.b.b/........../........../\
             ........../........../w.w.w.w.w./.w.w.w.w.w/w.w.w.w.w."
        );
    }

    #[test]
    fn parsing_board_fails_on_malformed_diagrams() {
        use ParseBoardError::*;
        assert_eq!("".parse::<Board>(), Err(InvalidRowCount));
        assert_eq!("../..".parse::<Board>(), Err(InvalidRowCount));

        let short = ["........."; 10].join("/");
        assert_eq!(short.parse::<Board>(), Err(InvalidRowLength));

        let odd = ["..x......."; 10].join("/");
        assert_eq!(odd.parse::<Board>(), Err(InvalidSymbol('x')));
    }
}
