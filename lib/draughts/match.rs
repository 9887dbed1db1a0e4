use crate::draughts::{Board, Color, IllegalMove, Outcome, Path, Perspective, Rules};
use derive_more::Display;
use tracing::{debug, instrument};

/// The state of a game of draughts between two sides.
///
/// Keeps the [`Board`] normalized to the side to move, alongside whose turn it
/// really is and how many consecutive boring moves have been played.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash)]
#[display(fmt = "{} ({} to move)", "self.position()", turn)]
pub struct Match {
    board: Board,
    turn: Color,
    boring: u16,
    rules: Rules,
    outcome: Option<Outcome>,
}

impl Default for Match {
    fn default() -> Self {
        Match::new(Rules::default())
    }
}

impl Match {
    /// A new match from the starting layout, white to move.
    pub fn new(rules: Rules) -> Self {
        Match {
            board: Board::default(),
            turn: Color::White,
            boring: 0,
            rules,
            outcome: None,
        }
    }

    /// The [`Board`] as seen by the side to move.
    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The [`Board`] with the real colors, white moving up from row `0`.
    pub fn position(&self) -> Board {
        self.board.perspective(self.turn)
    }

    /// The side to move.
    #[inline(always)]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The [`Rules`] this match is played by.
    #[inline(always)]
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// How many consecutive boring moves have been submitted.
    #[inline(always)]
    pub fn boring_moves(&self) -> u16 {
        self.boring
    }

    /// The [`Outcome`] of the match, if it has finished.
    #[inline(always)]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Whether the match has finished.
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Whether the match has finished in a draw.
    pub fn is_draw(&self) -> bool {
        self.outcome.map_or(false, |o| o.is_draw())
    }

    /// The winning side, if any.
    pub fn winner(&self) -> Option<Color> {
        self.outcome.and_then(|o| o.winner())
    }

    /// Submits a move by the side to move.
    ///
    /// A boring move is a single step by a king. The counter of boring moves
    /// is updated and checked against [`Rules::boring_limit`] before the move
    /// is validated, so the draw is declared even if the move is rejected.
    /// Otherwise, a rejected move leaves the board and the turn untouched.
    #[instrument(level = "debug", skip(self, path), fields(turn = %self.turn, %path))]
    pub fn play(&mut self, path: &Path) -> Result<&Board, IllegalMove> {
        let boring = path.len() == 2
            && path
                .whence()
                .and_then(|sq| self.board.piece_on(sq))
                .map_or(false, |p| p.is_king());

        if boring {
            self.boring = self.boring.saturating_add(1);
        } else {
            self.boring = 0;
        }

        if self.boring >= self.rules.boring_limit {
            debug!(boring = self.boring, "draw by lack of progress");
            self.outcome.get_or_insert(Outcome::DrawByBoringMoves);
        }

        self.board = match self.board.play(path) {
            Ok(next) => next,
            Err(e) => {
                debug!(violation = %e.violation(), "move rejected");
                return Err(e);
            }
        };
        self.turn = !self.turn;

        if self.board.own_side_has_lost() && self.outcome.is_none() {
            self.outcome = Some(Outcome::Immobilized(self.turn));
        }

        debug!(outcome = ?self.outcome);

        Ok(&self.board)
    }
}
