use crate::{limits::Limits, player::Player};
use derive_more::{Constructor, Display, Error};
use lib::draughts::{Color, Match, Outcome, Path, Rules};
use serde::{Deserialize, Serialize};
use tracing::{field::display, info, instrument, warn, Span};

/// The reason why the [`Game`] was interrupted.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "the {} player encountered an error")]
pub enum GameInterrupted<W, B> {
    #[display(fmt = "white")]
    White(W),

    #[display(fmt = "black")]
    Black(B),
}

/// The history of a finished game of draughts.
#[derive(Debug, Display, Clone, Eq, PartialEq, Deserialize, Serialize)]
#[display(fmt = "{}", "ron::ser::to_string_pretty(self, Default::default()).unwrap()")]
#[serde(deny_unknown_fields)]
pub struct Record {
    /// The rules the game was played by.
    #[serde(default)]
    pub rules: Rules,

    /// Every move submitted, in order, the last of which may be illegal.
    pub moves: Vec<Path>,

    pub outcome: Outcome,
}

/// Referees a game of draughts between two [`Player`]s.
#[derive(Debug, Constructor)]
pub struct Game<W, B> {
    white: W,
    black: B,
}

impl<W: Player, B: Player> Game<W, B> {
    /// Plays until the [`Match`] has an [`Outcome`].
    ///
    /// A player that exceeds the [`Limits`] loses on time, one that submits an
    /// illegal move forfeits the game.
    #[instrument(level = "debug", skip(self, m), err, fields(%limits, outcome))]
    pub async fn play(
        mut self,
        mut m: Match,
        limits: Limits,
    ) -> Result<Record, GameInterrupted<W::Error, B::Error>> {
        use GameInterrupted::*;

        let mut moves = Vec::new();

        let outcome = loop {
            if let Some(o) = m.outcome() {
                break o;
            }

            let turn = m.turn();
            let board = m.board().clone();

            let result = match turn {
                Color::White => limits
                    .bound(self.white.play(&board))
                    .await
                    .map(|r| r.map_err(White)),

                Color::Black => limits
                    .bound(self.black.play(&board))
                    .await
                    .map(|r| r.map_err(Black)),
            };

            let path = match result {
                Some(r) => r?,
                None => {
                    warn!(%turn, "player ran out of time");
                    break Outcome::LossOnTime(turn);
                }
            };

            moves.push(path.clone());

            if let Err(e) = m.play(&path) {
                warn!(%turn, violation = %e.violation(), "{}", e);
                break Outcome::Forfeit(turn);
            }
        };

        Span::current().record("outcome", display(outcome));
        info!(%outcome, moves = moves.len());

        Ok(Record {
            rules: m.rules(),
            moves,
            outcome,
        })
    }
}
