use super::Player;
use async_trait::async_trait;
use derive_more::{Display, Error};
use lib::draughts::{Board, Path};
use std::collections::VecDeque;
use tracing::instrument;

/// The reason why a [`Script`] could not play.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "the script has no moves left")]
pub struct ScriptExhausted;

/// A player that replays a fixed list of moves regardless of the [`Board`].
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Script {
    moves: VecDeque<Path>,
}

impl Script {
    pub fn new<I: IntoIterator<Item = Path>>(moves: I) -> Self {
        Script {
            moves: moves.into_iter().collect(),
        }
    }
}

#[async_trait]
impl Player for Script {
    type Error = ScriptExhausted;

    #[instrument(level = "trace", skip(self, _board), ret, err)]
    async fn play(&mut self, _board: &Board) -> Result<Path, Self::Error> {
        self.moves.pop_front().ok_or(ScriptExhausted)
    }
}
