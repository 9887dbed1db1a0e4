use crate::io::Pipe;
use async_trait::async_trait;
use derive_more::{DebugCustom, Display, Error, From};
use lib::draughts::{Board, Path};
use serde::{Deserialize, Serialize};
use std::{io, str::FromStr};
use test_strategy::Arbitrary;
use tokio::io::{Stdin, Stdout};

mod script;
mod terminal;

pub use script::*;
pub use terminal::*;

/// Trait for types that know how to play draughts.
#[cfg_attr(test, mockall::automock(type Error = String;))]
#[async_trait]
pub trait Player {
    /// The reason why a move could not be played.
    type Error;

    /// Chooses a move on a [`Board`] seen from the perspective of this player.
    async fn play(&mut self, board: &Board) -> Result<Path, Self::Error>;
}

/// The reason why parsing player configuration failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse player configuration")]
pub struct ParsePlayerConfigError(ron::de::SpannedError);

/// Runtime configuration for an [`Agent`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Arbitrary, Deserialize, Serialize)]
#[serde(deny_unknown_fields, rename_all = "lowercase")]
pub enum PlayerConfig {
    /// A human at the terminal.
    #[display(fmt = "{}", "ron::ser::to_string(self).unwrap()")]
    Terminal,

    /// A fixed list of moves.
    #[display(fmt = "{}", "ron::ser::to_string(self).unwrap()")]
    Script(Vec<Path>),
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig::Terminal
    }
}

impl FromStr for PlayerConfig {
    type Err = ParsePlayerConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

/// The reason why an [`Agent`] failed to play a move.
#[derive(Debug, Display, Error, From)]
pub enum AgentError {
    Terminal(io::Error),
    Script(ScriptExhausted),
}

/// A generic draughts player.
#[derive(DebugCustom, From)]
pub enum Agent {
    #[debug(fmt = "{:?}", _0)]
    Terminal(Terminal<Pipe<Stdout, Stdin>>),
    #[debug(fmt = "{:?}", _0)]
    Script(Script),
}

impl From<PlayerConfig> for Agent {
    fn from(config: PlayerConfig) -> Self {
        match config {
            PlayerConfig::Terminal => Terminal::new(Pipe::stdio()).into(),
            PlayerConfig::Script(moves) => Script::new(moves).into(),
        }
    }
}

#[async_trait]
impl Player for Agent {
    type Error = AgentError;

    async fn play(&mut self, board: &Board) -> Result<Path, Self::Error> {
        match self {
            Agent::Terminal(p) => Ok(p.play(board).await?),
            Agent::Script(p) => Ok(p.play(board).await?),
        }
    }
}
