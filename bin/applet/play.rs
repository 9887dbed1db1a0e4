use crate::{game::Game, limits::Limits, player::Agent, player::PlayerConfig};
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::draughts::{Match, Rules};
use tracing::{info, instrument};

/// A game of draughts between two players.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The player with the white pieces, who moves first.
    #[clap(short, long, default_value_t)]
    white: PlayerConfig,

    /// The player with the black pieces.
    #[clap(short, long, default_value_t)]
    black: PlayerConfig,

    /// How long each player may think about a move.
    #[clap(short, long, default_value_t)]
    limits: Limits,

    /// The rules of the match.
    #[clap(short, long, default_value_t)]
    rules: Rules,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub async fn execute(self) -> Result<(), Anyhow> {
        let game = Game::new(Agent::from(self.white), Agent::from(self.black));
        let record = game.play(Match::new(self.rules), self.limits).await?;

        match record.outcome.winner() {
            Some(c) => info!(winner = %c, "{}", record.outcome),
            None => info!("{}", record.outcome),
        }

        println!("{}", record);

        Ok(())
    }
}
