use crate::game::Record;
use anyhow::{bail, ensure, Context, Error as Anyhow};
use clap::Parser;
use lib::draughts::{Match, Outcome};
use std::{fs, path::PathBuf};
use tracing::{info, instrument, warn};

/// Replays a recorded game and checks its outcome.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Replay {
    /// A game record as printed by `play`.
    file: PathBuf,
}

impl Replay {
    #[instrument(level = "trace", skip(self), err)]
    pub async fn execute(self) -> Result<(), Anyhow> {
        let text = fs::read_to_string(&self.file)
            .with_context(|| format!("failed to read `{}`", self.file.display()))?;

        let record: Record = ron::de::from_str(&text).context("failed to parse game record")?;
        let replayed = replay(&record);

        match (replayed, record.outcome) {
            (Some(o), _) => ensure!(
                o == record.outcome,
                "recorded outcome `{}` does not match replayed outcome `{}`",
                record.outcome,
                o
            ),

            (None, Outcome::LossOnTime(c)) => warn!(loser = %c, "time losses cannot be replayed"),

            (None, o) => bail!("the game did not end in `{}`", o),
        }

        info!(outcome = %record.outcome, moves = record.moves.len(), "record is consistent");

        Ok(())
    }
}

/// Plays the recorded moves until the match is over or a move is rejected.
fn replay(record: &Record) -> Option<Outcome> {
    let mut m = Match::new(record.rules);

    for path in &record.moves {
        if m.is_finished() {
            break;
        }

        let turn = m.turn();
        if let Err(e) = m.play(path) {
            warn!(%turn, "{}", e);
            return Some(Outcome::Forfeit(turn));
        }
    }

    m.outcome()
}
