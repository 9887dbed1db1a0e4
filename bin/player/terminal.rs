use super::Player;
use crate::io::Io;
use async_trait::async_trait;
use derive_more::{Constructor, Deref, From};
use lib::draughts::{Board, Path, Square};
use std::fmt::{self, Debug, Display};
use std::io;
use tracing::instrument;

/// A human player at the terminal.
///
/// The board is always drawn from the perspective of the side to move, whose
/// men advance up the diagram, and moves are read in the same coordinates.
/// Moves the board rejects are explained and asked for again.
#[derive(Debug, From, Constructor)]
pub struct Terminal<T: Io> {
    io: T,
}

#[async_trait]
impl<T: Io + Debug + Send> Player for Terminal<T> {
    type Error = io::Error;

    #[instrument(level = "trace", skip(board), err)]
    async fn play(&mut self, board: &Board) -> io::Result<Path> {
        self.io.send(&Diagram(board.clone()).to_string()).await?;

        loop {
            self.io.send(PROMPT).await?;
            self.io.flush().await?;

            let line = self.io.recv().await?;
            let squares: Vec<_> = line.split_whitespace().collect();

            if squares.is_empty() {
                continue;
            }

            let reason = match squares.join("-").parse::<Path>() {
                Err(e) => e.to_string(),
                Ok(path) => match board.play(&path) {
                    Ok(_) => break Ok(path),
                    Err(e) => e.to_string(),
                },
            };

            self.io.send(&reason).await?;
        }
    }
}

const PROMPT: &str = "your move, e.g. `20-31` or `20 31`:";

/// Pretty-prints a [`Board`] with its coordinates.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deref)]
struct Diagram(Board);

impl Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let border = "   +".to_string() + &"---+".repeat(Square::SIZE as usize);

        write!(f, "  ")?;
        for col in 0..Square::SIZE {
            write!(f, "   {}", col)?;
        }

        writeln!(f)?;
        writeln!(f, "{}", border)?;

        for row in (0..Square::SIZE).rev() {
            write!(f, " {} |", row)?;

            for col in 0..Square::SIZE {
                match self.piece_on(Square::new(row, col)) {
                    Some(piece) => write!(f, " {} |", piece.symbol())?,
                    None => write!(f, "   |")?,
                }
            }

            writeln!(f, " {}", row)?;
            writeln!(f, "{}", border)?;
        }

        write!(f, "  ")?;
        for col in 0..Square::SIZE {
            write!(f, "   {}", col)?;
        }

        Ok(())
    }
}
