// Reads a single "<name> wins" line from an input stream and records the win.

use std::io::BufRead;
use std::sync::Arc;

use poker_core::{PlayerStore, StoreError};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read from input: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to record win: {0}")]
    Record(#[from] StoreError),
}

pub struct Cli<R> {
    store: Arc<dyn PlayerStore>,
    input: R,
}

impl<R: BufRead> Cli<R> {
    pub fn new(store: Arc<dyn PlayerStore>, input: R) -> Self {
        Self { store, input }
    }

    /// Read exactly one line and record a win for the name it carries.
    ///
    /// The line is not validated: whatever remains after removing `" wins"` is
    /// the winner, including an empty name when the input is empty.
    pub fn play_poker(&mut self) -> Result<(), CliError> {
        let line = self.read_line()?;
        let winner = extract_winner(&line);
        info!(winner = %winner, "Recording win");
        self.store.record_win(&winner)?;
        Ok(())
    }

    fn read_line(&mut self) -> std::io::Result<String> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        if line.ends_with('\n') {
            line.pop();
        }
        if line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

/// Strip the first occurrence of `" wins"` from `line`.
pub fn extract_winner(line: &str) -> String {
    line.replacen(" wins", "", 1)
}
