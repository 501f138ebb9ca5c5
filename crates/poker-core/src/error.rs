// Error types for league decoding and store persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to decode or encode a league.
#[derive(Debug, Error)]
pub enum LeagueError {
    #[error("failed to read league data: {0}")]
    Io(#[from] std::io::Error),

    #[error("problem parsing league: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("problem encoding league: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Errors surfaced by player store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not open database file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("problem loading players from database: {0}")]
    Load(#[source] LeagueError),

    #[error("problem persisting league: {0}")]
    Persist(#[source] LeagueError),

    #[error("win count for {player} is already at its maximum")]
    WinsOverflow { player: String },
}

pub type Result<T> = std::result::Result<T, StoreError>;
