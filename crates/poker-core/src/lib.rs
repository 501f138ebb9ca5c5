// Library root: the league model, the player stores, and configuration shared
// by the HTTP server and the CLI.

pub mod config;
pub mod error;
pub mod league;
pub mod store;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use error::{LeagueError, StoreError};
pub use league::{League, Player};
pub use store::{FileSystemPlayerStore, InMemoryPlayerStore, PlayerStore};
