// Player stores: the capability set shared by the HTTP server and the CLI, and
// its two implementations.

mod file;
mod memory;

pub use file::FileSystemPlayerStore;
pub use memory::InMemoryPlayerStore;

use std::sync::Arc;

use tracing::info;

use crate::config::{Backend, DatabaseConfig};
use crate::error::Result;
use crate::league::League;

/// Reads and mutates player win counts.
///
/// Implementations are shared across request handlers, so every method takes
/// `&self` and does its own locking.
pub trait PlayerStore: Send + Sync {
    /// Wins recorded for `name`, or 0 for an unknown player.
    fn player_score(&self, name: &str) -> u64;

    /// Add one win for `name`, creating the player on their first win.
    fn record_win(&self, name: &str) -> Result<()>;

    fn league(&self) -> League;
}

/// Build the store selected by the `[database]` config table.
pub fn open(config: &DatabaseConfig) -> Result<Arc<dyn PlayerStore>> {
    match config.backend {
        Backend::File => {
            info!("Using file-backed player store at {}", config.path);
            Ok(Arc::new(FileSystemPlayerStore::from_path(&config.path)?))
        }
        Backend::Memory => {
            info!("Using in-memory player store; wins will not be persisted");
            Ok(Arc::new(InMemoryPlayerStore::new()))
        }
    }
}
