// JSON-file-backed store. The league lives in memory and the whole file is
// rewritten after every win.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info};

use super::PlayerStore;
use crate::error::{LeagueError, Result, StoreError};
use crate::league::League;

/// Writes always replace the full file content from offset zero.
#[derive(Debug)]
struct Tape {
    file: File,
}

impl Tape {
    fn rewrite(&mut self, league: &League) -> std::result::Result<(), LeagueError> {
        self.file.seek(SeekFrom::Start(0))?;
        self.file.set_len(0)?;

        let mut writer = BufWriter::new(&mut self.file);
        league.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[derive(Debug)]
struct Database {
    league: League,
    tape: Tape,
}

/// Player store persisted as a JSON array in a single file.
///
/// All access goes through one mutex, held across the in-memory update and
/// the file rewrite, so concurrent writers within a process are serialized.
#[derive(Debug)]
pub struct FileSystemPlayerStore {
    db: Mutex<Database>,
}

impl FileSystemPlayerStore {
    /// Build a store from an open read/write file, decoding its full contents.
    ///
    /// An empty file is an empty league. Malformed content fails construction.
    pub fn new(mut file: File) -> Result<Self> {
        file.seek(SeekFrom::Start(0))
            .map_err(|e| StoreError::Load(LeagueError::Io(e)))?;
        let league = League::load_from(BufReader::new(&file)).map_err(StoreError::Load)?;

        Ok(Self {
            db: Mutex::new(Database {
                league,
                tape: Tape { file },
            }),
        })
    }

    /// Open (creating if needed) the database file at `path` and load it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|source| StoreError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        let store = Self::new(file)?;
        info!(
            "Loaded {} players from {}",
            store.db().league.len(),
            path.display()
        );
        Ok(store)
    }

    fn db(&self) -> MutexGuard<'_, Database> {
        self.db.lock().expect("player store mutex poisoned")
    }
}

impl PlayerStore for FileSystemPlayerStore {
    fn player_score(&self, name: &str) -> u64 {
        self.db().league.find(name).map_or(0, |p| p.wins)
    }

    fn record_win(&self, name: &str) -> Result<()> {
        let mut db = self.db();
        let wins = db
            .league
            .record_win(name)
            .ok_or_else(|| StoreError::WinsOverflow {
                player: name.to_string(),
            })?;
        debug!(player = name, wins, "recorded win");

        let Database { league, tape } = &mut *db;
        tape.rewrite(league).map_err(StoreError::Persist)
    }

    /// Players sorted by wins, most first; ties keep their stored order.
    fn league(&self) -> League {
        let mut db = self.db();
        db.league.sort_by_wins();
        db.league.clone()
    }
}
