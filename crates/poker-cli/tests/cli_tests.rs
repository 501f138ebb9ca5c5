// CLI against the real stores.

use std::sync::Arc;

use poker_cli::{Cli, CliError};
use poker_core::{FileSystemPlayerStore, InMemoryPlayerStore, PlayerStore};

#[test]
fn win_is_persisted_to_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.db.json");

    let store = Arc::new(FileSystemPlayerStore::from_path(&path).unwrap());
    Cli::new(store.clone(), "Chris wins\n".as_bytes())
        .play_poker()
        .unwrap();
    assert_eq!(store.player_score("Chris"), 1);
    drop(store);

    let on_disk = std::fs::read_to_string(&path).unwrap();
    assert_eq!(on_disk, r#"[{"Name":"Chris","Wins":1}]"#);
}

#[test]
fn repeated_runs_accumulate_wins() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.db.json");

    for _ in 0..3 {
        let store = Arc::new(FileSystemPlayerStore::from_path(&path).unwrap());
        Cli::new(store, "Cleo wins\n".as_bytes()).play_poker().unwrap();
    }

    let store = FileSystemPlayerStore::from_path(&path).unwrap();
    assert_eq!(store.player_score("Cleo"), 3);
}

#[test]
fn in_memory_store_records_the_win() {
    let store = Arc::new(InMemoryPlayerStore::new());
    Cli::new(store.clone(), "Pepper wins\n".as_bytes())
        .play_poker()
        .unwrap();
    assert_eq!(store.player_score("Pepper"), 1);
}

#[test]
fn read_failure_is_reported() {
    struct Broken;

    impl std::io::Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "stdin closed"))
        }
    }

    let store = Arc::new(InMemoryPlayerStore::new());
    let err = Cli::new(store.clone(), std::io::BufReader::new(Broken))
        .play_poker()
        .unwrap_err();

    assert!(matches!(err, CliError::Read(_)));
    assert!(store.league().is_empty());
}
