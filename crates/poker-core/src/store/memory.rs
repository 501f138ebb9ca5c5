// Map-backed store with no persistence.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use super::PlayerStore;
use crate::error::{Result, StoreError};
use crate::league::League;

#[derive(Debug, Default)]
struct Scores {
    wins: HashMap<String, u64>,
    // Insertion-ordered view of `wins`, kept in step by `record_win`.
    league: League,
}

/// Keeps win counts in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryPlayerStore {
    scores: Mutex<Scores>,
}

impl InMemoryPlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn scores(&self) -> MutexGuard<'_, Scores> {
        self.scores.lock().expect("player store mutex poisoned")
    }
}

impl PlayerStore for InMemoryPlayerStore {
    fn player_score(&self, name: &str) -> u64 {
        self.scores().wins.get(name).copied().unwrap_or(0)
    }

    fn record_win(&self, name: &str) -> Result<()> {
        let mut scores = self.scores();
        let current = scores.wins.get(name).copied().unwrap_or(0);
        let wins = current
            .checked_add(1)
            .ok_or_else(|| StoreError::WinsOverflow {
                player: name.to_string(),
            })?;
        scores.wins.insert(name.to_string(), wins);
        scores.league.record_win(name);
        debug!(player = name, wins, "recorded win");
        Ok(())
    }

    /// Players in the order of their first win; not sorted.
    fn league(&self) -> League {
        self.scores().league.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::league::Player;

    #[test]
    fn unknown_player_scores_zero() {
        let store = InMemoryPlayerStore::new();
        assert_eq!(store.player_score("Apollo"), 0);
    }

    #[test]
    fn score_counts_recorded_wins() {
        let store = InMemoryPlayerStore::new();
        for _ in 0..3 {
            store.record_win("Pepper").unwrap();
        }
        store.record_win("Floyd").unwrap();

        assert_eq!(store.player_score("Pepper"), 3);
        assert_eq!(store.player_score("Floyd"), 1);
        assert_eq!(store.player_score("pepper"), 0);
    }

    #[test]
    fn league_is_empty_before_any_win() {
        assert!(InMemoryPlayerStore::new().league().is_empty());
    }

    #[test]
    fn league_tracks_recorded_wins_in_first_win_order() {
        let store = InMemoryPlayerStore::new();
        store.record_win("Cleo").unwrap();
        store.record_win("Pepper").unwrap();
        store.record_win("Pepper").unwrap();

        assert_eq!(
            store.league().players(),
            &[Player::new("Cleo", 1), Player::new("Pepper", 2)]
        );
    }

    #[test]
    fn win_at_max_count_is_rejected_and_store_keeps_serving() {
        let store = InMemoryPlayerStore::new();
        store.scores().wins.insert("Max".to_string(), u64::MAX);

        let err = store.record_win("Max").unwrap_err();
        assert!(matches!(err, StoreError::WinsOverflow { ref player } if player == "Max"));
        assert_eq!(store.player_score("Max"), u64::MAX);
        assert!(store.league().is_empty());

        store.record_win("Other").unwrap();
        assert_eq!(store.player_score("Other"), 1);
    }

    #[test]
    fn concurrent_wins_are_all_counted() {
        let store = Arc::new(InMemoryPlayerStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..125 {
                        store.record_win("Pepper").unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.player_score("Pepper"), 1000);
        assert_eq!(store.league().find("Pepper").unwrap().wins, 1000);
    }
}
