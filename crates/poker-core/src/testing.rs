// Test doubles shared by the server and CLI test suites.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::Result;
use crate::league::League;
use crate::store::PlayerStore;

/// Store with canned scores and league that records every `record_win` call
/// instead of applying it.
#[derive(Debug, Default)]
pub struct StubPlayerStore {
    scores: HashMap<String, u64>,
    league: League,
    win_calls: Mutex<Vec<String>>,
}

impl StubPlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scores<I, S>(scores: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        Self {
            scores: scores.into_iter().map(|(n, w)| (n.into(), w)).collect(),
            ..Self::default()
        }
    }

    pub fn with_league(league: League) -> Self {
        Self {
            league,
            ..Self::default()
        }
    }

    /// Names passed to `record_win`, in call order.
    pub fn win_calls(&self) -> Vec<String> {
        self.win_calls.lock().expect("stub mutex poisoned").clone()
    }

    /// Panics unless exactly one win was recorded, for `winner`.
    #[track_caller]
    pub fn assert_player_win(&self, winner: &str) {
        let calls = self.win_calls();
        assert_eq!(
            calls.len(),
            1,
            "got {} calls to record_win, want 1: {calls:?}",
            calls.len()
        );
        assert_eq!(calls[0], winner, "did not record the correct winner");
    }
}

impl PlayerStore for StubPlayerStore {
    fn player_score(&self, name: &str) -> u64 {
        self.scores.get(name).copied().unwrap_or(0)
    }

    fn record_win(&self, name: &str) -> Result<()> {
        self.win_calls
            .lock()
            .expect("stub mutex poisoned")
            .push(name.to_string());
        Ok(())
    }

    fn league(&self) -> League {
        self.league.clone()
    }
}
