// League model: the ordered list of players and their win counts, plus the
// JSON codec used by the file-backed store and the HTTP layer.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::error::LeagueError;

/// A named player and the number of games they have won.
///
/// The JSON field names (`Name`, `Wins`) are part of the persisted file format
/// and the HTTP response shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Wins")]
    pub wins: u64,
}

impl Player {
    pub fn new(name: impl Into<String>, wins: u64) -> Self {
        Self {
            name: name.into(),
            wins,
        }
    }
}

/// Ordered collection of players, unique by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct League(Vec<Player>);

impl League {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a league from the first JSON value in `reader`.
    ///
    /// An empty (or whitespace-only) stream and a literal `null` both decode to
    /// an empty league. Anything after the first value is ignored.
    pub fn load_from<R: Read>(reader: R) -> Result<Self, LeagueError> {
        let mut values =
            serde_json::Deserializer::from_reader(reader).into_iter::<Option<Vec<Player>>>();

        match values.next() {
            None => Ok(Self::new()),
            Some(Ok(players)) => Ok(Self(players.unwrap_or_default())),
            Some(Err(e)) => Err(LeagueError::Parse(e)),
        }
    }

    /// Encode the league as a JSON array of `{"Name", "Wins"}` objects.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), LeagueError> {
        serde_json::to_writer(writer, self).map_err(LeagueError::Encode)
    }

    /// First player whose name matches exactly (case-sensitive).
    pub fn find(&self, name: &str) -> Option<&Player> {
        self.0.iter().find(|p| p.name == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.0.iter_mut().find(|p| p.name == name)
    }

    /// Increment `name`'s wins, appending the player with one win if absent.
    /// Returns the new win count, or `None` (leaving the league untouched) when
    /// the count is already at `u64::MAX`.
    pub fn record_win(&mut self, name: &str) -> Option<u64> {
        match self.find_mut(name) {
            Some(player) => {
                player.wins = player.wins.checked_add(1)?;
                Some(player.wins)
            }
            None => {
                self.0.push(Player::new(name, 1));
                Some(1)
            }
        }
    }

    /// Stable sort, most wins first. Players tied on wins keep their relative order.
    pub fn sort_by_wins(&mut self) {
        self.0.sort_by(|a, b| b.wins.cmp(&a.wins));
    }

    pub fn players(&self) -> &[Player] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Player>> for League {
    fn from(players: Vec<Player>) -> Self {
        Self(players)
    }
}

impl IntoIterator for League {
    type Item = Player;
    type IntoIter = std::vec::IntoIter<Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a League {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
