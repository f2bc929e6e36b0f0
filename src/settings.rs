//! Persisted user settings
//!
//! Settings are an ordinary value created once by the application and
//! passed to whatever needs them. The engine only reads and writes the
//! recently used player names through [`RecentPlayers`]; storing the
//! settings somewhere is the application's job.

use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{constants, player::Player};

/// Read/write access to the names of recent players
pub trait RecentPlayers {
    /// Returns the remembered names, most recent game first
    fn recent_player_names(&self) -> Vec<String>;

    /// Replaces the remembered names
    fn set_recent_player_names(&mut self, names: Vec<String>);
}

/// User settings that outlive a single game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(deserialize_with = "deserialize_capped_names")]
    recent_player_names: Vec<String>,
}

fn deserialize_capped_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut names = Vec::<String>::deserialize(deserializer)?;
    names.truncate(constants::settings::MAX_RECENT_PLAYERS);
    Ok(names)
}

impl Settings {
    /// Parses settings from JSON
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if `json` is not valid settings.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes settings to JSON
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl RecentPlayers for Settings {
    fn recent_player_names(&self) -> Vec<String> {
        self.recent_player_names.clone()
    }

    fn set_recent_player_names(&mut self, names: Vec<String>) {
        self.recent_player_names = names;
        self.recent_player_names
            .truncate(constants::settings::MAX_RECENT_PLAYERS);
    }
}

/// Creates fresh players from the remembered names
///
/// Blank names are skipped. Every call produces players with new ids and
/// zero scores.
pub fn recent_players<S: RecentPlayers + ?Sized>(storage: &S) -> Vec<Player> {
    storage
        .recent_player_names()
        .iter()
        .map(|name| Player::new(name))
        .filter(|player| !player.name().is_empty())
        .collect_vec()
}

/// Remembers the names of `players` for the next game
///
/// Blank and repeated names are dropped.
pub fn remember_players<S: RecentPlayers + ?Sized>(storage: &mut S, players: &[Player]) {
    storage.set_recent_player_names(
        players
            .iter()
            .map(Player::name)
            .filter(|name| !name.is_empty())
            .unique()
            .map(str::to_owned)
            .collect_vec(),
    );
}
