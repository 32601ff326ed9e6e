use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ProfileError, Result};

/// Catalog/profile key for a single game.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Per-game progress record.
///
/// `time` is the last-played timestamp in milliseconds since the Unix epoch.
/// `data` appears only once a play session has produced scratch output; when
/// present, every key carries the origin prefix current at capture time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameRecord {
    pub time: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<BTreeMap<String, String>>,
}

impl GameRecord {
    /// Bare record for a game launched with no captured scratch state.
    pub fn played_at(time: u64) -> Self {
        Self { time, data: None }
    }
}

/// The root persisted object: the user's name plus every game ever launched.
///
/// Serialized verbatim to the profile file; the schema is strict, so text
/// with missing/extra fields fails as [`ProfileError::Corrupt`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub games: BTreeMap<GameId, GameRecord>,
}

pub const GUEST_NAME: &str = "Guest Mode";

impl Profile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            games: BTreeMap::new(),
        }
    }

    /// Ephemeral profile for a session with no file handle.
    pub fn guest() -> Self {
        Self::new(GUEST_NAME)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(ProfileError::Corrupt)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(ProfileError::Corrupt)
    }

    /// Last-played timestamp for `id`; `None` when never launched.
    pub fn last_played(&self, id: &GameId) -> Option<u64> {
        self.games.get(id).map(|record| record.time)
    }
}
