use serde::Deserialize;

use flashdock_profile::{GameId, Profile};

use crate::{Result, ShellError};

/// One game in the static library feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub id: GameId,
    pub name: String,
}

/// The game library: an ordered, read-only sequence fetched once at startup.
/// There is no write path back to the feed.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

/// Library ordering modes. `PlayedTime` is the startup default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    GameName,
    #[default]
    PlayedTime,
}

impl SortMode {
    /// The other mode; the UI sort button flips between the two.
    pub fn toggled(self) -> Self {
        match self {
            SortMode::GameName => SortMode::PlayedTime,
            SortMode::PlayedTime => SortMode::GameName,
        }
    }
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Parse the JSON library feed (an array of `{id, name}` objects).
    pub fn from_json(text: &str) -> Result<Self> {
        let entries = serde_json::from_str(text).map_err(ShellError::Catalog)?;
        Ok(Self { entries })
    }

    pub fn contains(&self, id: &GameId) -> bool {
        self.entries.iter().any(|entry| &entry.id == id)
    }

    pub fn get(&self, id: &GameId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Filtered and sorted view of the library, as shown in the UI.
    ///
    /// A blank query matches everything; otherwise case-insensitive substring
    /// match on the game name. `PlayedTime` orders by last-played timestamp
    /// descending (never-played counts as 0, ties keep feed order);
    /// `GameName` orders by case-folded name.
    pub fn results(&self, query: &str, sort: SortMode, profile: &Profile) -> Vec<&CatalogEntry> {
        let query = query.trim().to_lowercase();
        let mut results: Vec<&CatalogEntry> = self
            .entries
            .iter()
            .filter(|entry| query.is_empty() || entry.name.to_lowercase().contains(&query))
            .collect();
        match sort {
            SortMode::GameName => {
                results.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            }
            SortMode::PlayedTime => {
                results.sort_by(|a, b| {
                    let time_a = profile.last_played(&a.id).unwrap_or(0);
                    let time_b = profile.last_played(&b.id).unwrap_or(0);
                    time_b.cmp(&time_a)
                });
            }
        }
        results
    }

    /// Cover-art location for a library tile.
    pub fn artwork_path(id: &GameId) -> String {
        format!("./games/sources/{id}.jpg")
    }
}
