use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Profile, ProfileError, Result};

/// Persistence seam for the live profile.
///
/// Exactly one store is bound per session. Saves are issued after every
/// mutating operation; callers never retry a failed save.
pub trait ProfileStore {
    /// Serialize and persist the whole profile.
    fn save(&mut self, profile: &Profile) -> Result<()>;

    /// `false` for stores that discard writes (guest mode).
    fn is_persistent(&self) -> bool {
        true
    }
}

/// File-backed store: an exclusive handle on one physical profile file.
///
/// Each save is a full overwrite (open writable, write all, close). The
/// handle carries an explicit in-flight flag so an overlapping save on the
/// same handle fails with [`ProfileError::SaveInFlight`] rather than
/// interleaving two writes.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    in_flight: Cell<bool>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            in_flight: Cell::new(false),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the bound file. Malformed text surfaces as
    /// [`ProfileError::Corrupt`] and is not recovered here.
    pub fn load(&self) -> Result<Profile> {
        let text = fs::read_to_string(&self.path)?;
        let profile = Profile::from_json(&text)?;
        debug!(path = %self.path.display(), games = profile.games.len(), "profile loaded");
        Ok(profile)
    }
}

impl ProfileStore for FileStore {
    fn save(&mut self, profile: &Profile) -> Result<()> {
        if self.in_flight.replace(true) {
            return Err(ProfileError::SaveInFlight);
        }
        let result = (|| -> Result<()> {
            let text = profile.to_json()?;
            fs::write(&self.path, text)?;
            Ok(())
        })();
        self.in_flight.set(false);
        if result.is_ok() {
            debug!(path = %self.path.display(), games = profile.games.len(), "profile saved");
        }
        result
    }
}

/// Guest-mode store: every save is a no-op; the profile lives in memory only
/// and is discarded when the session ends.
#[derive(Debug, Default)]
pub struct GuestStore;

impl ProfileStore for GuestStore {
    fn save(&mut self, _profile: &Profile) -> Result<()> {
        Ok(())
    }

    fn is_persistent(&self) -> bool {
        false
    }
}
