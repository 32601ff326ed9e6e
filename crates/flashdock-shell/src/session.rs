use tracing::{debug, info};

use flashdock_profile::{file_type, FileStore, GameId, GameRecord, GuestStore, Profile, ProfileStore};
use flashdock_scratch::{Origin, ScratchStore};

use crate::{Catalog, CatalogEntry, Clock, Navigator, PickerOptions, ProfilePicker, Result, ShellError, SortMode};

/// Result of a profile-create attempt. The non-`Created` variants are the
/// original UI's silent reactions, surfaced so a front end can act on them
/// (refocus the name input, do nothing on a dismissed dialog).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    EmptyName,
    Dismissed,
}

/// Result of a profile-load attempt. A corrupt or unreadable file is an
/// error, not an outcome; it propagates and leaves no profile adopted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Dismissed,
}

/// The launcher shell: owns the catalog, the live profile and its store, the
/// shared scratch store, and the session state machine.
///
/// Session states: Idle (`current == None`), Active (`current == Some(id)`
/// with the hash mirroring it). `launch` is the only Idle → Active edge;
/// clearing the hash is the only way back.
pub struct Shell<N, S, P, C> {
    catalog: Catalog,
    origin: Origin,
    nav: N,
    scratch: S,
    picker: P,
    clock: C,
    profile: Option<Profile>,
    store: Option<Box<dyn ProfileStore>>,
    current: Option<GameId>,
}

impl<N, S, P, C> Shell<N, S, P, C>
where
    N: Navigator,
    S: ScratchStore,
    P: ProfilePicker,
    C: Clock,
{
    /// Build the shell around its seams. Any hash left over in the URL from
    /// a previous session is cleared up front.
    pub fn new(catalog: Catalog, origin: Origin, mut nav: N, scratch: S, picker: P, clock: C) -> Self {
        if !nav.hash().is_empty() {
            nav.set_hash("");
        }
        Self {
            catalog,
            origin,
            nav,
            scratch,
            picker,
            clock,
            profile: None,
            store: None,
            current: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn current(&self) -> Option<&GameId> {
        self.current.as_ref()
    }

    pub fn nav(&self) -> &N {
        &self.nav
    }

    /// External hash edits in tests and native hosts go through here; in a
    /// browser host the binding layer assigns `location.hash` instead.
    pub fn nav_mut(&mut self) -> &mut N {
        &mut self.nav
    }

    pub fn scratch(&self) -> &S {
        &self.scratch
    }

    /// The emulator's side of the shared store: play sessions write their
    /// save state through this.
    pub fn scratch_mut(&mut self) -> &mut S {
        &mut self.scratch
    }

    /// Whether saves actually reach a file (false before login and in guest
    /// mode).
    pub fn is_persistent(&self) -> bool {
        self.store.as_ref().is_some_and(|store| store.is_persistent())
    }

    /// Filtered/sorted library view for the current profile; an empty view
    /// before login.
    pub fn results(&self, query: &str, sort: SortMode) -> Vec<&CatalogEntry> {
        match &self.profile {
            Some(profile) => self.catalog.results(query, sort, profile),
            None => Vec::new(),
        }
    }

    /// Create a new profile: ask for a save location, then persist
    /// `{name, games: {}}` immediately.
    pub fn create_profile(&mut self, name: &str) -> Result<CreateOutcome> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(CreateOutcome::EmptyName);
        }
        let options = PickerOptions::profile(Some(file_type::suggested_file_name(name)));
        let Some(path) = self.picker.pick_save(&options) else {
            return Ok(CreateOutcome::Dismissed);
        };

        let mut store = FileStore::new(path);
        let profile = Profile::new(name);
        store.save(&profile)?;
        info!(name = %profile.name, "profile created");
        self.adopt(profile, Box::new(store));
        Ok(CreateOutcome::Created)
    }

    /// Load an existing profile file and immediately re-save it (deliberate
    /// normalization touch). Parse failures propagate; nothing is adopted.
    pub fn load_profile(&mut self) -> Result<LoadOutcome> {
        let options = PickerOptions::profile(None);
        let Some(path) = self.picker.pick_open(&options) else {
            return Ok(LoadOutcome::Dismissed);
        };

        let mut store = FileStore::new(path);
        let profile = store.load()?;
        store.save(&profile)?;
        info!(name = %profile.name, games = profile.games.len(), "profile loaded");
        self.adopt(profile, Box::new(store));
        Ok(LoadOutcome::Loaded)
    }

    /// Enter guest mode: an ephemeral in-memory profile, no persistence.
    pub fn enter_guest(&mut self) {
        info!("guest session started");
        self.adopt(Profile::guest(), Box::new(GuestStore));
    }

    fn adopt(&mut self, profile: Profile, store: Box<dyn ProfileStore>) {
        self.profile = Some(profile);
        self.store = Some(store);
    }

    /// Persist the live profile through the bound store (a no-op store in
    /// guest mode).
    pub fn save_profile(&mut self) -> Result<()> {
        let profile = self.profile.as_ref().ok_or(ShellError::NoProfile)?;
        let store = self.store.as_mut().ok_or(ShellError::NoProfile)?;
        store.save(profile)?;
        Ok(())
    }

    /// Launch a game: wipe the shared scratch store, replay any previously
    /// captured save state for `id`, stamp the record, and go Active.
    ///
    /// The unconditional wipe is the clean-slate policy for the shared
    /// store, not an accident: the store is global across games, so anything
    /// left in it belongs to some other game's session.
    pub fn launch(&mut self, id: &GameId) -> Result<()> {
        if self.profile.is_none() {
            return Err(ShellError::NoProfile);
        }
        self.scratch.clear();

        let now = self.clock.now_millis();
        let profile = self.profile.as_mut().ok_or(ShellError::NoProfile)?;
        let replay = match profile.games.get_mut(id) {
            Some(record) if record.data.is_some() => {
                record.time = now;
                record.data.clone()
            }
            _ => {
                profile.games.insert(id.clone(), GameRecord::played_at(now));
                None
            }
        };
        let restored = replay.as_ref().map_or(0, |data| data.len());
        if let Some(data) = &replay {
            self.scratch
                .replay(data.iter().map(|(key, value)| (key.as_str(), value.as_str())))?;
        }

        self.current = Some(id.clone());
        self.nav.set_hash(&format!("#{id}"));
        info!(game = %id, restored, "game launched");
        self.save_profile()
    }

    /// Hash-change event handler, including the hash guard: while a profile
    /// is loaded the hash may only be empty or mirror `current`; anything
    /// else is reset to empty, which takes the Active → Idle transition in
    /// the same call. With no profile, any hash is simply cleared.
    pub fn on_hash_change(&mut self) -> Result<()> {
        let hash = self.nav.hash();
        if self.profile.is_none() {
            if !hash.is_empty() {
                self.nav.set_hash("");
            }
            return Ok(());
        }

        if !hash.is_empty() {
            let mirrored = self
                .current
                .as_ref()
                .is_some_and(|id| hash == format!("#{id}"));
            if mirrored {
                return Ok(());
            }
            debug!(%hash, "rejecting foreign hash");
            self.nav.set_hash("");
        }
        self.close_current()
    }

    /// Storage-change notification from the embedded emulator: capture the
    /// active game's scratch state mid-play without leaving Active.
    pub fn on_scratch_change(&mut self) -> Result<()> {
        if self.profile.is_none() {
            return Ok(());
        }
        let id = self.current.clone();
        self.harvest(id.as_ref())
    }

    /// Active → Idle: scroll the library back up, harvest the closing game,
    /// clear `current`.
    fn close_current(&mut self) -> Result<()> {
        self.nav.scroll_to_top();
        let id = self.current.clone();
        if let Some(id) = &id {
            info!(game = %id, "game closed");
        }
        self.harvest(id.as_ref())?;
        self.current = None;
        Ok(())
    }

    /// Capture every origin-prefixed scratch entry into the record for `id`,
    /// then persist.
    ///
    /// The record is replaced whole (never merged) when the snapshot has at
    /// least one key; an empty snapshot leaves the existing record — and any
    /// prior `data` — untouched. Ids that are absent or no longer in the
    /// catalog are ignored, which covers harvests fired after a profile or
    /// library swap.
    fn harvest(&mut self, id: Option<&GameId>) -> Result<()> {
        let Some(id) = id else {
            return Ok(());
        };
        if !self.catalog.contains(id) {
            debug!(game = %id, "skipping harvest for unknown game");
            return Ok(());
        }

        let snapshot = self.scratch.snapshot(&self.origin);
        let profile = self.profile.as_mut().ok_or(ShellError::NoProfile)?;
        if !snapshot.is_empty() {
            let now = self.clock.now_millis();
            info!(game = %id, keys = snapshot.len(), "scratch harvested");
            profile.games.insert(
                id.clone(),
                GameRecord {
                    time: now,
                    data: Some(snapshot),
                },
            );
        }
        self.save_profile()
    }
}
