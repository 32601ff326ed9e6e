//! Per-game player bootstrap.
//!
//! A disposable initialization routine for the page that actually hosts the
//! Flash emulator. It never talks to the launcher shell: its only inputs are
//! the navigation query string (which game to load) and the shared scratch
//! store the emulator uses on its own. This crate resolves the query into a
//! target asset URL plus the locked-down emulator configuration; mounting the
//! actual player element is the host binding's job.

use serde::Serialize;
use thiserror::Error;
use url::form_urlencoded;

/// Asset directory, relative to the player page.
pub const ASSET_DIR: &str = "./sources";

/// Query parameter naming the game to load.
pub const ID_PARAM: &str = "id";

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("missing `{ID_PARAM}` query parameter")]
    MissingId,
}

/// Emulator-wide settings applied before any game loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmulatorConfig {
    pub context_menu: ContextMenu,
    pub allow_networking: Networking,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            context_menu: ContextMenu::Off,
            allow_networking: Networking::None,
        }
    }
}

/// Per-load options handed to the player element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadOptions {
    pub autoplay: Autoplay,
    pub unmute_overlay: UnmuteOverlay,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextMenu {
    On,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Networking {
    All,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Autoplay {
    On,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmuteOverlay {
    Visible,
    Hidden,
}

/// Page-level lockdown applied alongside the emulator: the game surface gets
/// no console, no popups, and no network once its asset has loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLockdown {
    pub silence_console: bool,
    pub block_popups: bool,
    pub block_fetch_after_load: bool,
}

impl Default for PageLockdown {
    fn default() -> Self {
        Self {
            silence_console: true,
            block_popups: true,
            block_fetch_after_load: true,
        }
    }
}

/// Everything the host binding needs to mount one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bootstrap {
    pub game_id: String,
    pub emulator: EmulatorConfig,
    pub load: LoadOptions,
    pub lockdown: PageLockdown,
}

impl Bootstrap {
    /// Resolve a navigation query string (with or without the leading `?`)
    /// into a full bootstrap. The only recognized parameter is `id`.
    pub fn from_query(query: &str) -> Result<Self, BootstrapError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let id = form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == ID_PARAM)
            .map(|(_, value)| value.into_owned())
            .ok_or(BootstrapError::MissingId)?;
        Ok(Self::for_game(&id))
    }

    pub fn for_game(id: &str) -> Self {
        Self {
            game_id: id.to_owned(),
            emulator: EmulatorConfig::default(),
            load: LoadOptions {
                autoplay: Autoplay::On,
                unmute_overlay: UnmuteOverlay::Hidden,
                url: asset_url(id),
            },
            lockdown: PageLockdown::default(),
        }
    }
}

/// Movie location for a game id, relative to the player page.
pub fn asset_url(id: &str) -> String {
    format!("{ASSET_DIR}/{id}.swf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_id_selects_the_asset() {
        let bootstrap = Bootstrap::from_query("?id=gravity-one").expect("bootstrap");
        assert_eq!(bootstrap.game_id, "gravity-one");
        assert_eq!(bootstrap.load.url, "./sources/gravity-one.swf");
    }

    #[test]
    fn query_without_leading_question_mark_works() {
        let bootstrap = Bootstrap::from_query("v=2&id=g1").expect("bootstrap");
        assert_eq!(bootstrap.game_id, "g1");
    }

    #[test]
    fn percent_encoded_ids_are_decoded() {
        let bootstrap = Bootstrap::from_query("?id=space%20game").expect("bootstrap");
        assert_eq!(bootstrap.game_id, "space game");
        assert_eq!(bootstrap.load.url, "./sources/space game.swf");
    }

    #[test]
    fn missing_id_is_an_error() {
        assert!(matches!(
            Bootstrap::from_query("?game=g1"),
            Err(BootstrapError::MissingId)
        ));
        assert!(matches!(
            Bootstrap::from_query(""),
            Err(BootstrapError::MissingId)
        ));
    }

    #[test]
    fn lockdown_defaults_are_all_on() {
        let bootstrap = Bootstrap::for_game("g1");
        assert_eq!(bootstrap.emulator.context_menu, ContextMenu::Off);
        assert_eq!(bootstrap.emulator.allow_networking, Networking::None);
        assert_eq!(bootstrap.load.autoplay, Autoplay::On);
        assert_eq!(bootstrap.load.unmute_overlay, UnmuteOverlay::Hidden);
        assert!(bootstrap.lockdown.silence_console);
        assert!(bootstrap.lockdown.block_popups);
        assert!(bootstrap.lockdown.block_fetch_after_load);
    }

    #[test]
    fn config_serializes_in_camel_case_for_the_js_side() {
        let json = serde_json::to_value(Bootstrap::for_game("g1")).expect("serialize");
        assert_eq!(json["emulator"]["contextMenu"], "off");
        assert_eq!(json["emulator"]["allowNetworking"], "none");
        assert_eq!(json["load"]["autoplay"], "on");
        assert_eq!(json["load"]["unmuteOverlay"], "hidden");
    }
}
