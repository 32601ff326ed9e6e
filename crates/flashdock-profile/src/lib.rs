//! Profile data model and persistence for the launcher.
//!
//! A profile is the user's play history plus per-game saved scratch state,
//! persisted verbatim as UTF-8 JSON to a user-chosen `.fp` file. Exactly one
//! profile is live per session; guest sessions hold one in memory only.
//!
//! - [`Profile`] / [`GameRecord`] / [`GameId`]: the persisted schema
//! - [`ProfileStore`]: the persistence seam ([`FileStore`] native-file backed,
//!   [`GuestStore`] a no-op)
//! - [`file_type`]: the fixed picker/file-type constants

mod error;
pub mod file_type;
mod store;
mod types;

pub use crate::error::{ProfileError, Result};
pub use crate::store::{FileStore, GuestStore, ProfileStore};
pub use crate::types::{GameId, GameRecord, Profile};
