use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProfileError>;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// The file's text did not parse as the profile schema. Distinguished so
    /// callers can tell a corrupt profile from an I/O failure; never caught
    /// and recovered within a single user action.
    #[error("corrupt profile: {0}")]
    Corrupt(#[source] serde_json::Error),

    /// A save was issued while a previous save on the same handle had not
    /// finished. Overlapping writes are unsupported; the handle refuses the
    /// second write instead of interleaving them.
    #[error("a write to the profile file is already in flight")]
    SaveInFlight,
}
