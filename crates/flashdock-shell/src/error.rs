use thiserror::Error;

use flashdock_profile::ProfileError;
use flashdock_scratch::ScratchError;

pub type Result<T> = std::result::Result<T, ShellError>;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Scratch(#[from] ScratchError),

    #[error("invalid catalog feed: {0}")]
    Catalog(#[source] serde_json::Error),

    /// An operation that requires a live profile ran without one. The UI
    /// gates these operations behind login, so reaching this is a host bug.
    #[error("no profile loaded")]
    NoProfile,
}
