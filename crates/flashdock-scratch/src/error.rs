use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScratchError>;

/// Failures surfaced by scratch store backends.
///
/// [`ScratchError::Backend`] stores a human-readable `String` rather than a
/// platform error type so browser backends can forward failures originating
/// from JavaScript/DOM APIs.
#[derive(Debug, Error)]
pub enum ScratchError {
    #[error("storage quota exceeded")]
    QuotaExceeded,

    #[error("scratch backend failure: {0}")]
    Backend(String),
}
