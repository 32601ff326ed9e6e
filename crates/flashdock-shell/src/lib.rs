//! Launcher shell: the library catalog, the live profile, and the game
//! session coordinator that bridges the two across the shared scratch store.
//!
//! The shell is single-threaded and event-driven: every public method on
//! [`Shell`] corresponds to one discrete browser event (a click, a hash
//! change, a storage change, a picker resolution) and runs to completion
//! before the next. Browser-side capabilities are seams:
//!
//! - [`Navigator`]: the navigation hash plus the scroll-to-top signal
//! - [`ProfilePicker`]: the save/open file dialogs
//! - [`Clock`]: last-played timestamps
//! - [`ScratchStore`](flashdock_scratch::ScratchStore): the shared store the
//!   emulator writes during play

mod catalog;
mod clock;
mod error;
mod nav;
mod picker;
mod session;

pub use crate::catalog::{Catalog, CatalogEntry, SortMode};
pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::error::{Result, ShellError};
pub use crate::nav::{MemNav, Navigator};
pub use crate::picker::{FixedPicker, NoPicker, PickerOptions, ProfilePicker};
pub use crate::session::{CreateOutcome, LoadOutcome, Shell};
