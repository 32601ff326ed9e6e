//! The single accepted profile file type.
//!
//! The pickers accept exactly one extension/MIME pair; the "accept all"
//! fallback is disabled.

pub const EXTENSION: &str = "fp";
pub const MIME: &str = "application/x-fp";
pub const DESCRIPTION: &str = "Flash Profile File";

/// Suggested file name for a new profile: the trimmed profile name with
/// spaces replaced by underscores (no extension; the picker appends it).
pub fn suggested_file_name(profile_name: &str) -> String {
    profile_name.trim().replace(' ', "_")
}
