use std::path::PathBuf;

use flashdock_profile::file_type;

/// Options handed to the file dialogs. Single accepted type, no "all files"
/// fallback, no multi-select.
#[derive(Debug, Clone)]
pub struct PickerOptions {
    pub description: &'static str,
    pub extension: &'static str,
    pub mime: &'static str,
    /// Save dialogs only: pre-filled file name.
    pub suggested_name: Option<String>,
}

impl PickerOptions {
    /// The profile file type, optionally with a suggested save name.
    pub fn profile(suggested_name: Option<String>) -> Self {
        Self {
            description: file_type::DESCRIPTION,
            extension: file_type::EXTENSION,
            mime: file_type::MIME,
            suggested_name,
        }
    }
}

/// Seam over the save-as / open file dialogs.
///
/// `None` means the user dismissed the dialog; the calling flow ends there
/// with no retry and no error surfaced.
pub trait ProfilePicker {
    fn pick_save(&mut self, options: &PickerOptions) -> Option<PathBuf>;

    fn pick_open(&mut self, options: &PickerOptions) -> Option<PathBuf>;
}

/// Non-interactive picker that always resolves to preconfigured paths.
/// Used by the CLI harness and tests.
#[derive(Debug, Default)]
pub struct FixedPicker {
    pub save: Option<PathBuf>,
    pub open: Option<PathBuf>,
}

impl FixedPicker {
    pub fn saving_to(path: impl Into<PathBuf>) -> Self {
        Self {
            save: Some(path.into()),
            open: None,
        }
    }

    pub fn opening(path: impl Into<PathBuf>) -> Self {
        Self {
            save: None,
            open: Some(path.into()),
        }
    }
}

impl ProfilePicker for FixedPicker {
    fn pick_save(&mut self, _options: &PickerOptions) -> Option<PathBuf> {
        self.save.clone()
    }

    fn pick_open(&mut self, _options: &PickerOptions) -> Option<PathBuf> {
        self.open.clone()
    }
}

/// Picker for hosts without the file-dialog capability; every request is
/// dismissed, which confines the session to guest mode.
#[derive(Debug, Default)]
pub struct NoPicker;

impl ProfilePicker for NoPicker {
    fn pick_save(&mut self, _options: &PickerOptions) -> Option<PathBuf> {
        None
    }

    fn pick_open(&mut self, _options: &PickerOptions) -> Option<PathBuf> {
        None
    }
}
