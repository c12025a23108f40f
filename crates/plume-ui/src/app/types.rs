use std::path::PathBuf;

use plume_core::{Config, FontPreference, FontStore};

use crate::font::family_choices;

/// Startup options handed over by the binary.
#[derive(Debug)]
pub struct Flags {
    /// File to open on launch
    pub file: Option<PathBuf>,
    pub config: Config,
    /// Font store, already loaded
    pub fonts: FontStore,
}

/// Menus in the menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopMenu {
    File,
    Edit,
}

impl TopMenu {
    pub const ALL: [TopMenu; 2] = [TopMenu::File, TopMenu::Edit];

    pub fn label(&self) -> &'static str {
        match self {
            TopMenu::File => "File",
            TopMenu::Edit => "Edit",
        }
    }
}

/// State of the open settings dialog.
#[derive(Debug, Clone)]
pub struct SettingsDialog {
    pub families: Vec<String>,
    pub family: String,
    pub size_input: String,
    /// Validation message shown under the inputs
    pub error: Option<String>,
}

impl SettingsDialog {
    /// Opens the dialog pre-filled with `active`.
    pub fn new(active: &FontPreference) -> Self {
        Self {
            families: family_choices(active.family()),
            family: active.family().to_string(),
            size_input: active.size().to_string(),
            error: None,
        }
    }
}
