use std::path::PathBuf;

use iced::keyboard;
use iced::widget::text_editor;
use plume_core::Command;

use super::TopMenu;

#[derive(Debug, Clone)]
pub enum Message {
    /// Ribbon buttons, menu entries and shortcuts all end up here
    Command(Command),

    // Editor
    EditorAction(text_editor::Action),
    IndicatorClicked,

    // File dialogs
    OpenPicked(Option<PathBuf>),
    SaveAsPicked(Option<PathBuf>),

    // Menu bar
    ToggleTopMenu(TopMenu),
    CloseTopMenu,

    // Settings dialog
    SettingsFamilySelected(String),
    SettingsSizeChanged(String),
    SettingsConfirm,
    SettingsCancel,

    KeyPressed(keyboard::Key, keyboard::Modifiers),
}
