//! Commands and the dispatch table.
//!
//! ## Learning: The Command Pattern
//!
//! Every ribbon button, menu entry and key binding produces the same
//! `Command` value. The UI implements [`CommandTarget`] once, and
//! [`Command::dispatch`] is the single table that routes a command to the
//! handler for it. A button and its menu twin cannot drift apart.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// User-level editor commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    NewDocument,
    OpenDocument,
    SaveDocument,
    SaveAs,
    SaveAndExit,
    Settings,
    Exit,
    Undo,
    Redo,
}

impl Command {
    /// Every command, in menu order.
    pub const ALL: [Command; 9] = [
        Command::NewDocument,
        Command::OpenDocument,
        Command::SaveDocument,
        Command::SaveAs,
        Command::SaveAndExit,
        Command::Settings,
        Command::Exit,
        Command::Undo,
        Command::Redo,
    ];

    /// Stable identifier used in config files.
    pub fn id(&self) -> &'static str {
        match self {
            Command::NewDocument => "new-document",
            Command::OpenDocument => "open-document",
            Command::SaveDocument => "save-document",
            Command::SaveAs => "save-as",
            Command::SaveAndExit => "save-and-exit",
            Command::Settings => "settings",
            Command::Exit => "exit",
            Command::Undo => "undo",
            Command::Redo => "redo",
        }
    }

    /// Menu label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Command::NewDocument => "New Document",
            Command::OpenDocument => "Open Document",
            Command::SaveDocument => "Save Document",
            Command::SaveAs => "Save As...",
            Command::SaveAndExit => "Save and Exit",
            Command::Settings => "Settings",
            Command::Exit => "Exit",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
        }
    }

    /// Short label for ribbon buttons.
    pub fn ribbon_label(&self) -> &'static str {
        match self {
            Command::NewDocument => "New",
            Command::OpenDocument => "Open",
            Command::SaveDocument => "Save",
            Command::SaveAs => "Save As",
            other => other.display_name(),
        }
    }

    /// Routes this command to its handler on `target`.
    pub fn dispatch<T: CommandTarget + ?Sized>(self, target: &mut T) -> T::Output {
        match self {
            Command::NewDocument => target.new_document(),
            Command::OpenDocument => target.open_document(),
            Command::SaveDocument => target.save_document(),
            Command::SaveAs => target.save_as(),
            Command::SaveAndExit => target.save_and_exit(),
            Command::Settings => target.open_settings(),
            Command::Exit => target.exit(),
            Command::Undo => target.undo(),
            Command::Redo => target.redo(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Command {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Command::ALL
            .into_iter()
            .find(|cmd| cmd.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::CommandNotFound(s.to_string()))
    }
}

/// Something that can execute every [`Command`].
pub trait CommandTarget {
    type Output;

    fn new_document(&mut self) -> Self::Output;
    fn open_document(&mut self) -> Self::Output;
    fn save_document(&mut self) -> Self::Output;
    fn save_as(&mut self) -> Self::Output;
    fn save_and_exit(&mut self) -> Self::Output;
    fn open_settings(&mut self) -> Self::Output;
    fn exit(&mut self) -> Self::Output;
    fn undo(&mut self) -> Self::Output;
    fn redo(&mut self) -> Self::Output;
}

/// A row in a drop-down menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Item(Command),
    Separator,
}

/// Buttons on the ribbon, left to right.
pub const RIBBON: &[Command] = &[
    Command::NewDocument,
    Command::OpenDocument,
    Command::SaveDocument,
    Command::SaveAs,
    Command::SaveAndExit,
    Command::Settings,
];

/// The File menu.
pub const FILE_MENU: &[MenuEntry] = &[
    MenuEntry::Item(Command::NewDocument),
    MenuEntry::Item(Command::OpenDocument),
    MenuEntry::Item(Command::SaveDocument),
    MenuEntry::Item(Command::SaveAs),
    MenuEntry::Item(Command::SaveAndExit),
    MenuEntry::Separator,
    MenuEntry::Item(Command::Settings),
    MenuEntry::Separator,
    MenuEntry::Item(Command::Exit),
];

/// The Edit menu.
pub const EDIT_MENU: &[MenuEntry] = &[
    MenuEntry::Item(Command::Undo),
    MenuEntry::Item(Command::Redo),
];
