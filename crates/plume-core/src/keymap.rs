//! Keyboard shortcuts.
//!
//! Bindings are single key presses (no chords). Defaults cover the file
//! commands and undo/redo; the `[keyboard.bindings]` config table can add
//! or replace entries, e.g. `"ctrl+shift+s" = "save-as"`.

use std::collections::HashMap;
use std::fmt;

use crate::command::Command;
use crate::config::Config;
use crate::{CoreError, CoreResult};

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool, // Cmd on macOS, Win on Windows
}

impl Modifiers {
    /// No modifiers pressed.
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    /// Ctrl modifier.
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        alt: false,
        shift: false,
        meta: false,
    };

    /// Ctrl+Shift.
    pub const CTRL_SHIFT: Modifiers = Modifiers {
        ctrl: true,
        alt: false,
        shift: true,
        meta: false,
    };

    /// Returns true if no modifiers are pressed.
    pub fn is_empty(&self) -> bool {
        !self.ctrl && !self.alt && !self.shift && !self.meta
    }

    /// Sets the modifier named by one `+`-separated token.
    fn set(&mut self, token: &str) -> bool {
        match token {
            "ctrl" | "control" => self.ctrl = true,
            "alt" | "option" => self.alt = true,
            "shift" => self.shift = true,
            "meta" | "cmd" | "super" | "win" => self.meta = true,
            _ => return false,
        }
        true
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.alt {
            parts.push("Alt");
        }
        if self.shift {
            parts.push("Shift");
        }
        if self.meta {
            #[cfg(target_os = "macos")]
            parts.push("Cmd");
            #[cfg(not(target_os = "macos"))]
            parts.push("Win");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// A key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    Escape,
    F(u8), // F1-F12
}

impl Key {
    /// Parses a key name. Single characters are lowercased.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "enter" | "return" => Some(Key::Enter),
            "tab" => Some(Key::Tab),
            "escape" | "esc" => Some(Key::Escape),
            _ if lower.starts_with('f') && lower.len() > 1 && lower.len() <= 3 => {
                lower[1..].parse().ok().filter(|n| (1..=12).contains(n)).map(Key::F)
            }
            _ => {
                let mut chars = lower.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Key::Char(c)),
                    _ => None,
                }
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c.to_uppercase()),
            Key::Enter => write!(f, "Enter"),
            Key::Tab => write!(f, "Tab"),
            Key::Escape => write!(f, "Escape"),
            Key::F(n) => write!(f, "F{}", n),
        }
    }
}

/// A key press event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    /// Creates a new key press.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Parses a binding string like "ctrl+s" or "ctrl+shift+s".
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        let mut parts: Vec<&str> = lower.split('+').map(str::trim).collect();
        // "ctrl++" binds the plus key
        if lower.ends_with("++") {
            parts.truncate(parts.len() - 2);
            parts.push("+");
        }

        let key = Key::parse(parts.pop()?)?;
        let mut modifiers = Modifiers::NONE;
        for token in parts {
            if !modifiers.set(token) {
                return None;
            }
        }
        Some(Self { key, modifiers })
    }
}

impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.modifiers, self.key)
        }
    }
}

/// Maps key presses to commands.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<KeyPress, Command>,
}

impl Keymap {
    /// Creates a keymap with the default bindings.
    pub fn new() -> Self {
        use Command::*;

        let defaults = [
            (Key::Char('n'), Modifiers::CTRL, NewDocument),
            (Key::Char('o'), Modifiers::CTRL, OpenDocument),
            (Key::Char('s'), Modifiers::CTRL, SaveDocument),
            (Key::Char('s'), Modifiers::CTRL_SHIFT, SaveAs),
            (Key::Char('q'), Modifiers::CTRL, Exit),
            (Key::Char('z'), Modifiers::CTRL, Undo),
            (Key::Char('y'), Modifiers::CTRL, Redo),
        ];

        let bindings = defaults
            .into_iter()
            .map(|(key, modifiers, cmd)| (KeyPress::new(key, modifiers), cmd))
            .collect();
        Self { bindings }
    }

    /// Creates the default keymap with the config's bindings layered on top.
    ///
    /// Invalid entries are logged and skipped.
    pub fn from_config(config: &Config) -> Self {
        let mut keymap = Self::new();
        for (key_str, cmd_str) in &config.keyboard.bindings {
            if let Err(e) = keymap.bind_str(key_str, cmd_str) {
                tracing::warn!("Ignoring key binding {:?} = {:?}: {}", key_str, cmd_str, e);
            }
        }
        keymap
    }

    /// Binds `key` to `command`, replacing any existing binding for `key`.
    pub fn bind(&mut self, key: KeyPress, command: Command) {
        self.bindings.insert(key, command);
    }

    /// Parses and binds a `("ctrl+s", "save-document")` pair.
    pub fn bind_str(&mut self, key: &str, command: &str) -> CoreResult<()> {
        let press = KeyPress::parse(key).ok_or_else(|| CoreError::InvalidKeyBinding(key.to_string()))?;
        let command = command.parse()?;
        self.bind(press, command);
        Ok(())
    }

    /// Returns the command bound to `press`.
    pub fn lookup(&self, press: &KeyPress) -> Option<Command> {
        self.bindings.get(press).copied()
    }

    /// Returns a key bound to `command`, for menu hints.
    ///
    /// When several keys map to the command, the shortest label wins so the
    /// hint is stable.
    pub fn shortcut_for(&self, command: Command) -> Option<KeyPress> {
        self.bindings
            .iter()
            .filter(|(_, cmd)| **cmd == command)
            .map(|(press, _)| *press)
            .min_by_key(|press| (press.to_string().len(), press.to_string()))
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}
