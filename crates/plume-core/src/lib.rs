//! # Plume Core
//!
//! Document session, font preferences and command dispatch.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Command Surface (UI)                    │
//! │        ribbon buttons · File menu · key bindings         │
//! └──────────────────────────┬───────────────────────────────┘
//!                            │ Command::dispatch
//!          ┌─────────────────┴─────────────────┐
//!          ▼                                   ▼
//! ┌──────────────────┐               ┌──────────────────────┐
//! │ Document Session │               │ Font Preference Store│
//! │  path · dirty    │               │   family · size      │
//! └───┬──────────┬───┘               └──────────┬───────────┘
//!     │          │                              │
//!     ▼          ▼                              ▼
//! TextSurface  FileStore ◄──────────────────────┘
//! ```
//!
//! The UI owns one `Session` and one `FontStore`, both built at startup.
//! Everything here is synchronous and single-threaded.

pub mod command;
pub mod config;
pub mod font;
pub mod keymap;
pub mod session;
pub mod store;
pub mod surface;

pub use command::{Command, CommandTarget, MenuEntry};
pub use config::Config;
pub use font::{FontError, FontPreference, FontStore};
pub use keymap::{Key, KeyPress, Keymap, Modifiers};
pub use session::{SaveOutcome, Session};
pub use store::{FileStore, LocalFileStore};
pub use surface::TextSurface;

use std::path::PathBuf;

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Command not found: {0}")]
    CommandNotFound(String),

    #[error("Invalid key binding: {0}")]
    InvalidKeyBinding(String),
}
