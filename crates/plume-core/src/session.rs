//! The document session: which file is open and whether it has unsaved edits.
//!
//! ## Lifecycle
//!
//! ```text
//!            on_edit
//!   clean ───────────► dirty
//!     ▲                  │
//!     └──────────────────┘
//!    new_document / open / save
//! ```
//!
//! The session does not own the text. Every operation that touches content
//! borrows the `TextSurface` for the duration of the call.

use std::path::{Path, PathBuf};

use crate::store::{FileStore, LocalFileStore};
use crate::surface::TextSurface;
use crate::{CoreError, CoreResult};

/// What `save` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Content was written to this path.
    Saved(PathBuf),
    /// No path is associated yet; the caller should run Save As.
    NeedsPath,
}

/// Current-file identity plus the dirty flag.
#[derive(Debug)]
pub struct Session<S = LocalFileStore> {
    store: S,
    current_path: Option<PathBuf>,
    dirty: bool,
    exit_requested: bool,
}

impl Session<LocalFileStore> {
    /// Creates a session backed by the local filesystem.
    pub fn new() -> Self {
        Self::with_store(LocalFileStore)
    }
}

impl Default for Session<LocalFileStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FileStore> Session<S> {
    /// Creates an untitled, clean session over `store`.
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            current_path: None,
            dirty: false,
            exit_requested: false,
        }
    }

    // ==================== State ====================

    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// Returns true if there are edits since the last new/open/save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The unsaved-changes indicator is shown exactly when the session is dirty.
    pub fn indicator_visible(&self) -> bool {
        self.dirty
    }

    /// Returns true while a save-and-exit is in flight.
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Returns the file name, or "Untitled".
    pub fn display_name(&self) -> String {
        self.current_path
            .as_deref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Window title, e.g. `notes.txt * - Plume`.
    pub fn title(&self, app_name: &str) -> String {
        let marker = if self.dirty { " *" } else { "" };
        format!("{}{} - {}", self.display_name(), marker, app_name)
    }

    // ==================== Operations ====================

    /// Starts a fresh untitled document.
    pub fn new_document(&mut self, surface: &mut impl TextSurface) {
        surface.clear();
        self.current_path = None;
        self.dirty = false;
        tracing::debug!("New document");
    }

    /// Loads `path` into the surface.
    ///
    /// On failure nothing changes: the surface keeps its content and the
    /// session keeps its path and dirty flag.
    pub fn open(&mut self, path: impl AsRef<Path>, surface: &mut impl TextSurface) -> CoreResult<()> {
        let path = path.as_ref();
        let content = self.store.read_to_string(path).map_err(|source| {
            tracing::warn!("Failed to open {}: {}", path.display(), source);
            CoreError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        surface.set_text(&content);
        self.current_path = Some(path.to_path_buf());
        self.dirty = false;
        tracing::info!("Opened {}", path.display());
        Ok(())
    }

    /// Writes the surface to the current path.
    ///
    /// Trailing whitespace is stripped from what gets written. Returns
    /// [`SaveOutcome::NeedsPath`] for an untitled document. A failed write
    /// leaves the session dirty.
    pub fn save(&mut self, surface: &impl TextSurface) -> CoreResult<SaveOutcome> {
        let Some(path) = self.current_path.clone() else {
            return Ok(SaveOutcome::NeedsPath);
        };
        self.write_to(path, surface).map(SaveOutcome::Saved)
    }

    /// Associates `path` with the document, then saves.
    ///
    /// The path sticks even if the write fails.
    pub fn save_as(&mut self, path: impl Into<PathBuf>, surface: &impl TextSurface) -> CoreResult<PathBuf> {
        let path = path.into();
        self.current_path = Some(path.clone());
        self.write_to(path, surface)
    }

    fn write_to(&mut self, path: PathBuf, surface: &impl TextSurface) -> CoreResult<PathBuf> {
        let content = surface.text();
        if let Err(source) = self.store.write(&path, content.trim_end()) {
            tracing::warn!("Failed to save {}: {}", path.display(), source);
            return Err(CoreError::Write { path, source });
        }

        self.dirty = false;
        tracing::info!("Saved {}", path.display());
        Ok(path)
    }

    /// Saves and marks the session for exit.
    ///
    /// The caller terminates once the save is done. For an untitled document
    /// the exit stays requested until the Save As flow finishes. A failed
    /// write withdraws the request.
    pub fn save_and_exit(&mut self, surface: &impl TextSurface) -> CoreResult<SaveOutcome> {
        self.exit_requested = true;
        let result = self.save(surface);
        if result.is_err() {
            self.exit_requested = false;
        }
        result
    }

    /// Withdraws a pending save-and-exit.
    pub fn cancel_exit(&mut self) {
        self.exit_requested = false;
    }

    /// Called on every content mutation of the surface.
    pub fn on_edit(&mut self) {
        if !self.dirty {
            tracing::trace!("Document became dirty");
        }
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plume_buffer::TextBuffer;
    use proptest::prelude::*;

    fn type_text(session: &mut Session, buffer: &mut TextBuffer, text: &str) {
        buffer.push_str(text);
        session.on_edit();
    }

    #[test]
    fn test_new_session_is_clean_and_untitled() {
        let session = Session::new();
        assert!(session.current_path().is_none());
        assert!(!session.is_dirty());
        assert!(!session.indicator_visible());
        assert_eq!(session.title("Plume"), "Untitled - Plume");
    }

    #[test]
    fn test_type_then_save_as() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");
        let mut session = Session::new();
        let mut buffer = TextBuffer::new();

        type_text(&mut session, &mut buffer, "Hello");
        assert!(session.indicator_visible());
        assert_eq!(session.title("Plume"), "Untitled * - Plume");

        let saved = session.save_as(&out, &buffer).unwrap();
        assert_eq!(saved, out);
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "Hello");
        assert!(!session.indicator_visible());
        assert_eq!(session.title("Plume"), "out.txt - Plume");
    }

    #[test]
    fn test_save_trims_trailing_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("trim.txt");
        let mut session = Session::new();
        let buffer = TextBuffer::from("  indented\nbody  \n\n\t ");

        session.save_as(&out, &buffer).unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "  indented\nbody");
    }

    #[test]
    fn test_save_without_path_needs_path() {
        let mut session = Session::new();
        let mut buffer = TextBuffer::new();
        type_text(&mut session, &mut buffer, "draft");

        assert_eq!(session.save(&buffer).unwrap(), SaveOutcome::NeedsPath);
        assert!(session.is_dirty());
    }

    #[test]
    fn test_round_trip_through_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        let mut session = Session::new();
        let mut buffer = TextBuffer::from("first line\nsecond line\n");
        session.on_edit();
        session.save_as(&path, &buffer).unwrap();

        session.new_document(&mut buffer);
        assert!(buffer.is_empty());
        assert!(session.current_path().is_none());

        session.open(&path, &mut buffer).unwrap();
        assert_eq!(buffer.text(), "first line\nsecond line");
        assert_eq!(session.current_path(), Some(path.as_path()));
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_open_missing_file_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new();
        let mut buffer = TextBuffer::from("keep me");
        session.on_edit();

        let err = session.open(dir.path().join("missing.txt"), &mut buffer).unwrap_err();
        assert!(matches!(err, CoreError::Read { .. }));
        assert_eq!(buffer.text(), "keep me");
        assert!(session.is_dirty());
        assert!(session.current_path().is_none());
    }

    #[test]
    fn test_failed_write_stays_dirty() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("no-such-dir").join("file.txt");
        let mut session = Session::new();
        let mut buffer = TextBuffer::new();
        type_text(&mut session, &mut buffer, "text");

        let err = session.save_as(&target, &buffer).unwrap_err();
        assert!(matches!(err, CoreError::Write { .. }));
        assert!(session.is_dirty());
        assert_eq!(session.current_path(), Some(target.as_path()));
    }

    #[test]
    fn test_save_and_exit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exit.txt");
        let mut session = Session::new();
        let mut buffer = TextBuffer::new();

        type_text(&mut session, &mut buffer, "bye");
        assert_eq!(session.save_and_exit(&buffer).unwrap(), SaveOutcome::NeedsPath);
        assert!(session.exit_requested());

        session.save_as(&path, &buffer).unwrap();
        assert!(session.exit_requested());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "bye");
    }

    #[test]
    fn test_save_and_exit_failure_withdraws_exit() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new();
        let mut buffer = TextBuffer::new();
        type_text(&mut session, &mut buffer, "x");
        session
            .save_as(dir.path().join("gone").join("x.txt"), &buffer)
            .unwrap_err();

        assert!(session.save_and_exit(&buffer).is_err());
        assert!(!session.exit_requested());
    }

    #[derive(Debug, Clone)]
    enum Step {
        Edit(String),
        New,
        Save,
        Open,
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            "[a-z \n]{0,8}".prop_map(Step::Edit),
            Just(Step::New),
            Just(Step::Save),
            Just(Step::Open),
        ]
    }

    proptest! {
        #[test]
        fn prop_dirty_tracks_last_event(steps in proptest::collection::vec(step(), 1..40)) {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("prop.txt");
            std::fs::write(&path, "seed").unwrap();

            let mut session = Session::new();
            let mut buffer = TextBuffer::new();

            for step in steps {
                match step {
                    Step::Edit(text) => {
                        buffer.push_str(&text);
                        session.on_edit();
                        prop_assert!(session.is_dirty());
                    }
                    Step::New => {
                        session.new_document(&mut buffer);
                        prop_assert!(!session.is_dirty());
                    }
                    Step::Save => {
                        session.save_as(&path, &buffer).unwrap();
                        prop_assert!(!session.is_dirty());
                    }
                    Step::Open => {
                        session.open(&path, &mut buffer).unwrap();
                        prop_assert!(!session.is_dirty());
                    }
                }
                prop_assert_eq!(session.indicator_visible(), session.is_dirty());
            }
        }

        #[test]
        fn prop_written_content_is_trimmed_text(body in "[a-z \n\t]{0,64}") {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("doc.txt");
            let mut session = Session::new();
            let mut buffer = TextBuffer::from(body.as_str());

            session.save_as(&path, &buffer).unwrap();
            prop_assert_eq!(std::fs::read_to_string(&path).unwrap(), body.trim_end());

            session.open(&path, &mut buffer).unwrap();
            prop_assert_eq!(buffer.text(), body.trim_end());
            prop_assert_eq!(session.title("Plume"), "doc.txt - Plume");
        }
    }
}
