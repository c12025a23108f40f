//! The editable text area as seen by the session.

use iced::widget::text_editor::{Action, Content};
use plume_buffer::History;
use plume_core::TextSurface;

/// iced editor content plus snapshot undo history.
pub struct EditorSurface {
    content: Content,
    history: History,
}

impl EditorSurface {
    /// Creates an empty surface keeping at most `undo_limit` snapshots.
    pub fn new(undo_limit: usize) -> Self {
        Self {
            content: Content::new(),
            history: History::new(undo_limit),
        }
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Applies an editor action. Returns true if the text changed.
    ///
    /// Cursor moves and selections never touch the history.
    pub fn perform(&mut self, action: Action) -> bool {
        if !action.is_edit() {
            self.content.perform(action);
            return false;
        }

        let before = self.content.text();
        self.content.perform(action);
        if self.content.text() == before {
            return false;
        }
        self.history.record(before);
        true
    }

    /// Restores the previous snapshot. Returns false if there is none.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.content.text()) {
            Some(previous) => {
                self.content = Content::with_text(&previous);
                true
            }
            None => false,
        }
    }

    /// Re-applies an undone snapshot. Returns false if there is none.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.content.text()) {
            Some(next) => {
                self.content = Content::with_text(&next);
                true
            }
            None => false,
        }
    }
}

impl TextSurface for EditorSurface {
    fn text(&self) -> String {
        self.content.text()
    }

    /// Replaces the whole document. Undo history does not cross this point.
    fn set_text(&mut self, text: &str) {
        self.content = Content::with_text(text);
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::text_editor::{Edit, Motion};

    fn type_str(surface: &mut EditorSurface, s: &str) {
        for c in s.chars() {
            assert!(surface.perform(Action::Edit(Edit::Insert(c))));
        }
    }

    #[test]
    fn test_typing_changes_text() {
        let mut surface = EditorSurface::new(100);
        type_str(&mut surface, "Hi");
        assert_eq!(surface.text().trim_end(), "Hi");
    }

    #[test]
    fn test_motion_is_not_an_edit() {
        let mut surface = EditorSurface::new(100);
        type_str(&mut surface, "ab");
        assert!(!surface.perform(Action::Move(Motion::Left)));
        assert_eq!(surface.text().trim_end(), "ab");
    }

    #[test]
    fn test_undo_then_redo() {
        let mut surface = EditorSurface::new(100);
        type_str(&mut surface, "ab");

        assert!(surface.undo());
        assert_eq!(surface.text().trim_end(), "a");
        assert!(surface.redo());
        assert_eq!(surface.text().trim_end(), "ab");
        assert!(!surface.redo());
    }

    #[test]
    fn test_set_text_clears_history() {
        let mut surface = EditorSurface::new(100);
        type_str(&mut surface, "draft");
        surface.set_text("loaded");

        assert!(!surface.undo());
        assert_eq!(surface.text().trim_end(), "loaded");

        surface.clear();
        assert!(surface.text().trim().is_empty());
    }
}
