//! The editable text surface the session reads and writes.
//!
//! ## Learning: Traits as Seams
//!
//! The window's text widget and the headless `TextBuffer` are unrelated
//! types. A small trait lets `Session` work with either, and lets tests run
//! without opening a window.

use plume_buffer::TextBuffer;

/// An editable text buffer owned by someone else.
pub trait TextSurface {
    /// Returns the full content.
    fn text(&self) -> String;

    /// Replaces the full content.
    fn set_text(&mut self, text: &str);

    /// Removes all content.
    fn clear(&mut self) {
        self.set_text("");
    }
}

impl TextSurface for TextBuffer {
    fn text(&self) -> String {
        TextBuffer::text(self).into_owned()
    }

    fn set_text(&mut self, text: &str) {
        self.replace_all(text);
    }

    fn clear(&mut self) {
        TextBuffer::clear(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_surface() {
        let mut buffer = TextBuffer::from("draft");
        TextSurface::set_text(&mut buffer, "final");
        assert_eq!(TextSurface::text(&buffer), "final");

        TextSurface::clear(&mut buffer);
        assert!(buffer.is_empty());
    }
}
