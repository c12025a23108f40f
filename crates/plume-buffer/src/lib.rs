//! # Plume Buffer
//!
//! Text storage that works without a window.
//!
//! ## Key Concepts
//!
//! - `TextBuffer` is a rope-backed buffer. The editor window uses the GUI
//!   toolkit's own widget, so this buffer exists for headless sessions,
//!   tests and benchmarks.
//! - `History` keeps whole-text snapshots for undo/redo. The window surface
//!   uses it alongside the toolkit widget.

mod buffer;
mod history;

pub use buffer::TextBuffer;
pub use history::History;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_creation() {
        let buffer = TextBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len_chars(), 0);
    }

    #[test]
    fn test_buffer_from_string() {
        let buffer = TextBuffer::from(String::from("Hello, World!"));
        assert_eq!(buffer.len_chars(), 13);
        assert_eq!(buffer.text(), "Hello, World!");
    }

    #[test]
    fn test_buffer_and_history_together() {
        let mut buffer = TextBuffer::from("draft");
        let mut history = History::default();

        history.record(buffer.text().into_owned());
        buffer.push_str(" two");
        let previous = history.undo(buffer.text().into_owned()).unwrap();
        buffer.replace_all(&previous);
        assert_eq!(buffer.text(), "draft");
    }
}
