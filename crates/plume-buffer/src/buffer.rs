//! Rope-backed text buffer.
//!
//! ## Learning: Ownership in Action
//!
//! ```rust,ignore
//! let mut buffer = TextBuffer::new(); // buffer OWNS the rope
//! let text = buffer.text();           // text BORROWS from buffer
//! // buffer.push_str("x");            // ERROR! Can't mutate while borrowed
//! drop(text);                         // Release borrow
//! buffer.push_str("x");               // Now OK!
//! ```

use ropey::Rope;
use std::borrow::Cow;

/// A text buffer backed by a rope.
///
/// Indices are character indices, not byte offsets.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    rope: Rope,
}

impl TextBuffer {
    /// Creates a new empty buffer.
    ///
    /// # Example
    /// ```
    /// use plume_buffer::TextBuffer;
    ///
    /// let buffer = TextBuffer::new();
    /// assert!(buffer.is_empty());
    /// ```
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Returns the entire text content.
    ///
    /// Borrows when the rope is a single chunk, allocates otherwise.
    #[inline]
    pub fn text(&self) -> Cow<'_, str> {
        self.rope.slice(..).into()
    }

    /// Returns true if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Returns the number of characters in the buffer.
    #[inline]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Appends text at the end of the buffer.
    pub fn push_str(&mut self, text: &str) {
        let end = self.len_chars();
        self.rope.insert(end, text);
    }

    /// Replaces the whole content.
    pub fn replace_all(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }

    /// Removes all content.
    pub fn clear(&mut self) {
        self.rope = Rope::new();
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }
}

impl From<String> for TextBuffer {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}
