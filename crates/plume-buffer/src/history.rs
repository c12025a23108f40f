//! Undo/redo history.
//!
//! ## Learning: VecDeque
//!
//! The undo stack is a `VecDeque` so the oldest snapshot can be dropped
//! from the front in O(1) once the limit is reached, while undo pops from
//! the back.

use std::collections::VecDeque;

/// Bounded whole-text snapshot history.
///
/// Call [`History::record`] with the text *before* each edit. Undo and redo
/// take the current text and hand back the text to restore.
#[derive(Debug, Clone)]
pub struct History {
    undo_stack: VecDeque<String>,
    redo_stack: Vec<String>,
    limit: usize,
}

impl History {
    /// Creates a history that keeps at most `limit` undo steps.
    pub fn new(limit: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Records the pre-edit text.
    ///
    /// Consecutive identical snapshots are stored once. Recording clears
    /// the redo stack.
    pub fn record(&mut self, before: String) {
        if self.undo_stack.back() == Some(&before) {
            return;
        }
        self.undo_stack.push_back(before);
        if self.undo_stack.len() > self.limit {
            self.undo_stack.pop_front();
        }
        self.redo_stack.clear();
    }

    /// Steps back. Returns the text to restore, if any.
    pub fn undo(&mut self, current: String) -> Option<String> {
        let previous = self.undo_stack.pop_back()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Steps forward after an undo. Returns the text to restore, if any.
    pub fn redo(&mut self, current: String) -> Option<String> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push_back(current);
        Some(next)
    }

    /// Forgets everything, e.g. when a different document is loaded.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_redo() {
        let mut history = History::new(10);
        history.record(String::new());
        history.record("Hello".to_string());

        assert_eq!(history.undo("Hello World".to_string()).as_deref(), Some("Hello"));
        assert_eq!(history.undo("Hello".to_string()).as_deref(), Some(""));
        assert!(history.undo(String::new()).is_none());

        assert_eq!(history.redo(String::new()).as_deref(), Some("Hello"));
        assert_eq!(history.redo("Hello".to_string()).as_deref(), Some("Hello World"));
        assert!(history.redo("Hello World".to_string()).is_none());
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::new(10);
        history.record("a".to_string());
        history.undo("ab".to_string());

        history.record("a".to_string());
        assert!(history.redo("a".to_string()).is_none());
    }

    #[test]
    fn test_duplicate_snapshots_collapse() {
        let mut history = History::new(10);
        history.record("same".to_string());
        history.record("same".to_string());
        assert_eq!(history.undo("x".to_string()).as_deref(), Some("same"));
        assert!(history.undo("same".to_string()).is_none());
    }

    #[test]
    fn test_limit() {
        let mut history = History::new(2);
        for s in ["1", "2", "3"] {
            history.record(s.to_string());
        }
        assert_eq!(history.undo("4".to_string()).as_deref(), Some("3"));
        assert_eq!(history.undo("3".to_string()).as_deref(), Some("2"));
        assert!(history.undo("2".to_string()).is_none());
    }
}
