use std::collections::VecDeque;

use tracing::debug;

/// Labelled snapshots of an undoable state, newest last.
#[derive(Clone, Debug)]
pub struct UndoHistory<T> {
    entries: VecDeque<(String, T)>,
    limit: usize,
}

impl<T> UndoHistory<T> {
    pub const DEFAULT_LIMIT: usize = 100;

    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    /// Records the state from before an edit, dropping the oldest entry when full.
    pub fn push(&mut self, label: impl Into<String>, snapshot: T) {
        let label = label.into();
        debug!("recording undo entry `{label}`");
        if self.entries.len() == self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back((label, snapshot));
    }

    pub fn pop(&mut self) -> Option<(String, T)> {
        self.entries.pop_back()
    }

    /// The label of the edit `pop` would revert.
    pub fn last_label(&self) -> Option<&str> {
        self.entries.back().map(|(label, _)| label.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for UndoHistory<T> {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT)
    }
}
