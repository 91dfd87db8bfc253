//! Undo history for a ranking session

use crate::types::{Pair, RatingTable};
use chrono::{DateTime, Utc};

/// Snapshot of all ratings taken right before a decision was applied
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub ratings: RatingTable,
    pub pair: Pair,
    pub taken_at: DateTime<Utc>,
}

/// Stack of snapshots, most recent on top
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    pub fn peek(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
