use std::collections::VecDeque;

use serde::Serialize;

pub const HISTORY_CAPACITY: usize = 5;

/// Most recent shortcut notes, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommandHistory {
    entries: VecDeque<String>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, note: impl Into<String>) {
        if self.entries.len() == HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(note.into());
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<String>> for CommandHistory {
    fn from(notes: Vec<String>) -> Self {
        let mut history = CommandHistory::new();
        notes.into_iter().for_each(|n| history.push(n));
        history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_the_last_five() {
        let mut history = CommandHistory::new();
        for i in 1..=7 {
            history.push(format!("note {i}"));
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.entries().next(), Some("note 3"));
        assert_eq!(history.last(), Some("note 7"));
    }

    #[test]
    fn seeding_truncates_from_the_front() {
        let seeded = CommandHistory::from((0..9).map(|i| i.to_string()).collect::<Vec<_>>());
        assert_eq!(seeded.entries().collect::<Vec<_>>(), vec!["4", "5", "6", "7", "8"]);
    }
}
