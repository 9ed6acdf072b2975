// src/history.rs

const HISTORY_CAPACITY: usize = 5;

/// Recently generated passwords, most recent first, deduplicated and capped
/// at five entries. Session-scoped; never persisted.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generated password. An existing entry moves back to the
    /// front instead of being duplicated; empty strings are ignored.
    pub fn push(&mut self, password: &str) {
        if password.is_empty() {
            return;
        }
        self.entries.retain(|entry| entry != password);
        self.entries.insert(0, password.to_string());
        self.entries.truncate(HISTORY_CAPACITY);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_entries_come_first() {
        let mut history = History::new();
        history.push("first");
        history.push("second");
        assert_eq!(history.entries(), ["second", "first"]);
    }

    #[test]
    fn duplicate_moves_to_front_without_growing() {
        let mut history = History::new();
        history.push("a");
        history.push("b");
        history.push("a");
        assert_eq!(history.entries(), ["a", "b"]);
    }

    #[test]
    fn capacity_is_bounded_at_five() {
        let mut history = History::new();
        for i in 0..8 {
            history.push(&format!("pw{}", i));
        }
        assert_eq!(history.entries().len(), 5);
        assert_eq!(history.entries()[0], "pw7");
        assert_eq!(history.entries()[4], "pw3");
    }

    #[test]
    fn empty_passwords_are_ignored() {
        let mut history = History::new();
        history.push("");
        assert!(history.is_empty());
    }

    #[test]
    fn clear_empties_the_list() {
        let mut history = History::new();
        history.push("something");
        history.clear();
        assert!(history.is_empty());
    }
}
