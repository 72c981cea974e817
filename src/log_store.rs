//! In-memory activity log.
//!
//! Append-only and time-ordered: entries land in call order and are never
//! edited. The only removal is [`LogStore::clear`], which drops everything.
//! Growth is unbounded for the lifetime of a session.

use crate::model::LogEntry;

#[derive(Debug, Default)]
pub struct LogStore {
    entries: Vec<LogEntry>,
}

impl LogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry to the end of the log.
    pub fn append(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Empties the log.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All entries, oldest first.
    pub fn read(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn append_preserves_call_order() {
        let mut log = LogStore::new();
        log.append(LogEntry::request("first", json!({})));
        log.append(LogEntry::response("second", None, Some(200)));
        log.append(LogEntry::request("first", json!({})));

        let messages: Vec<_> = log.read().iter().map(LogEntry::message).collect();
        assert_eq!(messages, ["first", "second", "first"]);
    }

    #[test]
    fn clear_empties_any_size() {
        let mut log = LogStore::new();
        log.clear();
        assert!(log.is_empty());

        for i in 0..50 {
            log.append(LogEntry::response(format!("entry {i}"), None, None));
        }
        assert_eq!(log.len(), 50);

        log.clear();
        assert!(log.is_empty());
        assert!(log.read().is_empty());
    }

    #[test]
    fn append_after_clear_starts_fresh() {
        let mut log = LogStore::new();
        log.append(LogEntry::request("old", json!({})));
        log.clear();
        log.append(LogEntry::request("new", json!({})));

        assert_eq!(log.len(), 1);
        assert_eq!(log.read()[0].message(), "new");
    }
}
