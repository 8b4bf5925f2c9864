//! LogState - User-Visible Activity Log with Ring Buffer
//!
//! Holds what the log panel shows: navigation, selection changes, opened
//! links and failures. Diagnostics for developers go through `tracing`.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    pub fn color(&self) -> gpui::Rgba {
        match self {
            LogLevel::Info => gpui::rgba(0x22c55eff),
            LogLevel::Warn => gpui::rgba(0xf59e0bff),
            LogLevel::Error => gpui::rgba(0xef4444ff),
        }
    }
}

/// A single log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: u64,
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

/// Activity log bounded to `capacity` entries, oldest evicted first
#[derive(Debug)]
pub struct LogState {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    next_id: u64,
    /// Whether the panel is expanded
    pub expanded: bool,
}

impl LogState {
    /// Create a new log state with the specified capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
            next_id: 1,
            expanded: true,
        }
    }

    /// Record an entry with the current time and mirror it to `tracing`
    pub fn push(&mut self, level: LogLevel, message: impl Into<String>) {
        let message = message.into();
        match level {
            LogLevel::Info => tracing::info!("{message}"),
            LogLevel::Warn => tracing::warn!("{message}"),
            LogLevel::Error => tracing::error!("{message}"),
        }

        if self.capacity == 0 {
            return;
        }
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            id: self.next_id,
            level,
            message,
            timestamp: Local::now(),
        });
        self.next_id += 1;
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(LogLevel::Info, message);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(LogLevel::Warn, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(LogLevel::Error, message);
    }

    /// Entries, oldest first
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &LogEntry> {
        self.entries.iter()
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

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }
}

impl Default for LogState {
    fn default() -> Self {
        Self::new(500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_entries_are_evicted() {
        let mut log = LogState::new(2);
        log.info("one");
        log.warn("two");
        log.error("three");

        let messages: Vec<_> = log.entries().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
        let ids: Vec<_> = log.entries().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut log = LogState::new(0);
        log.info("dropped");
        assert!(log.is_empty());
    }

    #[test]
    fn clear_keeps_id_sequence() {
        let mut log = LogState::new(10);
        log.info("one");
        log.clear();
        log.info("two");

        assert_eq!(log.len(), 1);
        assert_eq!(log.entries().next().map(|e| e.id), Some(2));
    }
}
