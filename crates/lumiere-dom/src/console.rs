//! Console channel
//!
//! The one user-visible logging surface. Entries are recorded so tests can
//! assert on output, and mirrored to `tracing` for the host process.

use std::cell::RefCell;
use std::rc::Rc;

/// Console entry severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Log,
    Warn,
    Error,
}

/// One recorded console line
#[derive(Debug, Clone)]
pub struct ConsoleEntry {
    pub level: ConsoleLevel,
    pub message: String,
}

/// Cloneable handle to the console channel.
///
/// Clones share the same backing buffer, so a handle captured by an event
/// listener writes to the same console the page owns.
#[derive(Debug, Clone, Default)]
pub struct Console {
    entries: Rc<RefCell<Vec<ConsoleEntry>>>,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    /// Informational line
    pub fn log(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(target: "console", "{message}");
        self.push(ConsoleLevel::Log, message);
    }

    /// Warning line
    pub fn warn(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(target: "console", "{message}");
        self.push(ConsoleLevel::Warn, message);
    }

    /// Error line
    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!(target: "console", "{message}");
        self.push(ConsoleLevel::Error, message);
    }

    fn push(&self, level: ConsoleLevel, message: String) {
        self.entries.borrow_mut().push(ConsoleEntry { level, message });
    }

    /// Snapshot of every recorded entry
    pub fn entries(&self) -> Vec<ConsoleEntry> {
        self.entries.borrow().clone()
    }

    /// Recorded messages at one severity
    pub fn messages(&self, level: ConsoleLevel) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|e| e.level == level)
            .map(|e| e.message.clone())
            .collect()
    }

    /// Number of warnings recorded
    pub fn warning_count(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|e| e.level == ConsoleLevel::Warn)
            .count()
    }

    /// Drop all recorded entries
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}
