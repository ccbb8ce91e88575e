//! Output abstraction layer
//!
//! This module provides a backend-agnostic interface for output operations,
//! allowing different implementations for the CLI (stdout/stderr) and the
//! TUI (status bar). The scan's error sink is an `OutputWriter`, so read
//! failures surface on the status bar during a session and on stderr when
//! something fails before the TUI is up.

use colored::Colorize;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Trait for output operations
///
/// Abstracts away the output mechanism, allowing CLI (stdout) and TUI
/// (status bar) backends.
pub trait OutputWriter: Send + Sync {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);

    /// Clear all messages (for TUI status bars)
    fn clear(&self);
}

/// CLI implementation - writes to stdout/stderr
pub struct StdoutWriter;

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "error:".red().bold(), message);
    }

    fn warning(&self, message: &str) {
        eprintln!("{} {}", "warning:".yellow(), message);
    }

    fn info(&self, message: &str) {
        eprintln!("{}", message.dimmed());
    }

    fn clear(&self) {
        // No-op for CLI
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Normal message
    Normal,
    /// Error message
    Error,
    /// Warning message
    Warning,
    /// Info message
    Info,
}

/// Buffered writer for TUI status bars
///
/// Buffers messages for display in a status bar, with automatic expiration
/// of old messages. Safe to share across threads, which lets the scan
/// workers report read failures while the UI thread renders them.
pub struct StatusBarWriter {
    messages: Arc<Mutex<Vec<(MessageLevel, String, Instant)>>>,
    ttl: Duration,
}

impl StatusBarWriter {
    /// Create a new status bar writer with the default TTL (10 seconds)
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(10))
    }

    /// Create a new status bar writer with a custom TTL
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
            ttl,
        }
    }

    /// Get the most recent non-expired message, if any
    #[must_use]
    pub fn latest_message(&self) -> Option<(MessageLevel, String)> {
        let now = Instant::now();
        let messages = self.messages.lock().unwrap();

        messages
            .iter()
            .rev()
            .find(|(_, _, time)| now.duration_since(*time) < self.ttl)
            .map(|(level, msg, _)| (*level, msg.clone()))
    }

    /// Count of non-expired messages
    #[must_use]
    pub fn message_count(&self) -> usize {
        let now = Instant::now();
        let messages = self.messages.lock().unwrap();

        messages
            .iter()
            .filter(|(_, _, time)| now.duration_since(*time) < self.ttl)
            .count()
    }

    fn add_message(&self, level: MessageLevel, message: String) {
        let mut messages = self.messages.lock().unwrap();
        messages.push((level, message, Instant::now()));

        // Keep only last 100 messages
        if messages.len() > 100 {
            messages.drain(0..50);
        }
    }
}

impl Default for StatusBarWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StatusBarWriter {
    fn write(&self, message: &str) {
        self.add_message(MessageLevel::Normal, message.to_string());
    }

    fn error(&self, message: &str) {
        self.add_message(MessageLevel::Error, message.to_string());
    }

    fn warning(&self, message: &str) {
        self.add_message(MessageLevel::Warning, message.to_string());
    }

    fn info(&self, message: &str) {
        self.add_message(MessageLevel::Info, message.to_string());
    }

    fn clear(&self) {
        self.messages.lock().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bar_writer_latest() {
        let writer = StatusBarWriter::new();

        writer.write("First");
        writer.warning("Latest");

        let latest = writer.latest_message().unwrap();
        assert_eq!(latest.0, MessageLevel::Warning);
        assert_eq!(latest.1, "Latest");
    }

    #[test]
    fn test_status_bar_writer_clear() {
        let writer = StatusBarWriter::new();

        writer.write("Message 1");
        writer.write("Message 2");
        assert_eq!(writer.message_count(), 2);

        writer.clear();
        assert_eq!(writer.message_count(), 0);
        assert!(writer.latest_message().is_none());
    }

    #[test]
    fn test_status_bar_writer_ttl() {
        let writer = StatusBarWriter::with_ttl(Duration::from_millis(50));

        writer.write("Message");
        assert_eq!(writer.message_count(), 1);

        std::thread::sleep(Duration::from_millis(100));
        assert_eq!(writer.message_count(), 0);
    }

    #[test]
    fn test_status_bar_writer_is_shareable_across_threads() {
        let writer = Arc::new(StatusBarWriter::new());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let writer = Arc::clone(&writer);
                std::thread::spawn(move || writer.warning(&format!("worker {i}")))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(writer.message_count(), 4);
    }
}
