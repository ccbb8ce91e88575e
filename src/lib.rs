//! Fpick - an interactive fuzzy file picker for the terminal
//!
//! This library provides the building blocks of the picker: a concurrent
//! directory scanner, a deterministic fuzzy matcher, the paginated list
//! state machine, and a ratatui front end that composes them.

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod highlight;
pub mod list;
pub mod matcher;
pub mod scan;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FpickError {
    /// Scan error
    #[error("Scan error: {0}")]
    ScanError(#[from] scan::ScanError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
