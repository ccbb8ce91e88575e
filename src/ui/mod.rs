//! UI abstraction layer
//!
//! This module provides the terminal front end of the picker and the output
//! abstraction shared between it and the CLI error paths.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          Core state (list, scan)        │
//! └────────────────┬────────────────────────┘
//!                  │ calling contract
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │          Picker (event loop)            │
//! └────────┬───────────────────┬────────────┘
//!          ▼                   ▼
//! ┌───────────────┐     ┌───────────────┐
//! │   Ratatui     │     │   Crossterm   │
//! │  (widgets)    │     │   (events)    │
//! └───────────────┘     └───────────────┘
//! ```
//!
//! The core holds zero rendering state: colors, box drawing and raw key
//! decoding live entirely in `picker`, and all styling sits in its `Theme`.

mod error;

pub mod output;
pub mod picker;

pub use error::{Result, UiError};
pub use output::{MessageLevel, OutputWriter, StatusBarWriter, StdoutWriter};
pub use picker::{Picker, PickerOutcome};
