//! Ratatui-based picker front end
//!
//! Owns everything visual: raw mode and the alternate screen, key decoding,
//! layout, colors. The core list state is driven exclusively through its
//! calling contract (`ingest_corpus_snapshot`, query edits, `navigate`,
//! `commit`, `visible_rows`), so a different front end could replace this
//! module without touching the core.

mod app;
mod events;
mod theme;
pub mod widgets;

pub use app::{Picker, PickerOutcome};
pub use events::{EventResult, handle_key, poll_and_handle};
pub use theme::Theme;
