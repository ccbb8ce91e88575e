//! List module - the paginated navigation state machine
//!
//! Composes the matcher and the highlighter into a consistent, displayable
//! view of the corpus. The front end drives it through a small calling
//! contract: ingest a corpus snapshot, edit the query, navigate, commit,
//! and read back the visible rows after each call.
//!
//! Invariants maintained across every mutation:
//! - the page resets to 0 whenever the filtered view is empty or the page
//!   window starts past its end
//! - `0 <= cursor < max(1, visible slice length)`

mod paginator;
mod state;

pub use paginator::Paginator;
pub use state::{ListState, Mode, NavIntent, Row, SelectionError};
