//! Event handling for the picker TUI
//!
//! Maps keyboard events to list mutations, with separate key tables for the
//! two input modes: Browse keys navigate, Edit keys type into the query
//! (only the arrow keys keep navigating there).

use crate::list::{ListState, Mode, NavIntent};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// The user asked to commit the entry under the cursor
    Commit,
    /// Exit without a selection
    Abort,
    /// No action taken
    Ignored,
}

/// Handle a key press in Browse mode
fn handle_browse_mode(state: &mut ListState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Abort,
        (KeyCode::Enter, _) => EventResult::Commit,

        // Navigation
        (KeyCode::Up | KeyCode::Char('k'), _) => {
            state.navigate(NavIntent::Up);
            EventResult::Continue
        }
        (KeyCode::Down | KeyCode::Char('j'), _) => {
            state.navigate(NavIntent::Down);
            EventResult::Continue
        }
        (KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp, _) => {
            state.navigate(NavIntent::PageLeft);
            EventResult::Continue
        }
        (KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown, _) => {
            state.navigate(NavIntent::PageRight);
            EventResult::Continue
        }

        // Explicit entry into Edit mode
        (KeyCode::Char('i'), KeyModifiers::NONE) => {
            state.enter_edit();
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

/// Handle a key press in Edit mode
fn handle_edit_mode(state: &mut ListState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Abort,
        (KeyCode::Enter, _) => EventResult::Commit,

        // Escaping Edit always returns to Browse
        (KeyCode::Esc, _) => {
            state.exit_edit();
            EventResult::Continue
        }

        // Arrow keys still move the cursor while typing
        (KeyCode::Up, _) => {
            state.navigate(NavIntent::Up);
            EventResult::Continue
        }
        (KeyCode::Down, _) => {
            state.navigate(NavIntent::Down);
            EventResult::Continue
        }

        // Query editing
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.query_clear();
            EventResult::Continue
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query_push(c);
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            state.query_backspace();
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

/// Dispatch a key press to the handler for the current mode
pub fn handle_key(state: &mut ListState, key: KeyEvent) -> EventResult {
    match state.mode() {
        Mode::Browse => handle_browse_mode(state, key),
        Mode::Edit => handle_edit_mode(state, key),
    }
}

/// Poll for an event and handle it
///
/// Returns `EventResult::Continue` when the poll times out with no input,
/// which is what lets the caller pull fresh scan snapshots between keys.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut ListState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_state() -> ListState {
        let mut state = ListState::new(10);
        state.ingest_corpus_snapshot((0..15).map(|i| format!("item{i:02}")).collect());
        state
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_typing_edits_query_in_edit_mode() {
        let mut state = make_state();
        assert_eq!(state.mode(), Mode::Edit);

        assert_eq!(handle_key(&mut state, key(KeyCode::Char('i'))), EventResult::Continue);
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('t'))), EventResult::Continue);
        assert_eq!(state.query(), "it");

        assert_eq!(handle_key(&mut state, key(KeyCode::Backspace)), EventResult::Continue);
        assert_eq!(state.query(), "i");
    }

    #[test]
    fn test_ctrl_u_clears_query() {
        let mut state = make_state();
        handle_key(&mut state, key(KeyCode::Char('a')));
        handle_key(&mut state, key(KeyCode::Char('b')));

        handle_key(&mut state, ctrl('u'));
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_escape_leaves_edit_mode() {
        let mut state = make_state();

        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), EventResult::Continue);
        assert_eq!(state.mode(), Mode::Browse);
    }

    #[test]
    fn test_escape_aborts_from_browse_mode() {
        let mut state = make_state();
        state.exit_edit();

        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), EventResult::Abort);
    }

    #[test]
    fn test_i_reenters_edit_mode_from_browse() {
        let mut state = make_state();
        state.exit_edit();

        handle_key(&mut state, key(KeyCode::Char('i')));
        assert_eq!(state.mode(), Mode::Edit);
        // 'i' switched modes without leaking into the query
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_vim_keys_navigate_in_browse_mode() {
        let mut state = make_state();
        state.exit_edit();

        handle_key(&mut state, key(KeyCode::Char('j')));
        handle_key(&mut state, key(KeyCode::Char('j')));
        assert_eq!(state.cursor(), 2);

        handle_key(&mut state, key(KeyCode::Char('k')));
        assert_eq!(state.cursor(), 1);

        handle_key(&mut state, key(KeyCode::Char('l')));
        assert_eq!(state.paginator().page(), 1);
        handle_key(&mut state, key(KeyCode::Char('h')));
        assert_eq!(state.paginator().page(), 0);
    }

    #[test]
    fn test_vim_nav_chars_are_query_text_in_edit_mode() {
        let mut state = make_state();

        handle_key(&mut state, key(KeyCode::Char('j')));
        handle_key(&mut state, key(KeyCode::Char('k')));
        assert_eq!(state.query(), "jk");
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_arrows_navigate_in_both_modes() {
        let mut state = make_state();

        handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.cursor(), 1);

        state.exit_edit();
        handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.cursor(), 2);
        handle_key(&mut state, key(KeyCode::Up));
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn test_enter_commits_in_both_modes() {
        let mut state = make_state();
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), EventResult::Commit);

        state.exit_edit();
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), EventResult::Commit);
    }

    #[test]
    fn test_ctrl_c_aborts_in_both_modes() {
        let mut state = make_state();
        assert_eq!(handle_key(&mut state, ctrl('c')), EventResult::Abort);

        state.exit_edit();
        assert_eq!(handle_key(&mut state, ctrl('c')), EventResult::Abort);
    }
}
