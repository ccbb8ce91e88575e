//! The interactive picker event loop
//!
//! Drives the terminal session: pulls corpus snapshots from the scan when
//! its version changes, renders the current page, and dispatches key events
//! into the list state. The loop never blocks on the scan; the 50 ms event
//! poll timeout doubles as the snapshot refresh cadence.

use super::events::{EventResult, poll_and_handle};
use super::theme::Theme;
use super::widgets::{HelpBar, ItemList, PageDots, SearchBar, StatusBar};
use crate::list::{ListState, Mode, SelectionError};
use crate::scan::ScanHandle;
use crate::ui::error::Result;
use crate::ui::output::StatusBarWriter;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stdout};
use std::time::Duration;

/// How long one event poll waits before the loop re-checks the scan
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Result of a picker session
#[derive(Debug)]
pub struct PickerOutcome {
    /// The committed entry, relative to the scan root
    pub selected: Option<String>,
    /// Whether the session ended without a selection
    pub aborted: bool,
}

impl PickerOutcome {
    /// Outcome for a committed selection
    #[must_use]
    pub const fn selected(path: String) -> Self {
        Self {
            selected: Some(path),
            aborted: false,
        }
    }

    /// Outcome for a cancelled session
    #[must_use]
    pub const fn aborted() -> Self {
        Self {
            selected: None,
            aborted: true,
        }
    }
}

/// Ratatui-based picker front end
pub struct Picker {
    theme: Theme,
}

impl Picker {
    /// Create a picker with the default theme
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
        }
    }

    /// Set a custom theme
    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Setup terminal for the TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after the TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run a picker session over the given list state and scan.
    ///
    /// The terminal is restored before returning, also on error paths.
    ///
    /// # Errors
    ///
    /// Returns `UiError` if terminal setup, rendering or event polling fail.
    pub fn run(
        &self,
        state: &mut ListState,
        scan: &ScanHandle,
        messages: &StatusBarWriter,
    ) -> Result<PickerOutcome> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.run_loop(&mut terminal, state, scan, messages);
        Self::cleanup_terminal()?;
        result
    }

    /// The picker event loop
    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        state: &mut ListState,
        scan: &ScanHandle,
        messages: &StatusBarWriter,
    ) -> Result<PickerOutcome> {
        let mut last_version = 0u64;

        loop {
            // Pull a cumulative snapshot only when the scan moved on
            if scan.version() != last_version {
                let snapshot = scan.snapshot();
                last_version = snapshot.version;
                state.ingest_corpus_snapshot(snapshot.paths);
            }

            let scan_complete = scan.is_complete();
            terminal.draw(|frame| self.render(frame, state, scan_complete, messages))?;

            match poll_and_handle(state, POLL_TIMEOUT)? {
                EventResult::Commit => match state.commit() {
                    Ok(path) => return Ok(PickerOutcome::selected(path.to_string())),
                    // Nothing visible to select; keep the session running
                    Err(SelectionError::EmptySelection) => {}
                },
                EventResult::Abort => return Ok(PickerOutcome::aborted()),
                EventResult::Continue | EventResult::Ignored => {}
            }
        }
    }

    /// Render one frame
    fn render(
        &self,
        frame: &mut Frame,
        state: &mut ListState,
        scan_complete: bool,
        messages: &StatusBarWriter,
    ) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Item list
                Constraint::Length(1), // Page dots
                Constraint::Length(3), // Search bar
                Constraint::Length(3), // Status bar
                Constraint::Length(1), // Help bar
            ])
            .split(frame.area());

        // The page size follows the list height (inside the borders)
        let list_height = layout[0].height.saturating_sub(2) as usize;
        state.set_page_size(list_height.max(1));

        let rows = state.visible_rows();
        let item_list = ItemList::new(&rows, &self.theme, state.matched_len(), state.corpus_len());
        frame.render_widget(item_list, layout[0]);

        let paginator = state.paginator();
        let dots = PageDots::new(paginator.page(), paginator.total_pages(), &self.theme);
        frame.render_widget(dots, layout[1]);

        let search_bar = SearchBar::new(state.query(), state.mode() == Mode::Edit, &self.theme);
        frame.render_widget(search_bar, layout[2]);

        let status_bar = StatusBar::new(
            state.mode(),
            state.matched_len(),
            state.corpus_len(),
            scan_complete,
            messages.latest_message(),
            &self.theme,
        );
        frame.render_widget(status_bar, layout[3]);

        let hints = HelpBar::hints_for(state.mode());
        frame.render_widget(HelpBar::new(&hints, &self.theme), layout[4]);
    }
}

impl Default for Picker {
    fn default() -> Self {
        Self::new()
    }
}
