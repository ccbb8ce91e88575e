//! List state machine for the picker
//!
//! Owns the corpus, the filtered view, the pagination window, the cursor and
//! the input mode, and keeps them consistent while the corpus changes size
//! underneath them at any time. Filtering re-runs synchronously on every
//! query edit and every absorbed snapshot; the cost is proportional to
//! corpus size times query length, which is accepted rather than hidden
//! behind debouncing.

use super::paginator::Paginator;
use crate::highlight::HighlightIndexer;
use crate::matcher::{self, Match};
use std::sync::Arc;
use thiserror::Error;

/// Input mode of the picker
///
/// Browse enables page navigation; Edit routes those characters into the
/// query instead and focuses query editing. Leaving Edit always returns to
/// Browse, and Edit can only be entered explicitly from Browse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigation keys act on the list
    Browse,
    /// Typed characters edit the query
    #[default]
    Edit,
}

/// A navigation request from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    /// Move the cursor up, crossing to the previous page at the top
    Up,
    /// Move the cursor down, crossing to the next page at the bottom
    Down,
    /// Jump one page back (Browse mode only)
    PageLeft,
    /// Jump one page forward (Browse mode only)
    PageRight,
}

/// One renderable row of the current page
#[derive(Debug, Clone)]
pub struct Row {
    /// The entry text (path relative to the scan root)
    pub text: String,
    /// Character positions satisfying the current query, if it matches
    pub highlight: Option<Arc<Vec<usize>>>,
    /// Whether the cursor sits on this row
    pub is_cursor: bool,
}

/// Errors from selection operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// Commit was requested while the visible slice is empty
    #[error("nothing is selected")]
    EmptySelection,
}

/// State of the interactive list: corpus, filtered view, pagination window,
/// cursor position and mode
pub struct ListState {
    corpus: Vec<String>,
    filtered: Vec<Match>,
    query: String,
    paginator: Paginator,
    cursor: usize,
    mode: Mode,
    highlighter: HighlightIndexer,
}

impl ListState {
    /// Create an empty list with the given page size
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            corpus: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            paginator: Paginator::new(page_size),
            cursor: 0,
            mode: Mode::default(),
            highlighter: HighlightIndexer::new(),
        }
    }

    /// Replace the corpus wholesale with a new snapshot and re-filter.
    ///
    /// Snapshots are cumulative: each one supersedes the previous corpus
    /// entirely, so this never appends.
    pub fn ingest_corpus_snapshot(&mut self, paths: Vec<String>) {
        self.corpus = paths;
        self.refilter();
    }

    /// Replace the query and re-filter
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    /// Append a character to the query
    pub fn query_push(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    /// Remove the last character of the query
    pub fn query_backspace(&mut self) {
        if self.query.pop().is_some() {
            self.refilter();
        }
    }

    /// Clear the query
    pub fn query_clear(&mut self) {
        if !self.query.is_empty() {
            self.query.clear();
            self.refilter();
        }
    }

    /// Current query text
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of entries in the corpus
    #[must_use]
    pub fn corpus_len(&self) -> usize {
        self.corpus.len()
    }

    /// Number of entries matching the current query
    #[must_use]
    pub fn matched_len(&self) -> usize {
        self.filtered.len()
    }

    /// Current input mode
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Enter Edit mode (only meaningful from Browse)
    pub const fn enter_edit(&mut self) {
        self.mode = Mode::Edit;
    }

    /// Leave Edit mode back to Browse
    pub const fn exit_edit(&mut self) {
        self.mode = Mode::Browse;
    }

    /// Flip between Browse and Edit
    pub const fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            Mode::Browse => Mode::Edit,
            Mode::Edit => Mode::Browse,
        };
    }

    /// Pagination window, for rendering page indicators
    #[must_use]
    pub const fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Adapt the page size (e.g. to the terminal height) and recompute
    pub fn set_page_size(&mut self, per_page: usize) {
        if per_page.max(1) != self.paginator.per_page() {
            self.paginator.set_per_page(per_page);
            self.paginator.update_total(self.filtered.len());
            self.clamp_cursor();
        }
    }

    /// Cursor position within the current page
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// The sub-sequence of the filtered view belonging to the current page
    pub fn visible_slice(&mut self) -> &[Match] {
        let (start, end) = self.paginator.slice_bounds(self.filtered.len());
        &self.filtered[start..end]
    }

    /// Apply a navigation intent.
    ///
    /// Page intents are ignored in Edit mode, where those keys belong to the
    /// query. Up and Down cross page boundaries but never wrap between the
    /// last and first page.
    pub fn navigate(&mut self, intent: NavIntent) {
        let n = self.visible_slice().len();

        match intent {
            NavIntent::Up => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                } else if !self.paginator.on_first_page() {
                    self.paginator.prev_page();
                    // A previous page is always full
                    self.cursor = self.visible_slice().len().saturating_sub(1);
                }
            }
            NavIntent::Down => {
                if n > 0 && self.cursor < n - 1 {
                    self.cursor += 1;
                } else if !self.paginator.on_last_page() {
                    self.paginator.next_page();
                    self.cursor = 0;
                }
            }
            NavIntent::PageLeft => {
                if self.mode == Mode::Browse {
                    self.paginator.prev_page();
                    self.clamp_cursor();
                }
            }
            NavIntent::PageRight => {
                if self.mode == Mode::Browse {
                    self.paginator.next_page();
                    self.clamp_cursor();
                }
            }
        }
    }

    /// The entry under the cursor.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::EmptySelection` when the visible slice is
    /// empty; callers treat that as a no-op, not a failure.
    pub fn commit(&self) -> Result<&str, SelectionError> {
        let len = self.filtered.len();
        let mut start = self.paginator.page() * self.paginator.per_page();
        if start >= len {
            start = 0;
        }
        let end = (start + self.paginator.per_page()).min(len);

        self.filtered[start..end]
            .get(self.cursor)
            .map(|m| m.path.as_str())
            .ok_or(SelectionError::EmptySelection)
    }

    /// Matched character positions of `item` for the current query
    #[must_use]
    pub fn highlight(&self, item: &str) -> Option<Arc<Vec<usize>>> {
        self.highlighter.indices(item, &self.query)
    }

    /// Renderable rows of the current page, in display order
    pub fn visible_rows(&mut self) -> Vec<Row> {
        let cursor = self.cursor;
        let (start, end) = self.paginator.slice_bounds(self.filtered.len());

        (start..end)
            .map(|i| {
                let path = self.filtered[i].path.clone();
                let highlight = self.highlighter.indices(&path, &self.query);
                Row {
                    text: path,
                    highlight,
                    is_cursor: i - start == cursor,
                }
            })
            .collect()
    }

    /// Re-run the matcher and restore the pagination and cursor invariants
    fn refilter(&mut self) {
        self.filtered = matcher::filter(&self.query, &self.corpus);
        self.paginator.update_total(self.filtered.len());
        self.clamp_cursor();
    }

    /// Keep `0 <= cursor < max(1, visible len)`
    fn clamp_cursor(&mut self) {
        let n = self.visible_slice().len();
        if n == 0 {
            self.cursor = 0;
        } else if self.cursor >= n {
            self.cursor = n - 1;
        }
    }
}
