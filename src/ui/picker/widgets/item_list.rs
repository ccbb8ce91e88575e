//! Item list widget for displaying the current page of matches

use crate::list::Row;
use crate::ui::picker::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

/// Item list widget that displays the visible rows with the cursor marker
/// and per-character match highlighting
pub struct ItemList<'a> {
    /// Rows of the current page
    rows: &'a [Row],
    /// Theme for styling
    theme: &'a Theme,
    /// Title for the list block
    title: String,
}

impl<'a> ItemList<'a> {
    /// Create a new item list widget
    #[must_use]
    pub fn new(rows: &'a [Row], theme: &'a Theme, matched: usize, total: usize) -> Self {
        let title = format!(" Files ({matched}/{total}) ");
        Self { rows, theme, title }
    }

    /// Render a single row
    fn render_row(&self, row: &Row) -> ListItem<'a> {
        let cursor_char = if row.is_cursor { ">" } else { " " };

        let base_style = if row.is_cursor {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };
        let match_style = base_style.patch(self.theme.match_style());

        let mut spans = vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
        ];
        spans.extend(styled_text_spans(
            &row.text,
            row.highlight.as_deref().map(Vec::as_slice),
            base_style,
            match_style,
        ));

        ListItem::new(Line::from(spans))
    }
}

impl Widget for ItemList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.rows.is_empty() {
            Paragraph::new(Span::styled("No results found", self.theme.dimmed_style()))
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self.rows.iter().map(|row| self.render_row(row)).collect();
        List::new(items).render(inner, buf);
    }
}

/// Split `text` into spans, styling the characters at `positions` (sorted
/// character indices) with `match_style` and everything else with `base`
fn styled_text_spans(
    text: &str,
    positions: Option<&[usize]>,
    base: Style,
    match_style: Style,
) -> Vec<Span<'static>> {
    let Some(positions) = positions else {
        return vec![Span::styled(text.to_string(), base)];
    };

    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_matched = false;
    let mut remaining = positions.iter().peekable();

    for (i, c) in text.chars().enumerate() {
        let is_match = remaining.peek().is_some_and(|&&p| p == i);
        if is_match {
            remaining.next();
        }

        if is_match != run_matched && !run.is_empty() {
            let style = if run_matched { match_style } else { base };
            spans.push(Span::styled(std::mem::take(&mut run), style));
        }
        run_matched = is_match;
        run.push(c);
    }

    if !run.is_empty() {
        let style = if run_matched { match_style } else { base };
        spans.push(Span::styled(run, style));
    }

    spans
}
