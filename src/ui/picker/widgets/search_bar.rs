//! Search bar widget for query input

use crate::ui::picker::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the query with a trailing cursor
pub struct SearchBar<'a> {
    /// Current query text
    query: &'a str,
    /// Theme for styling
    theme: &'a Theme,
    /// Whether query editing has focus (Edit mode)
    focused: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a str, focused: bool, theme: &'a Theme) -> Self {
        Self {
            query,
            theme,
            focused,
        }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.cursor_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search ");

        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![Span::styled("> ", self.theme.dimmed_style())];

        if self.query.is_empty() && !self.focused {
            spans.push(Span::styled(
                "press i to type",
                self.theme.dimmed_style(),
            ));
        } else {
            spans.push(Span::raw(self.query));
            if self.focused {
                spans.push(Span::styled(
                    "│",
                    Style::default().add_modifier(Modifier::SLOW_BLINK),
                ));
            }
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
