//! Page indicator widget
//!
//! One dot per page, with the current page rendered bright.

use crate::ui::picker::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Row of page dots below the item list
pub struct PageDots<'a> {
    /// Current page index
    current: usize,
    /// Total page count
    total: usize,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> PageDots<'a> {
    /// Create a new page dots widget
    #[must_use]
    pub const fn new(current: usize, total: usize, theme: &'a Theme) -> Self {
        Self {
            current,
            total,
            theme,
        }
    }
}

impl Widget for PageDots<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.total <= 1 {
            return;
        }

        let active = Style::default().fg(Color::White);

        let mut spans = vec![Span::raw("  ")];
        for page in 0..self.total {
            if page > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if page == self.current {
                active
            } else {
                self.theme.dimmed_style()
            };
            spans.push(Span::styled("•", style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
