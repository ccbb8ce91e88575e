//! Status bar widget for mode, counts, scan progress and recent messages

use crate::list::Mode;
use crate::ui::output::MessageLevel;
use crate::ui::picker::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget below the search bar
pub struct StatusBar<'a> {
    /// Current input mode
    mode: Mode,
    /// Matching entry count
    matched: usize,
    /// Total corpus size
    total: usize,
    /// Whether the background scan has finished
    scan_complete: bool,
    /// Most recent scan message, if any
    message: Option<(MessageLevel, String)>,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(
        mode: Mode,
        matched: usize,
        total: usize,
        scan_complete: bool,
        message: Option<(MessageLevel, String)>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            mode,
            matched,
            total,
            scan_complete,
            message,
            theme,
        }
    }

    /// Get style for a message level
    fn style_for_level(&self, level: MessageLevel) -> ratatui::style::Style {
        match level {
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Warning => self.theme.warning_style(),
            MessageLevel::Info => self.theme.info_style(),
            MessageLevel::Normal => self.theme.normal_style(),
        }
    }

    /// Get prefix for a message level
    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
            MessageLevel::Normal => "",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(80), Constraint::Percentage(20)])
            .split(inner);

        // Left side: the latest scan message wins over the plain counts
        if let Some((level, text)) = &self.message {
            let style = self.style_for_level(*level);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for_level(*level), style),
                Span::styled(text.clone(), style),
            ]);
            Paragraph::new(line).render(chunks[0], buf);
        } else {
            let scanning = if self.scan_complete {
                ""
            } else {
                "  scanning…"
            };
            let line = Line::from(vec![
                Span::raw(format!("{}/{} files", self.matched, self.total)),
                Span::styled(scanning, self.theme.info_style()),
            ]);
            Paragraph::new(line).render(chunks[0], buf);
        }

        // Right side: mode label
        let label = match self.mode {
            Mode::Browse => "[ BROWSE ]",
            Mode::Edit => "[ EDIT ]",
        };
        Paragraph::new(Line::styled(label, self.theme.mode_label_style()))
            .render(chunks[1], buf);
    }
}
