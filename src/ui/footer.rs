use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " Enter: Open Pack │ P: Pack Type │ ↑↓/Wheel: Scroll │ Q: Quit";

/// Key hints, or the last request error when there is one.
pub struct Footer<'a> {
    error: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(error: Option<&'a str>) -> Self {
        Self { error }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);
        let (message, message_style) = match self.error {
            Some(error) => (
                format!(" {}", error),
                Style::default().fg(STATUS_ERROR),
            ),
            None => (
                HINTS.to_string(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            ),
        };

        // Padding by char count, not byte count
        let content_width = area.width.saturating_sub(2) as usize;
        let version_width = version.chars().count();
        let message: String = message
            .chars()
            .take(content_width.saturating_sub(version_width))
            .collect();
        let padding = content_width
            .saturating_sub(message.chars().count())
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(message, message_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
