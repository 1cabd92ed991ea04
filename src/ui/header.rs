use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::pack::{LifecycleState, PackSession};
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, STATUS_BUSY, STATUS_OK,
};

/// Title bar with the pack trigger and reveal progress.
pub struct Header<'a> {
    lifecycle: LifecycleState,
    pack: &'a str,
    session: &'a PackSession,
}

impl<'a> Header<'a> {
    pub fn new(lifecycle: LifecycleState, pack: &'a str, session: &'a PackSession) -> Self {
        Self {
            lifecycle,
            pack,
            session,
        }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let status_color = if self.lifecycle.input_disabled() {
            STATUS_BUSY
        } else {
            STATUS_OK
        };
        let button_style = if self.lifecycle.input_disabled() {
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("●", Style::default().fg(status_color)),
            Span::styled("  ", text_style),
            Span::styled("Pack Opener", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(self.pack, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("[ {} ]", self.lifecycle.display_label()), button_style),
        ];
        if !self.session.is_empty() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("{}/{} revealed", self.session.revealed_count(), self.session.len()),
                text_style,
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
