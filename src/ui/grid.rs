//! Card grid geometry and tile widget.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use crate::config::UiConfig;
use crate::pack::Card;
use crate::ui::theme::{ACCENT, CARD_BACK, CARD_BORDER, CARD_FACE_BORDER, HEADER_TEXT, MUTED_TEXT};

/// Gap between tiles, in cells, both directions.
const GAP: u16 = 1;

/// Layout of card tiles inside the body area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardGrid {
    card_width: u16,
    card_height: u16,
}

impl CardGrid {
    pub fn new(card_width: u16, card_height: u16) -> Self {
        Self {
            card_width: card_width.max(4),
            card_height: card_height.max(3),
        }
    }

    pub fn from_config(config: &UiConfig) -> Self {
        Self::new(config.card_width, config.card_height)
    }

    /// Number of columns that fit in `width`, at least one.
    pub fn columns(&self, width: u16) -> u16 {
        (width.saturating_add(GAP) / self.card_width.saturating_add(GAP)).max(1)
    }

    fn row_pitch(&self) -> u16 {
        self.card_height.saturating_add(GAP)
    }

    /// Total rows of cells needed for `count` cards.
    pub fn content_height(&self, count: usize, width: u16) -> u16 {
        if count == 0 {
            return 0;
        }
        let columns = usize::from(self.columns(width));
        let rows = count.div_ceil(columns);
        let height = rows * usize::from(self.row_pitch()) - usize::from(GAP);
        u16::try_from(height).unwrap_or(u16::MAX)
    }

    /// Top row and height of the tile at `index`, in content coordinates.
    pub fn row_span(&self, index: usize, width: u16) -> (u16, u16) {
        let row = index / usize::from(self.columns(width));
        let top = u16::try_from(row * usize::from(self.row_pitch())).unwrap_or(u16::MAX);
        (top, self.card_height)
    }

    /// Screen rectangle of the tile at `index`, clipped to `area`.
    ///
    /// Returns `None` when the tile is scrolled out of view.
    pub fn tile_rect(&self, index: usize, area: Rect, offset: u16) -> Option<Rect> {
        let columns = usize::from(self.columns(area.width));
        let column = u16::try_from(index % columns).ok()?;
        let (top, height) = self.row_span(index, area.width);

        let bottom = top.saturating_add(height);
        let view_bottom = offset.saturating_add(area.height);
        if bottom <= offset || top >= view_bottom {
            return None;
        }

        let visible_top = top.max(offset);
        let visible_bottom = bottom.min(view_bottom);
        let x = area.x + column * (self.card_width + GAP);
        let width = self.card_width.min((area.x + area.width).saturating_sub(x));
        if width == 0 {
            return None;
        }

        Some(Rect {
            x,
            y: area.y + (visible_top - offset),
            width,
            height: visible_bottom - visible_top,
        })
    }
}

/// A single card tile: the card back while hidden, the face once revealed.
pub struct CardTile<'a> {
    card: &'a Card,
    position: usize,
}

impl<'a> CardTile<'a> {
    pub fn new(card: &'a Card, position: usize) -> Self {
        Self { card, position }
    }
}

impl Widget for CardTile<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", self.position + 1);
        if !self.card.is_revealed() {
            let block = Block::default()
                .title(Span::styled(title, Style::default().fg(MUTED_TEXT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(CARD_BORDER));
            let inner_width = usize::from(area.width.saturating_sub(2));
            let pattern: Vec<Line> = (0..area.height.saturating_sub(2))
                .map(|_| {
                    Line::from(Span::styled(
                        "▚".repeat(inner_width),
                        Style::default().fg(CARD_BACK),
                    ))
                })
                .collect();
            Paragraph::new(pattern).block(block).render(area, buf);
            return;
        }

        let block = Block::default()
            .title(Span::styled(title, Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(CARD_FACE_BORDER));
        let lines = vec![
            Line::from(Span::styled(
                self.card.name.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.card.id.clone(),
                Style::default().fg(MUTED_TEXT),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.card.image_url.clone(),
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
            )),
        ];
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
