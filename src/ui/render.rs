use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::grid::CardTile;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::selector::PackSelectorState;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.lifecycle(), app.selected_pack(), app.session());
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    draw_cards(frame, app, body);

    let footer_widget = Footer::new(app.last_error());
    frame.render_widget(footer_widget.widget(footer), footer);

    if let PackSelectorState::Visible { options, focused } = app.selector() {
        draw_selector(frame, body, options, *focused);
    }
}

fn draw_cards(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let session = app.session();
    if session.is_empty() {
        let hint = if session.pack_id().is_some() {
            "This pack was empty."
        } else {
            "Press Enter to open a pack."
        };
        let paragraph =
            Paragraph::new(Line::from(Span::styled(hint, Style::default().fg(MUTED_TEXT))))
                .alignment(Alignment::Center);
        let y = body.y + body.height / 2;
        frame.render_widget(paragraph, Rect::new(body.x, y, body.width, body.height.min(1)));
        return;
    }

    let offset = app.viewport().offset();
    for (index, card) in session.cards().iter().enumerate() {
        if let Some(rect) = app.grid().tile_rect(index, body, offset) {
            frame.render_widget(CardTile::new(card, index), rect);
        }
    }
}

fn draw_selector(frame: &mut Frame<'_>, body: Rect, options: &[String], focused: usize) {
    let mut lines: Vec<Line> = options
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let line = Line::from(vec![
                Span::styled(format!("{:>2}. ", idx + 1), Style::default().fg(MUTED_TEXT)),
                Span::styled(option.as_str(), Style::default().fg(HEADER_TEXT)),
            ]);
            if idx == focused {
                line.style(Style::default().bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD))
            } else {
                line
            }
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down: Move  Enter: Select  Esc: Close",
        Style::default().fg(MUTED_TEXT),
    )));

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup_width = content_width.saturating_add(4).max(36);
    let popup_height = lines.len().saturating_add(2) as u16;
    let area = centered_rect_by_size(body, popup_width, popup_height);

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(" Pack Type ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(popup), area);
}
