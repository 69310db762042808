// src/tui/widgets/popup.rs — Confirmation overlay after a completed registration.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::centered_rect;
use crate::tui::theme::Theme;

pub fn render(f: &mut Frame, area: Rect) {
    let rect = centered_rect(48, 11, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border_focus());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("\u{2713}", Theme::success())).centered(),
        Line::from(Span::styled("Query Noted", Theme::title())).centered(),
        Line::from(""),
        Line::from(Span::styled(
            "Registration is complete. Your details have been sent to the desk.",
            Theme::subtitle(),
        ))
        .centered(),
        Line::from(""),
        Line::from(Span::styled("  Close  ", Theme::button())).centered(),
    ];

    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true }),
        rect,
    );
}
