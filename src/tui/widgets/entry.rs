// src/tui/widgets/entry.rs — Welcome screen shown before the conversation.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::tui::theme::Theme;

pub fn render(f: &mut Frame, area: Rect) {
    let card = centered_rect(56, 14, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Hospital AI", Theme::title())).centered(),
        Line::from(Span::styled(
            "Intelligent Reception & Triage System",
            Theme::subtitle(),
        ))
        .centered(),
        Line::from(""),
        Line::from("\u{1F3E5} \u{1F691} \u{1FA7A}").centered(),
        Line::from(""),
        Line::from(Span::styled("  Query Report / Start  ", Theme::button())).centered(),
        Line::from(vec![
            Span::styled("Enter", Theme::key_hint()),
            Span::styled(" to begin", Theme::key_desc()),
        ])
        .centered(),
        Line::from(""),
        Line::from(Span::styled(
            "Secure \u{2022} Private \u{2022} Instant",
            Theme::text_dim(),
        ))
        .centered(),
    ];

    f.render_widget(Paragraph::new(lines).block(block), card);
}
