// src/tui/widgets/conversation.rs — Header, transcript body, input line.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::bubble;
use crate::core::ViewState;
use crate::tui::theme::Theme;

const PLACEHOLDER: &str = "Type your message here...";

/// Draw the conversation screen. Returns how many body lines sit above the
/// visible window when pinned to the newest line.
pub fn render(f: &mut Frame, area: Rect, view: &ViewState, scroll_back: u16) -> u16 {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Transcript
            Constraint::Length(3), // Input
        ])
        .split(area);

    render_header(f, chunks[0]);
    let overflow = render_body(f, chunks[1], view, scroll_back);
    render_input(f, chunks[2], view);
    overflow
}

fn render_header(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border_focus());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(22)])
        .split(block.inner(area));

    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(" Reception Desk", Theme::title()))),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled("Ctrl-N", Theme::key_hint()),
                Span::styled(" New Session ", Theme::key_desc()),
            ])
            .right_aligned(),
        ),
        chunks[1],
    );
}

/// All body lines for the transcript, oldest first.
pub fn body_lines(view: &ViewState, width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if view.turns.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Welcome to the reception.", Theme::text_dim())).centered());
        lines.push(
            Line::from(Span::styled(
                "Please describe your symptoms or reason for visit.",
                Theme::text_dim(),
            ))
            .centered(),
        );
    }

    for turn in &view.turns {
        lines.extend(bubble::lines(turn.text(), turn.is_user(), width));
        lines.push(Line::from(""));
    }

    if view.pending {
        lines.push(Line::from(Span::styled(" Typing...", Theme::typing())));
    }

    lines
}

fn render_body(f: &mut Frame, area: Rect, view: &ViewState, scroll_back: u16) -> u16 {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Theme::border());
    let inner = block.inner(area);

    let lines = body_lines(view, inner.width);
    // Pin to the newest line unless the user has scrolled back.
    let overflow = hidden_lines(lines.len(), inner.height);
    let offset = overflow.saturating_sub(scroll_back);

    f.render_widget(Paragraph::new(lines).block(block).scroll((offset, 0)), area);
    overflow
}

/// Lines that do not fit in `height` rows, saturating at `u16::MAX`.
fn hidden_lines(total: usize, height: u16) -> u16 {
    u16::try_from(total)
        .unwrap_or(u16::MAX)
        .saturating_sub(height)
}

fn render_input(f: &mut Frame, area: Rect, view: &ViewState) {
    let (title, border) = if view.pending {
        (" Waiting for reply ", Theme::border())
    } else {
        (" Enter to send ", Theme::border_focus())
    };
    let block = Block::default()
        .title(Span::styled(title, Theme::key_desc()))
        .borders(Borders::ALL)
        .border_style(border);
    let inner = block.inner(area);

    // Keep the end of a long draft in view, leaving a column for the cursor.
    let room = inner.width.saturating_sub(1) as usize;
    let typed = view.draft.chars().count();
    let visible: String = view.draft.chars().skip(typed.saturating_sub(room)).collect();

    let text = if view.draft.is_empty() {
        Span::styled(PLACEHOLDER, Theme::text_dim())
    } else {
        Span::styled(visible, Theme::text())
    };
    f.render_widget(Paragraph::new(Line::from(text)).block(block), area);

    if !view.pending {
        let x = inner.x + typed.min(room) as u16;
        f.set_cursor_position((x, inner.y));
    }
}
