// src/tui/widgets/bubble.rs — One transcript turn as a chat bubble.
//
// Pure display: a string and whether the user wrote it. User bubbles hug the
// right edge, service bubbles the left, both capped at 80% of the width.

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::tui::theme::Theme;
use crate::util::wrap_text;

/// Lines for one bubble inside a body `width` columns wide.
pub fn lines(text: &str, is_user: bool, width: u16) -> Vec<Line<'static>> {
    // One column of padding on each side of the text.
    let max_bubble = (width as usize * 4 / 5).max(3);
    let wrapped = wrap_text(text, max_bubble - 2);
    let inner = wrapped
        .iter()
        .map(|l| l.width())
        .max()
        .unwrap_or(0);

    let style = if is_user {
        Theme::user_bubble()
    } else {
        Theme::service_bubble()
    };

    wrapped
        .into_iter()
        .map(|l| {
            let pad = inner - l.width();
            let span = Span::styled(format!(" {}{} ", l, " ".repeat(pad)), style);
            let line = Line::from(span);
            if is_user {
                line.right_aligned()
            } else {
                line.left_aligned()
            }
        })
        .collect()
}
