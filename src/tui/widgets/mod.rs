// src/tui/widgets/mod.rs — Screen and overlay widgets.

pub mod bubble;
pub mod conversation;
pub mod entry;
pub mod popup;

use ratatui::layout::Rect;

/// A `width` x `height` rect centered in `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
