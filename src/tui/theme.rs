// src/tui/theme.rs — Color scheme and style definitions for the chat UI.

use ratatui::style::{Color, Modifier, Style};

/// Clinic palette: blue accents on a neutral background.
pub struct Theme;

impl Theme {
    // ── Palette ──────────────────────────────────────────────────
    pub const DESK_BLUE: Color = Color::Rgb(0, 123, 255);
    pub const DESK_WHITE: Color = Color::Rgb(255, 255, 255);
    pub const DESK_LIGHT: Color = Color::Rgb(233, 236, 239);
    pub const DESK_INK: Color = Color::Rgb(44, 62, 80);
    pub const DESK_MUTED: Color = Color::Rgb(127, 140, 141);
    pub const DESK_FAINT: Color = Color::Rgb(149, 165, 166);
    pub const DESK_GREEN: Color = Color::Rgb(46, 204, 113);
    pub const DESK_BLACK: Color = Color::Rgb(0, 0, 0);

    // ── Semantic styles ──────────────────────────────────────────

    /// Screen titles ("Hospital AI", "Reception Desk").
    pub fn title() -> Style {
        Style::default()
            .fg(Theme::DESK_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle() -> Style {
        Style::default().fg(Theme::DESK_MUTED)
    }

    pub fn border() -> Style {
        Style::default().fg(Theme::DESK_FAINT)
    }

    pub fn border_focus() -> Style {
        Style::default().fg(Theme::DESK_BLUE)
    }

    pub fn text() -> Style {
        Style::default().fg(Theme::DESK_INK)
    }

    pub fn text_dim() -> Style {
        Style::default().fg(Theme::DESK_FAINT)
    }

    /// Bubble for turns the user wrote.
    pub fn user_bubble() -> Style {
        Style::default().fg(Theme::DESK_WHITE).bg(Theme::DESK_BLUE)
    }

    /// Bubble for turns the service wrote.
    pub fn service_bubble() -> Style {
        Style::default().fg(Theme::DESK_BLACK).bg(Theme::DESK_LIGHT)
    }

    /// "Typing..." indicator.
    pub fn typing() -> Style {
        Style::default()
            .fg(Theme::DESK_FAINT)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn success() -> Style {
        Style::default()
            .fg(Theme::DESK_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    /// Primary action ("Query Report / Start", "Close").
    pub fn button() -> Style {
        Style::default()
            .fg(Theme::DESK_WHITE)
            .bg(Theme::DESK_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_hint() -> Style {
        Style::default().fg(Theme::DESK_BLUE)
    }

    pub fn key_desc() -> Style {
        Style::default().fg(Theme::DESK_MUTED)
    }
}
