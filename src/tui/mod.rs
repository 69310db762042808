// src/tui/mod.rs — Terminal chat UI.
//
// Entry screen, conversation screen, and the registration popup, built with
// ratatui. Launched by default when `frontdesk` runs without a subcommand.

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::run_chat_ui;
