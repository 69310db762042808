// src/core/mod.rs — Conversation session core

pub mod controller;
pub mod transcript;
pub mod types;

pub use controller::{Applied, PendingSend, SendOutcome, SessionController};
pub use transcript::ConversationStore;
pub use types::{Intent, Origin, Phase, Turn, ViewState};
