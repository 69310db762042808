// src/core/transcript.rs — Ordered, append-only turn store for one session

use super::types::Turn;

#[derive(Debug, Default, Clone)]
pub struct ConversationStore {
    turns: Vec<Turn>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Drop every turn. Only called when the session is replaced.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Turns in insertion order.
    pub fn all(&self) -> &[Turn] {
        &self.turns
    }

    pub(crate) fn len(&self) -> usize {
        self.turns.len()
    }
}
