// src/core/types.rs — Conversation data model

use serde::{Deserialize, Serialize};

use crate::infra::session::SessionId;

/// Substring of a service reply that means the registration went through.
/// Matched exactly and case-sensitively.
pub const COMPLETION_MARKER: &str = "Registration complete";

/// Service turn appended when a send fails for any reason.
pub const CONNECTION_ERROR_TEXT: &str = "Error: Could not connect to server.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    Service,
}

/// One message in the transcript. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    text: String,
    origin: Origin,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Origin::User,
        }
    }

    pub fn service(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Origin::Service,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn is_user(&self) -> bool {
        self.origin == Origin::User
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Entry,
    Conversation,
}

/// Everything the presentation layer needs to draw a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub phase: Phase,
    pub session_id: SessionId,
    pub turns: Vec<Turn>,
    pub pending: bool,
    pub popup_visible: bool,
    pub draft: String,
}

/// User intents issued by a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    StartConversation,
    SubmitDraft(String),
    UpdateDraft(String),
    RequestNewSession,
    DismissPopup,
}

/// True when a reply carries the completion marker.
pub fn has_completion_marker(reply: &str) -> bool {
    reply.contains(COMPLETION_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_exact_substring() {
        assert!(has_completion_marker("Registration complete. Thank you."));
        assert!(has_completion_marker(
            "Done.\nRegistration complete.\nPlease proceed."
        ));
    }

    #[test]
    fn test_marker_case_sensitive() {
        assert!(!has_completion_marker("registration complete."));
        assert!(!has_completion_marker("REGISTRATION COMPLETE"));
        assert!(!has_completion_marker("Registration is complete."));
    }

    #[test]
    fn test_turn_constructors() {
        let u = Turn::user("hi");
        assert!(u.is_user());
        assert_eq!(u.text(), "hi");
        let s = Turn::service("hello");
        assert_eq!(s.origin(), Origin::Service);
    }

    #[test]
    fn test_default_phase_is_entry() {
        assert_eq!(Phase::default(), Phase::Entry);
    }
}
