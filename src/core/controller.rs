// src/core/controller.rs — Session controller: identity, transcript, view flags
//
// The send cycle is split around its only suspension point. `send()` does the
// optimistic work synchronously and hands back a ticket tagged with the active
// session id; `apply()` takes the ticket plus the service outcome and folds it
// in, unless the session has been replaced in the meantime.

use crate::client::{ChatClient, ChatReply, ChatRequest};
use crate::infra::errors::FrontDeskError;
use crate::infra::session::{IdentitySource, SessionId};

use super::transcript::ConversationStore;
use super::types::{
    has_completion_marker, Intent, Phase, Turn, ViewState, CONNECTION_ERROR_TEXT,
};

/// An accepted send whose outcome has not been applied yet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending send must be resolved with SessionController::apply"]
pub struct PendingSend {
    session_id: SessionId,
    message: String,
}

impl PendingSend {
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Request body for the chat client.
    pub fn request(&self) -> ChatRequest {
        ChatRequest::new(self.message.clone(), self.session_id.clone())
    }
}

/// How a chat round trip ended. Failure causes are not distinguished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Reply(String),
    Failed,
}

impl From<Result<ChatReply, FrontDeskError>> for SendOutcome {
    fn from(result: Result<ChatReply, FrontDeskError>) -> Self {
        match result {
            Ok(reply) => SendOutcome::Reply(reply.reply),
            Err(e) => {
                tracing::warn!("Chat request failed: {}", e);
                SendOutcome::Failed
            }
        }
    }
}

/// What `apply` did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Reply appended; `completed` when it carried the completion marker.
    Reply { completed: bool },
    /// Error turn appended.
    Error,
    /// Outcome belonged to a replaced session and was dropped.
    Discarded,
}

pub struct SessionController {
    identity: Box<dyn IdentitySource>,
    session_id: SessionId,
    transcript: ConversationStore,
    phase: Phase,
    pending: bool,
    popup_visible: bool,
    draft: String,
}

impl SessionController {
    pub fn new(identity: Box<dyn IdentitySource>) -> Self {
        let session_id = identity.next_id();
        tracing::info!("Session started: {}", session_id);
        Self {
            identity,
            session_id,
            transcript: ConversationStore::new(),
            phase: Phase::Entry,
            pending: false,
            popup_visible: false,
            draft: String::new(),
        }
    }

    // ── Operations ───────────────────────────────────────────────

    /// Entry → Conversation. No effect when already in the conversation.
    pub fn start(&mut self) {
        if self.phase == Phase::Entry {
            tracing::debug!("Entering conversation (session {})", self.session_id);
            self.phase = Phase::Conversation;
        }
    }

    /// Replace the session: new id, empty transcript, empty draft, popup hidden.
    /// The phase and any in-flight request are left alone; the request's
    /// outcome will be discarded by `apply`.
    pub fn reset(&mut self) {
        let previous = std::mem::replace(&mut self.session_id, self.identity.next_id());
        self.transcript.clear();
        self.draft.clear();
        self.popup_visible = false;
        tracing::info!(
            "New session started: {} (replaces {})",
            self.session_id,
            previous
        );
    }

    /// Optimistically append the user turn and mark the request pending.
    ///
    /// Returns `None` without touching any state when the trimmed text is empty
    /// or another send is still pending.
    pub fn send(&mut self, text: &str) -> Option<PendingSend> {
        let message = text.trim();
        if message.is_empty() || self.pending {
            return None;
        }

        self.transcript.append(Turn::user(message));
        self.draft.clear();
        self.pending = true;
        tracing::debug!(
            "Send accepted (session {}, turn {})",
            self.session_id,
            self.transcript.len()
        );

        Some(PendingSend {
            session_id: self.session_id.clone(),
            message: message.to_string(),
        })
    }

    /// Fold a resolved send back in. Always clears `pending`.
    pub fn apply(&mut self, ticket: PendingSend, outcome: SendOutcome) -> Applied {
        self.pending = false;

        if ticket.session_id != self.session_id {
            tracing::debug!(
                "Discarding outcome for replaced session {} (active {})",
                ticket.session_id,
                self.session_id
            );
            return Applied::Discarded;
        }

        match outcome {
            SendOutcome::Reply(reply) => {
                let completed = has_completion_marker(&reply);
                self.transcript.append(Turn::service(reply));
                if completed {
                    tracing::info!("Registration complete (session {})", self.session_id);
                    self.popup_visible = true;
                }
                Applied::Reply { completed }
            }
            SendOutcome::Failed => {
                self.transcript.append(Turn::service(CONNECTION_ERROR_TEXT));
                Applied::Error
            }
        }
    }

    /// `send` + one client round trip + `apply`.
    pub async fn submit(&mut self, client: &dyn ChatClient, text: &str) -> Option<Applied> {
        let ticket = self.send(text)?;
        let outcome = SendOutcome::from(client.send(ticket.request()).await);
        Some(self.apply(ticket, outcome))
    }

    pub fn dismiss_popup(&mut self) {
        self.popup_visible = false;
    }

    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Route a view intent. Returns the ticket when the intent started a send.
    pub fn dispatch(&mut self, intent: Intent) -> Option<PendingSend> {
        match intent {
            Intent::StartConversation => self.start(),
            Intent::SubmitDraft(text) => return self.send(&text),
            Intent::UpdateDraft(text) => self.update_draft(text),
            Intent::RequestNewSession => self.reset(),
            Intent::DismissPopup => self.dismiss_popup(),
        }
        None
    }

    // ── Read contract ────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn turns(&self) -> &[Turn] {
        self.transcript.all()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn popup_visible(&self) -> bool {
        self.popup_visible
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn snapshot(&self) -> ViewState {
        ViewState {
            phase: self.phase,
            session_id: self.session_id.clone(),
            turns: self.transcript.all().to_vec(),
            pending: self.pending,
            popup_visible: self.popup_visible,
            draft: self.draft.clone(),
        }
    }
}
