// src/infra/session.rs — Session identity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque session token sent with every chat request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of fresh session identifiers.
///
/// Each call must return a token that has not been handed out before by this
/// instance. Cryptographic strength is not required.
pub trait IdentitySource: Send + Sync {
    fn next_id(&self) -> SessionId;
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdentity;

impl IdentitySource for UuidIdentity {
    fn next_id(&self) -> SessionId {
        SessionId(Uuid::new_v4().to_string())
    }
}
