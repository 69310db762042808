// src/infra/errors.rs — Error types for frontdesk

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontDeskError {
    // Chat service errors (all collapse to one failure turn in the controller)
    #[error("Cannot reach chat service at {endpoint}: {message}")]
    Transport { endpoint: String, message: String },

    #[error("Chat service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed chat service response: {0}")]
    Decode(String),

    // Infra
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
