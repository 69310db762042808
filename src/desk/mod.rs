// src/desk/mod.rs — Reception desk logic behind the chat endpoint

pub mod intake;
pub mod routing;

pub use intake::{IntakeState, IntakeStep, PatientData, Registration};
pub use routing::Ward;
