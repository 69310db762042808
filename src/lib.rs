// src/lib.rs — Library root for frontdesk

pub mod api;
pub mod cli;
pub mod client;
pub mod core;
pub mod desk;
pub mod infra;
pub mod tui;
pub mod util;
