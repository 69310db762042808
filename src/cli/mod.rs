// src/cli/mod.rs — CLI definition (clap derive)

pub mod chat;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "frontdesk", about = "Hospital reception chat", version)]
pub struct Cli {
    /// Config file path
    #[arg(long)]
    pub config: Option<String>,

    /// Chat endpoint URL (overrides config and FRONTDESK_API_URL)
    #[arg(long)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Line-mode chat session (no full-screen UI)
    Chat,
    /// Run the reception desk service
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// URL that receives completed registrations
        #[arg(long)]
        webhook_url: Option<String>,
    },
}
