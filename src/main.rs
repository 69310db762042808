// src/main.rs — frontdesk entry point

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use frontdesk::cli::{Cli, Commands};
use frontdesk::client::{ChatClient, HttpChatClient};
use frontdesk::core::SessionController;
use frontdesk::infra::config::Config;
use frontdesk::infra::logger;
use frontdesk::infra::paths;
use frontdesk::infra::session::UuidIdentity;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let mut config = if let Some(ref path) = cli.config {
        let mut config = Config::load_from(std::path::Path::new(path))?;
        config.apply_env_overrides();
        config
    } else {
        Config::load()?
    };
    if let Some(endpoint) = cli.endpoint {
        config.client.endpoint = endpoint;
    }

    match cli.command {
        Some(Commands::Chat) => {
            logger::init_logging(&config.logging.level);
            let client = HttpChatClient::new(config.client.endpoint.clone());
            tracing::info!("Chatting with {}", client.endpoint());
            let controller = SessionController::new(Box::new(UuidIdentity));
            frontdesk::cli::chat::run_chat(controller, &client).await
        }
        Some(Commands::Serve {
            host,
            port,
            webhook_url,
        }) => {
            logger::init_logging(&config.logging.level);
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if webhook_url.is_some() {
                config.server.webhook_url = webhook_url;
            }
            frontdesk::api::start_server(&config).await
        }
        None => {
            // The UI owns the terminal, so logs go to a file.
            let log_path = config
                .logging
                .file
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or_else(paths::log_file_path);
            logger::init_file_logging(&config.logging.level, &log_path)?;

            let client: Arc<dyn ChatClient> =
                Arc::new(HttpChatClient::new(config.client.endpoint.clone()));
            let controller = SessionController::new(Box::new(UuidIdentity));
            let runtime = tokio::runtime::Handle::current();

            // The UI loop blocks; keep it off the async workers.
            tokio::task::spawn_blocking(move || {
                frontdesk::tui::run_chat_ui(controller, client, runtime)
            })
            .await?
        }
    }
}
