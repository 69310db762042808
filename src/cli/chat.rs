// src/cli/chat.rs — Line-mode chat REPL

use crate::client::ChatClient;
use crate::core::{Applied, SessionController};

const HELP: &str = "  /new   start a new session\n  /quit  leave\n  /help  this list";

/// What a line of input asks for.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    NewSession,
    Help,
    Unknown(&'a str),
    Message(&'a str),
    Empty,
}

fn parse_line(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    match trimmed {
        "" => Command::Empty,
        "/quit" | "/exit" | "quit" | "exit" => Command::Quit,
        "/new" => Command::NewSession,
        "/help" => Command::Help,
        cmd if cmd.starts_with('/') => Command::Unknown(cmd),
        msg => Command::Message(msg),
    }
}

/// Run the interactive chat REPL against `client`.
pub async fn run_chat(
    mut controller: SessionController,
    client: &dyn ChatClient,
) -> anyhow::Result<()> {
    eprintln!(
        "frontdesk v{} | session {}\nDescribe your symptoms or reason for visit. /help for commands.\n",
        env!("CARGO_PKG_VERSION"),
        controller.session_id(),
    );
    controller.start();

    while let Some(input) = read_input() {
        match parse_line(&input) {
            Command::Quit => break,
            Command::Empty => continue,
            Command::Help => eprintln!("{HELP}"),
            Command::Unknown(cmd) => eprintln!("  Unknown command: {cmd} (try /help)"),
            Command::NewSession => {
                controller.reset();
                eprintln!("  New session: {}", controller.session_id());
            }
            Command::Message(msg) => {
                let Some(applied) = controller.submit(client, msg).await else {
                    continue;
                };
                if let Some(turn) = controller.turns().last() {
                    println!("{}", turn.text());
                }
                if applied == (Applied::Reply { completed: true }) {
                    eprintln!(
                        "\n  \u{2713} Query Noted. Registration is complete. Your details have been sent to the desk.\n"
                    );
                    controller.dismiss_popup();
                }
            }
        }
    }

    Ok(())
}

fn read_input() -> Option<String> {
    use std::io::{self, BufRead, Write};

    print!("> ");
    io::stdout().flush().ok();

    let stdin = io::stdin();
    let mut line = String::new();
    match stdin.lock().read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line),
        Err(_) => None,
    }
}
