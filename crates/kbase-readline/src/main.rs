//! Interactive knowledge base chat in the terminal.

mod command;
mod helper;
mod render;

use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;

use kbase_application::ChatStore;
use kbase_core::{KbaseError, Message};
use kbase_core::config::RootConfig;
use kbase_infrastructure::{ConfigService, KbasePaths, LogTarget, init_logging};
use kbase_interaction::{MockAnsweringService, RandomResponsePolicy, SUGGESTED_QUESTIONS};

use crate::command::{ReplCommand, can_send, parse};
use crate::helper::CliHelper;

fn load_config() -> RootConfig {
    match ConfigService::new().and_then(|service| service.get_config()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "{}",
                format!("Warning: using default configuration ({e})").yellow()
            );
            RootConfig::default()
        }
    }
}

fn setup_logging(config: &RootConfig) {
    let result = KbasePaths::log_file()
        .and_then(|path| init_logging(&config.logging.level, LogTarget::File(path)));
    if let Err(e) = result {
        eprintln!("{}", format!("Warning: logging disabled ({e})").yellow());
    }
}

/// Sends `text` and prints the outcome.
async fn ask(store: &ChatStore, text: &str) {
    if !can_send(text, store.is_loading().await) {
        return;
    }

    println!("{}", render::message(&Message::user(text)));
    println!("{}", "Searching the knowledge base...".bright_black());

    match store.send_message(text).await {
        Ok(answer) => println!("{}", render::message(&answer)),
        Err(e) => {
            tracing::debug!("Send failed: {}", e);
            if let Some(display) = store.error().await {
                print!("{}", render::error(&display));
            }
        }
    }
}

async fn show_citation(store: &ChatStore, number: usize) {
    let view = store.view().await;
    let citation = view
        .last_assistant_message()
        .and_then(|m| m.citations().get(number - 1));

    match citation {
        Some(citation) => print!("{}", render::document(citation)),
        None => {
            let err = KbaseError::not_found("citation", number.to_string());
            print!("{}", render::error(&err.to_string()));
        }
    }
}

/// Resolves `/load` arguments: a 1-based list position or a session id.
async fn load(store: &ChatStore, target: &str) {
    let sessions = store.sessions().await;
    let session_id = match target.parse::<usize>() {
        Ok(n) if n >= 1 => sessions.get(n - 1).map(|s| s.id.clone()),
        _ => Some(target.to_string()),
    };

    let loaded = match session_id {
        Some(id) => store.load_session(&id).await,
        None => false,
    };

    if loaded {
        let messages = store.messages().await;
        println!("{}", "Conversation restored.".bright_green());
        println!("{}", render::transcript(&messages));
    } else {
        let err = KbaseError::not_found("session", target);
        print!("{}", render::error(&err.to_string()));
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config();
    setup_logging(&config);

    let policy = Arc::new(RandomResponsePolicy::from_settings(&config.service));
    let store = ChatStore::new(Arc::new(MockAnsweringService::new(policy)));
    tracing::info!("Chat REPL started");

    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    print!("{}", render::welcome(&SUGGESTED_QUESTIONS));
    println!("{}", render::DISCLAIMER.bright_black());
    println!();

    loop {
        let line = match rl.readline(">> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        };

        let conversation_empty = store.messages().await.is_empty();
        let command = parse(&line, conversation_empty, SUGGESTED_QUESTIONS.len());
        if command != ReplCommand::Empty {
            let _ = rl.add_history_entry(line.trim());
        }

        match command {
            ReplCommand::Empty => {}
            ReplCommand::Quit => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            ReplCommand::Help => print!("{}", render::help()),
            ReplCommand::NewChat => {
                store.create_new_chat().await;
                print!("{}", render::welcome(&SUGGESTED_QUESTIONS));
            }
            ReplCommand::Sessions => {
                let view = store.view().await;
                print!(
                    "{}",
                    render::sessions(&view.sessions, view.active_session_id.as_deref())
                );
            }
            ReplCommand::Load(target) => load(&store, &target).await,
            ReplCommand::Cite(number) => show_citation(&store, number).await,
            ReplCommand::Suggestion(number) => {
                ask(&store, SUGGESTED_QUESTIONS[number - 1]).await;
            }
            ReplCommand::Send(text) => ask(&store, &text).await,
            ReplCommand::Invalid(hint) => println!("{}", hint.yellow()),
        }
    }

    tracing::info!("Chat REPL exited");
    Ok(())
}
