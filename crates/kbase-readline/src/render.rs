//! Terminal rendering of the chat view.
//!
//! Everything here returns a `String` so the REPL loop only prints.

use colored::Colorize;
use kbase_core::{Citation, Message, SessionList};

pub const DISCLAIMER: &str = "AI can make mistakes. Please review citations.";

/// Welcome screen shown while the conversation is empty.
pub fn welcome(suggestions: &[&str]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        "=== Enterprise Knowledge Base ===".bright_magenta().bold()
    ));
    out.push_str(&format!(
        "{}\n\n",
        "Ask about company policies, benefits and guidelines.".bright_black()
    ));
    out.push_str(&format!("{}\n", "Suggested questions:".bold()));
    for (i, question) in suggestions.iter().enumerate() {
        out.push_str(&format!("  {} {}\n", format!("{}.", i + 1).cyan(), question));
    }
    out.push_str(&format!(
        "\n{}\n",
        "Type a number to ask a suggested question, /help for commands, or 'quit' to exit."
            .bright_black()
    ));
    out
}

pub fn help() -> String {
    [
        ("/new", "Save this conversation and start a new one"),
        ("/sessions", "List saved conversations"),
        ("/load <n|id>", "Open a saved conversation"),
        ("/cite <n>", "Show the n-th source of the last answer"),
        ("/help", "Show this help"),
        ("quit", "Exit"),
    ]
    .iter()
    .map(|(cmd, desc)| format!("  {:<14} {}\n", cmd.cyan(), desc))
    .collect()
}

/// Compact citation reference, e.g. `[1] p.3 Employee Handbook 2024`.
pub fn citation_chip(number: usize, citation: &Citation) -> String {
    format!("[{}] p.{} {}", number, citation.page, citation.title)
}

/// Renders one conversation entry.
pub fn message(message: &Message) -> String {
    let time = message.timestamp().format("%H:%M");
    if message.is_user() {
        return format!("{} {}\n", format!("You ({time}):").green().bold(), message.content());
    }

    let mut out = format!("{}\n", format!("Assistant ({time}):").bright_blue().bold());
    for line in message.content().lines() {
        out.push_str(&format!("{}\n", line.bright_blue()));
    }
    if !message.citations().is_empty() {
        out.push_str(&format!("{}\n", "References:".bold()));
        for (i, citation) in message.citations().iter().enumerate() {
            out.push_str(&format!("  {}\n", citation_chip(i + 1, citation).cyan()));
        }
        out.push_str(&format!(
            "{}\n",
            "Use /cite <n> to read a reference.".bright_black()
        ));
    }
    out
}

/// Full conversation transcript, used after loading a session.
pub fn transcript(messages: &[Message]) -> String {
    messages
        .iter()
        .map(message)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Document viewer for a single citation.
pub fn document(citation: &Citation) -> String {
    let rule = "-".repeat(60);
    let mut out = String::new();
    out.push_str(&format!("{}\n", rule.bright_black()));
    out.push_str(&format!("{}\n", "Document Source".bright_black()));
    out.push_str(&format!("{}\n", citation.title.bold()));
    out.push_str(&format!("Page {}\n\n", citation.page));
    out.push_str(&format!("{}\n", "Relevant Excerpt".bold()));
    out.push_str(&format!("{}\n\n", format!("\"{}\"", citation.snippet).italic()));
    out.push_str(&format!("{}\n", "Full Document Content".bold()));
    out.push_str(&format!("{}\n", citation.document_content));
    out.push_str(&format!("{}\n", rule.bright_black()));
    out
}

/// Numbered list of saved sessions, most recent first. The active one is
/// marked with `*`.
pub fn sessions(sessions: &SessionList, active_session_id: Option<&str>) -> String {
    if sessions.is_empty() {
        return format!("{}\n", "No saved conversations yet.".bright_black());
    }

    let mut out = format!("{}\n", "Recent conversations:".bold());
    for (i, session) in sessions.iter().enumerate() {
        let marker = if Some(session.id.as_str()) == active_session_id {
            "*"
        } else {
            " "
        };
        out.push_str(&format!(
            "{} {} {} {}\n",
            marker,
            format!("{}.", i + 1).cyan(),
            session.title,
            format!(
                "({} messages, {})",
                session.messages.len(),
                session.timestamp.format("%Y-%m-%d %H:%M")
            )
            .bright_black()
        ));
    }
    out
}

pub fn error(message: &str) -> String {
    format!("{}\n", format!("Error: {message}").red())
}
