//! Parsing of REPL input lines.

/// What a line of REPL input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Blank input
    Empty,
    Quit,
    Help,
    /// `/new`: archive and start over
    NewChat,
    /// `/sessions`: list saved sessions
    Sessions,
    /// `/load <n|id>`
    Load(String),
    /// `/cite <n>`: open the n-th citation (1-based) of the last answer
    Cite(usize),
    /// A number picking one of the suggested questions (1-based)
    Suggestion(usize),
    /// Text to send to the assistant, as typed
    Send(String),
    /// Malformed or unknown slash command, with a hint for the user
    Invalid(String),
}

/// Slash commands offered for completion.
pub const COMMANDS: [&str; 6] = ["/new", "/sessions", "/load", "/cite", "/help", "/quit"];

/// Parses one line of input.
///
/// Bare numbers select a suggested question only while the conversation is
/// empty; otherwise they are sent as text.
pub fn parse(line: &str, conversation_empty: bool, suggestion_count: usize) -> ReplCommand {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ReplCommand::Empty;
    }
    if trimmed == "quit" || trimmed == "exit" {
        return ReplCommand::Quit;
    }

    if let Some(rest) = trimmed.strip_prefix('/') {
        let mut parts = rest.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default();
        let arg = parts.next().map(str::trim).unwrap_or_default();

        return match name {
            "quit" | "exit" => ReplCommand::Quit,
            "help" => ReplCommand::Help,
            "new" | "clear" => ReplCommand::NewChat,
            "sessions" | "history" => ReplCommand::Sessions,
            "load" if !arg.is_empty() => ReplCommand::Load(arg.to_string()),
            "load" => ReplCommand::Invalid("Usage: /load <number|session-id>".to_string()),
            "cite" => match arg.parse::<usize>() {
                Ok(n) if n > 0 => ReplCommand::Cite(n),
                _ => ReplCommand::Invalid("Usage: /cite <number>".to_string()),
            },
            other => ReplCommand::Invalid(format!("Unknown command: /{other}")),
        };
    }

    if conversation_empty {
        if let Ok(n) = trimmed.parse::<usize>() {
            if (1..=suggestion_count).contains(&n) {
                return ReplCommand::Suggestion(n);
            }
        }
    }

    ReplCommand::Send(line.to_string())
}

/// Whether typed text may be sent: it must have non-whitespace content and
/// no other request may be in flight.
pub fn can_send(input: &str, is_loading: bool) -> bool {
    !is_loading && !input.trim().is_empty()
}
