use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::command::COMMANDS;

/// Line editor helper: completes and hints slash commands, highlights them.
#[derive(Clone)]
pub struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    pub fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn matching<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a String> + 'a {
        self.commands.iter().filter(move |cmd| cmd.starts_with(prefix))
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if !line.starts_with('/') || line.contains(' ') {
            return Ok((0, vec![]));
        }

        let candidates = self
            .matching(line)
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CliHelper {
    /// Colors the command word of a slash command; arguments stay plain.
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !line.starts_with('/') {
            return Borrowed(line);
        }
        let split = line.find(' ').unwrap_or(line.len());
        let (command, args) = line.split_at(split);
        Owned(format!("{}{}", command.bright_cyan(), args))
    }

    fn highlight_char(&self, line: &str, _pos: usize, _forced: bool) -> bool {
        line.starts_with('/')
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if !line.starts_with('/') || line.contains(' ') {
            return None;
        }
        self.matching(line)
            .find(|cmd| cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for CliHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_commands_by_prefix() {
        let helper = CliHelper::new();
        let found: Vec<_> = helper.matching("/s").collect();
        assert_eq!(found, vec!["/sessions"]);
        assert_eq!(helper.matching("/").count(), COMMANDS.len());
        assert_eq!(helper.matching("/x").count(), 0);
    }

    #[test]
    fn test_highlight_leaves_arguments_plain() {
        colored::control::set_override(false);
        let helper = CliHelper::new();
        assert_eq!(helper.highlight("/load 2", 0), "/load 2");
        assert!(matches!(helper.highlight("hello", 0), Borrowed("hello")));
    }
}
