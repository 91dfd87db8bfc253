//! Parsing of the commands typed at the interactive prompt

use crate::types::Side;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Prompt-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{input}', type 'h' for help")]
    Unknown { input: String },

    #[error("'{command}' does not take arguments")]
    UnexpectedArgument { command: String },
}

/// One user action at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Choose(Side),
    Skip,
    Undo,
    Reset,
    Table,
    /// Export the standings, optionally to a specific path
    Export(Option<PathBuf>),
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  1, l, left      prefer the player on the left
  2, r, right     prefer the player on the right
  s, skip         skip this matchup (cannot be undone)
  u, undo         undo the last decision
  reset           reset every rating and start over
  t, table        show the current rankings
  e, export [p]   write the rankings CSV (to p if given)
  h, help         show this help
  q, quit         leave";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (trimmed, ""),
        };
        let word = word.to_lowercase();

        let command = match word.as_str() {
            "1" | "l" | "left" => Command::Choose(Side::Left),
            "2" | "r" | "right" => Command::Choose(Side::Right),
            "s" | "skip" => Command::Skip,
            "u" | "undo" => Command::Undo,
            "reset" => Command::Reset,
            "t" | "table" => Command::Table,
            "e" | "export" => {
                let path = (!rest.is_empty()).then(|| PathBuf::from(rest));
                return Ok(Command::Export(path));
            }
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => {
                return Err(CommandError::Unknown {
                    input: trimmed.to_string(),
                })
            }
        };

        if !rest.is_empty() {
            return Err(CommandError::UnexpectedArgument { command: word });
        }

        Ok(command)
    }
}
