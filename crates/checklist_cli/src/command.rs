//! Command-line parsing for the interactive surface.
//!
//! Positions are 1-based as displayed and converted to 0-based rows here.

use checklist_core::Intent;
use std::fmt::{Display, Formatter};

/// Parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Apply(Intent),
    List,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Unknown(String),
    MissingArgument(&'static str),
    InvalidPosition(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(word) => write!(f, "unknown command `{word}`; type `help`"),
            Self::MissingArgument(usage) => write!(f, "usage: {usage}"),
            Self::InvalidPosition(value) => {
                write!(f, "`{value}` is not an item number (counting from 1)")
            }
        }
    }
}

pub const HELP_TEXT: &str = "commands:
  add <text>        add a new item            (a)
  toggle <n>        check or uncheck item n   (t)
  edit <n> <text>   replace the text of item n (e)
  rm <n>            remove item n             (remove)
  list              show all items            (ls)
  help              show this help
  quit              save and exit             (exit)";

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "add" | "a" => Command::Apply(Intent::Add(rest.to_string())),
        "toggle" | "t" => Command::Apply(Intent::Toggle(parse_position(rest, "toggle <n>")?)),
        "rm" | "remove" => Command::Apply(Intent::Remove(parse_position(rest, "rm <n>")?)),
        "edit" | "e" => {
            let (position, text) = match rest.split_once(char::is_whitespace) {
                Some((position, text)) => (position, text.trim()),
                None => (rest, ""),
            };
            Command::Apply(Intent::Edit {
                row: parse_position(position, "edit <n> <text>")?,
                text: text.to_string(),
            })
        }
        "list" | "ls" => Command::List,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_position(value: &str, usage: &'static str) -> Result<usize, ParseError> {
    if value.is_empty() {
        return Err(ParseError::MissingArgument(usage));
    }
    match value.parse::<usize>() {
        Ok(position) if position > 0 => Ok(position - 1),
        _ => Err(ParseError::InvalidPosition(value.to_string())),
    }
}
