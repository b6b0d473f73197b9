//! Command parsing for the interactive shell

use std::str::FromStr;

use seatmap_core::{PersonId, SeatRef};

use crate::state::Tab;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (try 'help')")]
    Unknown(String),
    #[error("Missing {0}")]
    MissingArgument(&'static str),
    #[error("Not a number: {0}")]
    InvalidNumber(String),
    #[error("Room and seat numbers start at 1")]
    ZeroIndex,
    #[error("Unknown tab: {0} (home or explore)")]
    UnknownTab(String),
    #[error("Too many arguments for '{0}'")]
    TrailingArguments(&'static str),
}

/// A line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tab(Tab),
    Select(PersonId),
    /// Seat coordinates, already converted to zero-based
    Sit(SeatRef),
    Undo,
    Redo,
    Reset,
    Roster,
    Json,
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(Command::Show);
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "tab" | "go" => {
                let tab = words.next().ok_or(CommandError::MissingArgument("tab name"))?;
                Command::Tab(parse_tab(tab)?)
            }
            "home" => Command::Tab(Tab::Home),
            "explore" => Command::Tab(Tab::Explore),
            "select" | "pick" => {
                let id = words.next().ok_or(CommandError::MissingArgument("person id"))?;
                Command::Select(PersonId::from(id))
            }
            "sit" | "seat" => {
                let room = parse_position(words.next(), "room number")?;
                let seat = parse_position(words.next(), "seat number")?;
                Command::Sit(SeatRef::new(room, seat))
            }
            "undo" => Command::Undo,
            "redo" => Command::Redo,
            "reset" => Command::Reset,
            "roster" | "people" => Command::Roster,
            "json" => Command::Json,
            "show" | "ls" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        if words.next().is_some() {
            return Err(CommandError::TrailingArguments(command.name()));
        }

        Ok(command)
    }
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Tab(_) => "tab",
            Command::Select(_) => "select",
            Command::Sit(_) => "sit",
            Command::Undo => "undo",
            Command::Redo => "redo",
            Command::Reset => "reset",
            Command::Roster => "roster",
            Command::Json => "json",
            Command::Show => "show",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }
}

fn parse_tab(name: &str) -> Result<Tab, CommandError> {
    match name.to_ascii_lowercase().as_str() {
        "home" => Ok(Tab::Home),
        "explore" => Ok(Tab::Explore),
        _ => Err(CommandError::UnknownTab(name.to_string())),
    }
}

/// Parse a 1-based position as typed by the user into a zero-based index
fn parse_position(word: Option<&str>, what: &'static str) -> Result<usize, CommandError> {
    let word = word.ok_or(CommandError::MissingArgument(what))?;
    let n: usize = word
        .parse()
        .map_err(|_| CommandError::InvalidNumber(word.to_string()))?;
    n.checked_sub(1).ok_or(CommandError::ZeroIndex)
}
