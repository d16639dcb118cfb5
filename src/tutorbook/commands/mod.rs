//! # Command Layer
//!
//! One module per command kind. Each holds a command struct built by the
//! matching parser (`parser::<kind>::parse`) and an `execute` method that runs
//! against the [`Model`]. Commands are single-shot: built, executed once,
//! dropped.
//!
//! Execution either returns a [`CmdResult`] describing what happened or fails
//! with `TutorbookError::Command`. A failing command leaves the model exactly
//! as it found it: every precondition is checked before the first mutation.
//!
//! Commands compare structurally, so two commands requesting the same change
//! on the same index are `==`.

use crate::error::Result;
use crate::model::{Model, Person};

pub mod add;
pub mod clear;
pub mod delete;
pub mod exit;
pub mod find;
pub mod helpers;
pub mod help;
pub mod list;
pub mod note;
pub mod pay;
pub mod schedule;

pub const MESSAGE_INVALID_PERSON_DISPLAYED_INDEX: &str = "The person index provided is invalid";
pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";

pub fn invalid_command_format(usage: &str) -> String {
    format!("Invalid command format! \n{}", usage)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_persons: Vec<Person>,
    pub messages: Vec<CmdMessage>,
    /// The filtered list changed and should be shown again.
    pub show_list: bool,
    pub exit: bool,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_persons(mut self, persons: Vec<Person>) -> Self {
        self.affected_persons = persons;
        self
    }

    pub fn with_listing(mut self) -> Self {
        self.show_list = true;
        self
    }

    pub fn with_exit(mut self) -> Self {
        self.exit = true;
        self
    }

    /// All message contents, one per line.
    pub fn feedback(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(add::AddCommand),
    Clear(clear::ClearCommand),
    Delete(delete::DeleteCommand),
    Exit(exit::ExitCommand),
    Find(find::FindCommand),
    Help(help::HelpCommand),
    List(list::ListCommand),
    Note(note::NoteCommand),
    Pay(pay::PayCommand),
    Schedule(schedule::ScheduleCommand),
}

impl Command {
    pub fn execute(&self, model: &mut Model) -> Result<CmdResult> {
        match self {
            Command::Add(cmd) => cmd.execute(model),
            Command::Clear(cmd) => cmd.execute(model),
            Command::Delete(cmd) => cmd.execute(model),
            Command::Exit(cmd) => cmd.execute(model),
            Command::Find(cmd) => cmd.execute(model),
            Command::Help(cmd) => cmd.execute(model),
            Command::List(cmd) => cmd.execute(model),
            Command::Note(cmd) => cmd.execute(model),
            Command::Pay(cmd) => cmd.execute(model),
            Command::Schedule(cmd) => cmd.execute(model),
        }
    }

    /// Whether a successful run may have changed the master list.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Command::Add(_)
                | Command::Clear(_)
                | Command::Delete(_)
                | Command::Note(_)
                | Command::Pay(_)
                | Command::Schedule(_)
        )
    }

    pub fn word(&self) -> &'static str {
        match self {
            Command::Add(_) => add::COMMAND_WORD,
            Command::Clear(_) => clear::COMMAND_WORD,
            Command::Delete(_) => delete::COMMAND_WORD,
            Command::Exit(_) => exit::COMMAND_WORD,
            Command::Find(_) => find::COMMAND_WORD,
            Command::Help(_) => help::COMMAND_WORD,
            Command::List(_) => list::COMMAND_WORD,
            Command::Note(_) => note::COMMAND_WORD,
            Command::Pay(_) => pay::COMMAND_WORD,
            Command::Schedule(_) => schedule::COMMAND_WORD,
        }
    }
}
