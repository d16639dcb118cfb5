//! # Parser Layer
//!
//! Turns a line of user text into a [`Command`]. The first whitespace-delimited
//! word picks the command; the rest of the line, leading whitespace included,
//! goes to that command's parser.
//!
//! The parsers for commands that edit one field of a displayed person (`note`,
//! `pay`, `schedule`) share one shape:
//!
//! 1. [`tokenize`](tokenizer::tokenize) the arguments into a preamble and
//!    prefixed values
//! 2. parse the preamble as a 1-based [`Index`](crate::index::Index), failing
//!    with the command's usage text
//! 3. take the value of the command's prefix, `""` when absent
//! 4. validate it with [`util`], build the value object, build the command
//!
//! A parse failure means no command was built; the model is never touched.

use crate::commands::{self, help::HelpCommand, Command};
use crate::error::{Result, TutorbookError};

pub mod add;
pub mod delete;
pub mod find;
pub mod list;
pub mod note;
pub mod pay;
pub mod schedule;
pub mod syntax;
pub mod tokenizer;
pub mod util;

pub fn parse_command(input: &str) -> Result<Command> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TutorbookError::Parse(commands::invalid_command_format(
            commands::help::MESSAGE_USAGE,
        )));
    }

    let (word, args) = match trimmed.find(char::is_whitespace) {
        Some(split) => trimmed.split_at(split),
        None => (trimmed, ""),
    };

    match word {
        commands::add::COMMAND_WORD => add::parse(args).map(Command::Add),
        commands::clear::COMMAND_WORD => Ok(Command::Clear(commands::clear::ClearCommand)),
        commands::delete::COMMAND_WORD => delete::parse(args).map(Command::Delete),
        commands::exit::COMMAND_WORD => Ok(Command::Exit(commands::exit::ExitCommand)),
        commands::find::COMMAND_WORD => find::parse(args).map(Command::Find),
        commands::help::COMMAND_WORD => Ok(Command::Help(HelpCommand)),
        commands::list::COMMAND_WORD => list::parse(args).map(Command::List),
        commands::note::COMMAND_WORD => note::parse(args).map(Command::Note),
        commands::pay::COMMAND_WORD => pay::parse(args).map(Command::Pay),
        commands::schedule::COMMAND_WORD => schedule::parse(args).map(Command::Schedule),
        _ => Err(TutorbookError::Parse(
            commands::MESSAGE_UNKNOWN_COMMAND.to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::note::NoteCommand;
    use crate::index::Index;
    use crate::model::Note;

    #[test]
    fn dispatches_on_command_word() {
        assert_eq!(
            parse_command("note 1 nt/Likes to swim.").unwrap(),
            Command::Note(NoteCommand::new(
                Index::from_one_based(1),
                Note::new("Likes to swim.")
            ))
        );
        assert!(matches!(parse_command("  list  ").unwrap(), Command::List(_)));
        assert!(matches!(parse_command("clear").unwrap(), Command::Clear(_)));
        assert!(matches!(parse_command("exit").unwrap(), Command::Exit(_)));
        assert!(matches!(parse_command("help").unwrap(), Command::Help(_)));
        assert!(matches!(parse_command("delete 2").unwrap(), Command::Delete(_)));
        assert!(matches!(parse_command("find amy").unwrap(), Command::Find(_)));
        assert!(matches!(parse_command("pay 1 pay/paid").unwrap(), Command::Pay(_)));
        assert!(matches!(
            parse_command("schedule 1 s/Mon").unwrap(),
            Command::Schedule(_)
        ));
    }

    #[test]
    fn note_without_value_clears() {
        assert_eq!(
            parse_command("note 1 nt/").unwrap(),
            parse_command("note 1").unwrap()
        );
    }

    #[test]
    fn unknown_and_empty_input() {
        let err = parse_command("teleport 1").unwrap_err();
        assert_eq!(err.to_string(), commands::MESSAGE_UNKNOWN_COMMAND);

        let err = parse_command("   ").unwrap_err();
        assert!(err.to_string().starts_with("Invalid command format!"));
    }

    #[test]
    fn command_word_is_case_sensitive() {
        assert!(parse_command("NOTE 1").is_err());
    }
}
