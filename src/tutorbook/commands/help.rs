use crate::commands::{
    add, clear, delete, exit, find, list, note, pay, schedule, CmdMessage, CmdResult,
};
use crate::error::Result;
use crate::model::Model;

pub const COMMAND_WORD: &str = "help";

pub const MESSAGE_USAGE: &str = "help: Shows how to use every command.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub fn execute(&self, _model: &mut Model) -> Result<CmdResult> {
        Ok(CmdResult::default().with_message(CmdMessage::info(usage())))
    }
}

/// Usage text of every command, separated by blank lines.
pub fn usage() -> String {
    [
        add::MESSAGE_USAGE,
        delete::MESSAGE_USAGE,
        note::MESSAGE_USAGE,
        pay::MESSAGE_USAGE,
        schedule::MESSAGE_USAGE,
        list::MESSAGE_USAGE,
        find::MESSAGE_USAGE,
        clear::MESSAGE_USAGE,
        MESSAGE_USAGE,
        exit::MESSAGE_USAGE,
    ]
    .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_command() {
        let text = usage();
        for word in ["add:", "delete:", "note:", "pay:", "schedule:", "list:", "find:", "clear:", "help:", "exit:"] {
            assert!(text.contains(word), "missing {}", word);
        }
    }
}
