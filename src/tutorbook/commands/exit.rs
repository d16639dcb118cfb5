use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Model;

pub const COMMAND_WORD: &str = "exit";

pub const MESSAGE_USAGE: &str = "exit: Exits the program.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn execute(&self, _model: &mut Model) -> Result<CmdResult> {
        Ok(CmdResult::default()
            .with_message(CmdMessage::info("Exiting address book as requested ..."))
            .with_exit())
    }
}
