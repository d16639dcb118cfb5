use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Model, PersonFilter};

pub const COMMAND_WORD: &str = "clear";

pub const MESSAGE_USAGE: &str = "clear: Removes every person from the address book.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub fn execute(&self, model: &mut Model) -> Result<CmdResult> {
        model.clear();
        model.update_filter(PersonFilter::All);
        Ok(CmdResult::default()
            .with_message(CmdMessage::success("Address book has been cleared!")))
    }
}
