use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::Index;
use crate::model::Model;

use super::helpers::displayed_person;

pub const COMMAND_WORD: &str = "delete";

pub const MESSAGE_USAGE: &str = "delete: Deletes the person identified by the index number used \
in the last person listing.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete 1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    index: Index,
}

impl DeleteCommand {
    pub fn new(index: Index) -> Self {
        Self { index }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CmdResult> {
        let person_to_delete = displayed_person(model, self.index)?;
        model.delete_person(&person_to_delete)?;

        Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!(
                "Deleted Person: {}",
                person_to_delete.name()
            )))
            .with_affected_persons(vec![person_to_delete]))
    }
}
