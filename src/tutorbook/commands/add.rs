use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TutorbookError};
use crate::model::{Model, Person};

pub const COMMAND_WORD: &str = "add";

pub const MESSAGE_USAGE: &str = "add: Adds a student or a parent to the address book.\n\
Parameters: student n/NAME p/PHONE e/EMAIL a/ADDRESS s/SCHEDULE c/COST [pay/STATUS] [nt/NOTE] [t/TAG]...\n\
        or: parent n/NAME p/PHONE e/EMAIL a/ADDRESS c/COST [pay/STATUS] [nt/NOTE] [t/TAG]...\n\
Example: add student n/Amy Tan p/98765432 e/amy@example.com a/311, Clementi Ave 2 \
s/Mon 1500-1700 c/50 t/math";

pub const MESSAGE_DUPLICATE_PERSON: &str = "This person already exists in the address book";

#[derive(Debug, Clone, PartialEq)]
pub struct AddCommand {
    person: Person,
}

impl AddCommand {
    pub fn new(person: Person) -> Self {
        Self { person }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn execute(&self, model: &mut Model) -> Result<CmdResult> {
        if model.has_person(&self.person) {
            return Err(TutorbookError::Command(MESSAGE_DUPLICATE_PERSON.to_string()));
        }
        model.add_person(self.person.clone())?;

        Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!(
                "New person added: {}",
                self.person.name()
            )))
            .with_affected_persons(vec![self.person.clone()]))
    }
}
