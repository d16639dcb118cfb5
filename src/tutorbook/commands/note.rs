use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::Index;
use crate::model::{Model, Note, Parent, Person, PersonFilter, Student};

use super::helpers::displayed_person;

pub const COMMAND_WORD: &str = "note";

pub const MESSAGE_USAGE: &str = "note: Edits the Note of the person identified by the index \
number used in the last person listing. Notes must be less than 100 characters. \
Existing Note will be overwritten by the input.\n\
Parameters: INDEX (must be a positive integer) nt/[NOTE]\n\
Example: note 1 nt/Likes to swim.";

pub const MESSAGE_ADD_NOTE_SUCCESS: &str = "Added Note to Person";
pub const MESSAGE_DELETE_NOTE_SUCCESS: &str = "Removed Note from Person";

/// Replaces the note of the person at `index` in the displayed list.
/// An empty note clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCommand {
    index: Index,
    note: Note,
}

impl NoteCommand {
    pub fn new(index: Index, note: Note) -> Self {
        Self { index, note }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CmdResult> {
        let person_to_edit = displayed_person(model, self.index)?;

        let edited_person = match &person_to_edit {
            Person::Student(s) => Person::Student(Student::new(
                s.name().clone(),
                s.phone().clone(),
                s.email().clone(),
                s.address().clone(),
                self.note.clone(),
                s.schedule().clone(),
                s.cost().clone(),
                s.payment_status(),
                s.tags().clone(),
            )),
            Person::Parent(p) => Person::Parent(Parent::new(
                p.name().clone(),
                p.phone().clone(),
                p.email().clone(),
                p.address().clone(),
                self.note.clone(),
                p.cost().clone(),
                p.payment_status(),
                p.tags().clone(),
            )),
        };

        model.set_person(&person_to_edit, edited_person.clone())?;
        model.update_filter(PersonFilter::All);

        let message = self.success_message(&edited_person);
        Ok(CmdResult::default()
            .with_message(CmdMessage::success(message))
            .with_affected_persons(vec![edited_person]))
    }

    /// Phrasing depends on the new note only: empty reads as a removal.
    fn success_message(&self, edited: &Person) -> String {
        let verb = if self.note.is_empty() {
            MESSAGE_DELETE_NOTE_SUCCESS
        } else {
            MESSAGE_ADD_NOTE_SUCCESS
        };
        format!("{}: {}", verb, edited.name())
    }
}
