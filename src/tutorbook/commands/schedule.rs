use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TutorbookError};
use crate::index::Index;
use crate::model::{Model, Person, PersonFilter, Schedule, Student};

use super::helpers::displayed_person;

pub const COMMAND_WORD: &str = "schedule";

pub const MESSAGE_USAGE: &str = "schedule: Edits the lesson schedule of the student identified \
by the index number used in the last person listing. Existing schedule will be overwritten by \
the input; an empty schedule removes it.\n\
Parameters: INDEX (must be a positive integer) s/[SCHEDULE]\n\
Example: schedule 1 s/Mon 1500-1700";

pub const MESSAGE_NOT_A_STUDENT: &str = "The person at this index is not a student";

/// Replaces a student's schedule. Parents have no schedule, so they are
/// rejected before anything changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleCommand {
    index: Index,
    schedule: Schedule,
}

impl ScheduleCommand {
    pub fn new(index: Index, schedule: Schedule) -> Self {
        Self { index, schedule }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CmdResult> {
        let person_to_edit = displayed_person(model, self.index)?;

        let edited_person = match &person_to_edit {
            Person::Student(s) => Person::Student(Student::new(
                s.name().clone(),
                s.phone().clone(),
                s.email().clone(),
                s.address().clone(),
                s.note().clone(),
                self.schedule.clone(),
                s.cost().clone(),
                s.payment_status(),
                s.tags().clone(),
            )),
            Person::Parent(_) => {
                return Err(TutorbookError::Command(MESSAGE_NOT_A_STUDENT.to_string()))
            }
        };

        model.set_person(&person_to_edit, edited_person.clone())?;
        model.update_filter(PersonFilter::All);

        let message = if self.schedule.is_empty() {
            format!("Removed Schedule from Person: {}", edited_person.name())
        } else {
            format!("Updated Schedule of Person: {}", edited_person.name())
        };
        Ok(CmdResult::default()
            .with_message(CmdMessage::success(message))
            .with_affected_persons(vec![edited_person]))
    }
}
