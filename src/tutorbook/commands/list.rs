use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Model, PersonFilter, PersonType};

pub const COMMAND_WORD: &str = "list";

pub const MESSAGE_USAGE: &str = "list: Lists all persons, or only students or parents.\n\
Parameters: [students|parents]\n\
Example: list students";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCommand {
    role: Option<PersonType>,
}

impl ListCommand {
    pub fn new(role: Option<PersonType>) -> Self {
        Self { role }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CmdResult> {
        let (filter, message) = match self.role {
            None => (PersonFilter::All, "Listed all persons"),
            Some(PersonType::Student) => {
                (PersonFilter::Role(PersonType::Student), "Listed all students")
            }
            Some(PersonType::Parent) => {
                (PersonFilter::Role(PersonType::Parent), "Listed all parents")
            }
        };
        model.update_filter(filter);
        Ok(CmdResult::default()
            .with_message(CmdMessage::success(message))
            .with_listing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::typical_model;

    #[test]
    fn lists_everyone() {
        let mut model = typical_model();
        model.update_filter(PersonFilter::Role(PersonType::Parent));

        let result = ListCommand::new(None).execute(&mut model).unwrap();
        assert_eq!(result.feedback(), "Listed all persons");
        assert_eq!(model.filtered_persons().len(), 3);
    }

    #[test]
    fn lists_by_role() {
        let mut model = typical_model();
        ListCommand::new(Some(PersonType::Student))
            .execute(&mut model)
            .unwrap();
        assert_eq!(model.filtered_persons().len(), 2);

        let result = ListCommand::new(Some(PersonType::Parent))
            .execute(&mut model)
            .unwrap();
        assert_eq!(result.feedback(), "Listed all parents");
        assert_eq!(model.filtered_persons().len(), 1);
    }
}
