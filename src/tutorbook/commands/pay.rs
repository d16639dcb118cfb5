use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::Index;
use crate::model::{Model, Parent, PaymentStatus, Person, PersonFilter, Student};

use super::helpers::displayed_person;

pub const COMMAND_WORD: &str = "pay";

pub const MESSAGE_USAGE: &str = "pay: Sets the payment status of the person identified by the \
index number used in the last person listing.\n\
Parameters: INDEX (must be a positive integer) pay/STATUS (paid or unpaid)\n\
Example: pay 2 pay/paid";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayCommand {
    index: Index,
    status: PaymentStatus,
}

impl PayCommand {
    pub fn new(index: Index, status: PaymentStatus) -> Self {
        Self { index, status }
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
                s.schedule().clone(),
                s.cost().clone(),
                self.status,
                s.tags().clone(),
            )),
            Person::Parent(p) => Person::Parent(Parent::new(
                p.name().clone(),
                p.phone().clone(),
                p.email().clone(),
                p.address().clone(),
                p.note().clone(),
                p.cost().clone(),
                self.status,
                p.tags().clone(),
            )),
        };

        model.set_person(&person_to_edit, edited_person.clone())?;
        model.update_filter(PersonFilter::All);

        let message = format!("Marked {} as {}", edited_person.name(), self.status);
        Ok(CmdResult::default()
            .with_message(CmdMessage::success(message))
            .with_affected_persons(vec![edited_person]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::typical_model;
    use crate::model::PersonType;

    #[test]
    fn marks_student_as_paid() {
        let mut model = typical_model();
        let result = PayCommand::new(Index::from_one_based(1), PaymentStatus::Paid)
            .execute(&mut model)
            .unwrap();

        assert_eq!(result.feedback(), "Marked Amy as paid");
        let amy = &model.persons()[0];
        assert_eq!(amy.payment_status(), PaymentStatus::Paid);
        assert_eq!(amy.person_type(), PersonType::Student);
        assert_eq!(amy.note().as_str(), "Likes to swim.");
        assert_eq!(amy.schedule().map(|s| s.as_str()), Some("Mon 1500-1700"));
    }

    #[test]
    fn marks_parent_as_unpaid_and_resets_filter() {
        let mut model = typical_model();
        model.update_filter(PersonFilter::Role(PersonType::Parent));

        PayCommand::new(Index::from_one_based(1), PaymentStatus::Unpaid)
            .execute(&mut model)
            .unwrap();

        let bob = &model.persons()[1];
        assert_eq!(bob.person_type(), PersonType::Parent);
        assert_eq!(bob.payment_status(), PaymentStatus::Unpaid);
        assert_eq!(model.filter(), &PersonFilter::All);
    }

    #[test]
    fn invalid_index_fails() {
        let mut model = typical_model();
        assert!(PayCommand::new(Index::from_one_based(4), PaymentStatus::Paid)
            .execute(&mut model)
            .is_err());
        assert_eq!(model.persons()[0].payment_status(), PaymentStatus::Unpaid);
    }
}
