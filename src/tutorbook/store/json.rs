//! Serde-facing shapes of the data file.
//!
//! Every field is optional at this level so that a hand-edited or truncated
//! file produces a precise `MissingField` error rather than a generic serde
//! message. Values are checked with the same rules the parser applies to
//! user input.

use crate::error::{Result, TutorbookError};
use crate::model::{Parent, Person, PersonType, Schedule, Student};
use crate::parser::util;
use serde::{Deserialize, Serialize};

pub const MESSAGE_DUPLICATE_PERSON: &str = "Persons list contains duplicate person(s).";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonAddressBook {
    #[serde(default)]
    pub persons: Vec<JsonPerson>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JsonPerson {
    #[serde(rename = "type")]
    pub person_type: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    pub cost: Option<String>,
    pub payment_status: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn require<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str> {
    value.as_deref().ok_or(TutorbookError::MissingField(field))
}

fn illegal(err: TutorbookError) -> TutorbookError {
    TutorbookError::Store(format!("Illegal value in data file: {}", err))
}

impl From<&Person> for JsonPerson {
    fn from(person: &Person) -> Self {
        let mut tags: Vec<String> = person.tags().iter().map(|t| t.to_string()).collect();
        tags.sort();
        Self {
            person_type: Some(
                match person.person_type() {
                    PersonType::Student => "student",
                    PersonType::Parent => "parent",
                }
                .to_string(),
            ),
            name: Some(person.name().to_string()),
            phone: Some(person.phone().to_string()),
            email: Some(person.email().to_string()),
            address: Some(person.address().to_string()),
            schedule: person.schedule().map(|s| s.to_string()),
            cost: Some(person.cost().to_string()),
            payment_status: Some(person.payment_status().to_string()),
            note: Some(person.note().to_string()),
            tags,
        }
    }
}

impl JsonPerson {
    pub fn to_person(&self) -> Result<Person> {
        let person_type = match require(&self.person_type, "Type")? {
            "student" => PersonType::Student,
            "parent" => PersonType::Parent,
            other => {
                return Err(TutorbookError::Store(format!(
                    "Illegal value in data file: unknown person type '{}'",
                    other
                )))
            }
        };

        let name = util::parse_name(require(&self.name, "Name")?).map_err(illegal)?;
        let phone = util::parse_phone(require(&self.phone, "Phone")?).map_err(illegal)?;
        let email = util::parse_email(require(&self.email, "Email")?).map_err(illegal)?;
        let address = util::parse_address(require(&self.address, "Address")?).map_err(illegal)?;
        let cost = util::parse_cost(require(&self.cost, "Cost")?).map_err(illegal)?;
        let payment_status =
            util::parse_payment_status(require(&self.payment_status, "PaymentStatus")?)
                .map_err(illegal)?;
        let note = util::parse_note(self.note.as_deref().unwrap_or("")).map_err(illegal)?;
        let tags = util::parse_tags(self.tags.as_slice()).map_err(illegal)?;

        let person = match person_type {
            PersonType::Student => {
                // Stored schedules may be empty after `schedule INDEX s/`.
                let schedule = Schedule::new(require(&self.schedule, "Schedule")?);
                Person::Student(Student::new(
                    name,
                    phone,
                    email,
                    address,
                    note,
                    schedule,
                    cost,
                    payment_status,
                    tags,
                ))
            }
            PersonType::Parent => Person::Parent(Parent::new(
                name,
                phone,
                email,
                address,
                note,
                cost,
                payment_status,
                tags,
            )),
        };
        Ok(person)
    }
}

impl JsonAddressBook {
    pub fn from_persons(persons: &[Person]) -> Self {
        Self {
            persons: persons.iter().map(JsonPerson::from).collect(),
        }
    }

    /// Decodes every record, rejecting files that hold the same person twice.
    pub fn to_persons(&self) -> Result<Vec<Person>> {
        let mut persons: Vec<Person> = Vec::with_capacity(self.persons.len());
        for json in &self.persons {
            let person = json.to_person()?;
            if persons.iter().any(|p| p.is_same_person(&person)) {
                return Err(TutorbookError::Store(MESSAGE_DUPLICATE_PERSON.to_string()));
            }
            persons.push(person);
        }
        Ok(persons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{amy, bob_parent, typical_model};

    #[test]
    fn encodes_role_specific_fields() {
        let json = JsonPerson::from(&amy());
        assert_eq!(json.person_type.as_deref(), Some("student"));
        assert_eq!(json.schedule.as_deref(), Some("Mon 1500-1700"));
        assert_eq!(json.tags, vec!["swimming".to_string()]);

        let json = JsonPerson::from(&bob_parent());
        assert_eq!(json.person_type.as_deref(), Some("parent"));
        assert_eq!(json.schedule, None);
    }

    #[test]
    fn decodes_what_it_encodes() {
        let model = typical_model();
        let book = JsonAddressBook::from_persons(model.persons());
        let persons = book.to_persons().unwrap();

        assert_eq!(persons.as_slice(), model.persons());
        assert_eq!(persons[0].note().as_str(), "Likes to swim.");
        assert_eq!(persons[1].person_type(), PersonType::Parent);
    }

    #[test]
    fn missing_field_is_reported_by_name() {
        let mut json = JsonPerson::from(&amy());
        json.phone = None;
        let err = json.to_person().unwrap_err();
        assert!(matches!(err, TutorbookError::MissingField("Phone")));
        assert_eq!(err.to_string(), "Person's Phone field is missing!");

        let mut json = JsonPerson::from(&amy());
        json.schedule = None;
        assert!(matches!(
            json.to_person(),
            Err(TutorbookError::MissingField("Schedule"))
        ));
    }

    #[test]
    fn note_and_tags_default_to_empty() {
        let raw = r#"{"type":"parent","name":"Bob Lee","phone":"98765432",
            "email":"bob@example.com","address":"Blk 30","cost":"80","paymentStatus":"paid"}"#;
        let json: JsonPerson = serde_json::from_str(raw).unwrap();
        let person = json.to_person().unwrap();
        assert_eq!(person.note().as_str(), "");
        assert!(person.tags().is_empty());
    }

    #[test]
    fn illegal_values_are_rejected() {
        let mut json = JsonPerson::from(&amy());
        json.email = Some("not-an-email".into());
        assert!(matches!(json.to_person(), Err(TutorbookError::Store(_))));

        let mut json = JsonPerson::from(&amy());
        json.person_type = Some("tutor".into());
        assert!(matches!(json.to_person(), Err(TutorbookError::Store(_))));
    }

    #[test]
    fn duplicate_persons_are_rejected() {
        let book = JsonAddressBook::from_persons(&[amy(), amy()]);
        let err = book.to_persons().unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Store error: {}", MESSAGE_DUPLICATE_PERSON)
        );
    }
}
