//! # Model
//!
//! The [`Model`] owns the master list of persons and the active
//! [`PersonFilter`]. The filtered list, which is what the user sees and what
//! every user-facing index refers to, is never stored: it is recomputed from
//! the master list each time [`Model::filtered_persons`] is called. Indexes
//! into it are therefore only meaningful until the next mutation or filter
//! change.
//!
//! Mutations go through [`Model::set_person`], [`Model::add_person`] and
//! [`Model::delete_person`]. None of them touch the filter; commands that want
//! the whole list back on screen call [`Model::update_filter`] with
//! [`PersonFilter::All`] afterwards.

use crate::error::{Result, TutorbookError};

pub mod fields;
pub mod person;

pub use fields::{Address, Cost, Email, Name, Note, PaymentStatus, Phone, Schedule, Tag};
pub use person::{Parent, Person, PersonType, Student};

/// Predicate deciding which persons are displayed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PersonFilter {
    #[default]
    All,
    /// Matches when any keyword equals a whole word of the name, ignoring case.
    NameKeywords(Vec<String>),
    Role(PersonType),
}

impl PersonFilter {
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            PersonFilter::All => true,
            PersonFilter::NameKeywords(keywords) => {
                let name = person.name().as_str().to_lowercase();
                keywords.iter().any(|keyword| {
                    let keyword = keyword.to_lowercase();
                    name.split_whitespace().any(|word| word == keyword)
                })
            }
            PersonFilter::Role(role) => person.person_type() == *role,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Model {
    persons: Vec<Person>,
    filter: PersonFilter,
}

impl Model {
    pub fn new(persons: Vec<Person>) -> Self {
        Self {
            persons,
            filter: PersonFilter::All,
        }
    }

    /// The master list, unaffected by the filter.
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// The displayed list: the master list under the active filter, in order.
    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.persons
            .iter()
            .filter(|p| self.filter.matches(p))
            .collect()
    }

    pub fn filter(&self) -> &PersonFilter {
        &self.filter
    }

    pub fn update_filter(&mut self, filter: PersonFilter) {
        self.filter = filter;
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn add_person(&mut self, person: Person) -> Result<()> {
        if self.has_person(&person) {
            return Err(TutorbookError::DuplicatePerson(person.name().to_string()));
        }
        self.persons.push(person);
        Ok(())
    }

    /// Replaces `target` with `edited` in the master list.
    ///
    /// `target` is located with `==`. Fails if it is absent, or if `edited`
    /// renames the person onto someone else already in the list.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<()> {
        let position = self.position_of(target)?;
        if !target.is_same_person(&edited) && self.has_person(&edited) {
            return Err(TutorbookError::DuplicatePerson(edited.name().to_string()));
        }
        self.persons[position] = edited;
        Ok(())
    }

    pub fn delete_person(&mut self, target: &Person) -> Result<()> {
        let position = self.position_of(target)?;
        self.persons.remove(position);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.persons.clear();
    }

    fn position_of(&self, target: &Person) -> Result<usize> {
        self.persons
            .iter()
            .position(|p| p == target)
            .ok_or_else(|| TutorbookError::PersonNotFound(target.name().to_string()))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use std::collections::HashSet;

    pub fn tags(names: &[&str]) -> HashSet<Tag> {
        names.iter().map(|n| Tag::new(*n)).collect()
    }

    pub fn student(name: &str, note: &str) -> Person {
        Person::Student(Student::new(
            Name::new(name),
            Phone::new("94351253"),
            Email::new(format!("{}@example.com", name.to_lowercase().replace(' ', "."))),
            Address::new("123, Jurong West Ave 6, #08-111"),
            Note::new(note),
            Schedule::new("Mon 1500-1700"),
            Cost::new("50"),
            PaymentStatus::Unpaid,
            tags(&["swimming"]),
        ))
    }

    pub fn parent(name: &str, note: &str) -> Person {
        Person::Parent(Parent::new(
            Name::new(name),
            Phone::new("98765432"),
            Email::new(format!("{}@example.com", name.to_lowercase().replace(' ', "."))),
            Address::new("311, Clementi Ave 2, #02-25"),
            Note::new(note),
            Cost::new("80"),
            PaymentStatus::Paid,
            HashSet::new(),
        ))
    }

    pub fn amy() -> Person {
        student("Amy", "Likes to swim.")
    }

    pub fn bob_parent() -> Person {
        parent("Bob Lee", "")
    }

    /// Amy (student), Bob Lee (parent), Carl Kurz (student).
    pub fn typical_model() -> Model {
        Model::new(vec![amy(), bob_parent(), student("Carl Kurz", "")])
    }
}
