//! The person hierarchy.
//!
//! A [`Person`] is either a [`Student`] or a [`Parent`]. Both variants are
//! immutable: there are no setters, and an edit is expressed by building a new
//! value through the variant's full constructor with one field swapped. Code
//! that rebuilds persons matches on the enum, so adding a role is a
//! compile-time exhaustiveness error everywhere an edit is performed.
//!
//! ## Equality
//!
//! Two persons are `==` when their name, phone, email, address and tags
//! match. The note, the role and the role-specific fields are not part of
//! equality. [`Person::is_same_person`] is weaker still and only compares
//! names; it backs duplicate detection in the model.

use super::fields::{Address, Cost, Email, Name, Note, PaymentStatus, Phone, Schedule, Tag};
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonType {
    Student,
    Parent,
}

impl fmt::Display for PersonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersonType::Student => write!(f, "Student"),
            PersonType::Parent => write!(f, "Parent"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Student {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    note: Note,
    schedule: Schedule,
    cost: Cost,
    payment_status: PaymentStatus,
    tags: HashSet<Tag>,
}

impl Student {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        note: Note,
        schedule: Schedule,
        cost: Cost,
        payment_status: PaymentStatus,
        tags: HashSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            note,
            schedule,
            cost,
            payment_status,
            tags,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn note(&self) -> &Note {
        &self.note
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn cost(&self) -> &Cost {
        &self.cost
    }

    pub fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }

    pub fn tags(&self) -> &HashSet<Tag> {
        &self.tags
    }
}

#[derive(Debug, Clone)]
pub struct Parent {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    note: Note,
    cost: Cost,
    payment_status: PaymentStatus,
    tags: HashSet<Tag>,
}

impl Parent {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        note: Note,
        cost: Cost,
        payment_status: PaymentStatus,
        tags: HashSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            note,
            cost,
            payment_status,
            tags,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn note(&self) -> &Note {
        &self.note
    }

    pub fn cost(&self) -> &Cost {
        &self.cost
    }

    pub fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }

    pub fn tags(&self) -> &HashSet<Tag> {
        &self.tags
    }
}

#[derive(Debug, Clone)]
pub enum Person {
    Student(Student),
    Parent(Parent),
}

impl Person {
    pub fn person_type(&self) -> PersonType {
        match self {
            Person::Student(_) => PersonType::Student,
            Person::Parent(_) => PersonType::Parent,
        }
    }

    pub fn name(&self) -> &Name {
        match self {
            Person::Student(s) => s.name(),
            Person::Parent(p) => p.name(),
        }
    }

    pub fn phone(&self) -> &Phone {
        match self {
            Person::Student(s) => s.phone(),
            Person::Parent(p) => p.phone(),
        }
    }

    pub fn email(&self) -> &Email {
        match self {
            Person::Student(s) => s.email(),
            Person::Parent(p) => p.email(),
        }
    }

    pub fn address(&self) -> &Address {
        match self {
            Person::Student(s) => s.address(),
            Person::Parent(p) => p.address(),
        }
    }

    pub fn note(&self) -> &Note {
        match self {
            Person::Student(s) => s.note(),
            Person::Parent(p) => p.note(),
        }
    }

    pub fn cost(&self) -> &Cost {
        match self {
            Person::Student(s) => s.cost(),
            Person::Parent(p) => p.cost(),
        }
    }

    pub fn payment_status(&self) -> PaymentStatus {
        match self {
            Person::Student(s) => s.payment_status(),
            Person::Parent(p) => p.payment_status(),
        }
    }

    /// Only students have a schedule.
    pub fn schedule(&self) -> Option<&Schedule> {
        match self {
            Person::Student(s) => Some(s.schedule()),
            Person::Parent(_) => None,
        }
    }

    /// Read-only view of the tags. The set cannot be changed through it.
    pub fn tags(&self) -> &HashSet<Tag> {
        match self {
            Person::Student(s) => s.tags(),
            Person::Parent(p) => p.tags(),
        }
    }

    /// Weaker identity used for duplicate detection: same name, any role.
    pub fn is_same_person(&self, other: &Person) -> bool {
        std::ptr::eq(self, other) || self.name() == other.name()
    }

    fn sorted_tags(&self) -> Vec<&Tag> {
        let mut tags: Vec<&Tag> = self.tags().iter().collect();
        tags.sort();
        tags
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
            && self.phone() == other.phone()
            && self.email() == other.email()
            && self.address() == other.address()
            && self.tags() == other.tags()
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
        self.phone().hash(state);
        self.email().hash(state);
        self.address().hash(state);
        // HashSet has no Hash impl; sorting keeps the hash order-independent.
        self.sorted_tags().hash(state);
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&str> = self.tags().iter().map(Tag::as_str).collect();
        tags.sort_unstable();
        write!(
            f,
            "{}{{name={}, phone={}, email={}, address={}, tags=[{}]}}",
            self.person_type(),
            self.name(),
            self.phone(),
            self.email(),
            self.address(),
            tags.join(", ")
        )
    }
}
