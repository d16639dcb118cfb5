//! Value objects held by a [`Person`](super::person::Person).
//!
//! Each field is an immutable newtype over the text the user typed. They carry
//! no validation of their own: format rules are enforced by the parser layer
//! (`parser::util`) before a value is ever built, and persisted records are
//! checked for absent fields when they are decoded by the store.

use std::fmt;
use std::str::FromStr;

macro_rules! string_field {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }
    };
}

string_field!(
    /// A person's full name. Also the key for [`is_same_person`](super::person::Person::is_same_person).
    Name
);
string_field!(Phone);
string_field!(Email);
string_field!(Address);
string_field!(
    /// Free-text annotation. An empty note means "no note".
    Note
);
string_field!(Tag);
string_field!(
    /// When a student's lessons take place, e.g. `Mon 1500-1700`.
    Schedule
);
string_field!(
    /// Lesson fee, kept as the decimal text the user entered.
    Cost
);

/// Whether the fees of a student or parent are settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaymentStatus {
    Paid,
    #[default]
    Unpaid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Unpaid => "unpaid",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "paid" => Ok(PaymentStatus::Paid),
            "unpaid" => Ok(PaymentStatus::Unpaid),
            other => Err(format!("Invalid payment status: {}", other)),
        }
    }
}
