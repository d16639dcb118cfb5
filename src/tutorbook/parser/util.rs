//! Field parsers shared by the command parsers.
//!
//! Every function trims its input, checks the format rules for that field and
//! builds the value object. Failures are `TutorbookError::Parse` carrying the
//! constraint text shown to the user.

use crate::error::{Result, TutorbookError};
use crate::index::Index;
use crate::model::{Address, Cost, Email, Name, Note, PaymentStatus, Phone, Schedule, Tag};
use std::collections::HashSet;

pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";
pub const MESSAGE_NAME_CONSTRAINTS: &str =
    "Names should only contain alphanumeric characters and spaces, and it should not be blank";
pub const MESSAGE_PHONE_CONSTRAINTS: &str =
    "Phone numbers should only contain numbers, and it should be at least 3 digits long";
pub const MESSAGE_EMAIL_CONSTRAINTS: &str =
    "Emails should be of the format local-part@domain, where the local-part holds alphanumerics \
     and + _ . - (not at either end), and the domain is dot-separated labels of alphanumerics or \
     hyphens ending in a label at least 2 characters long";
pub const MESSAGE_ADDRESS_CONSTRAINTS: &str =
    "Addresses can take any values, and it should not be blank";
pub const MESSAGE_NOTE_CONSTRAINTS: &str = "Notes should be less than 100 characters";
pub const MESSAGE_TAG_CONSTRAINTS: &str = "Tags names should be alphanumeric";
pub const MESSAGE_SCHEDULE_CONSTRAINTS: &str =
    "Schedules can take any values, and it should not be blank";
pub const MESSAGE_COST_CONSTRAINTS: &str =
    "Costs should be a non-negative amount with at most two decimal places, e.g. 50 or 42.50";
pub const MESSAGE_PAYMENT_CONSTRAINTS: &str = "Payment status should be either 'paid' or 'unpaid'";

pub const MAX_NOTE_LENGTH: usize = 99;

fn invalid(message: &str) -> TutorbookError {
    TutorbookError::Parse(message.to_string())
}

pub fn parse_index(raw: &str) -> Result<Index> {
    raw.parse::<Index>()
        .map_err(|_| invalid(MESSAGE_INVALID_INDEX))
}

pub fn parse_name(raw: &str) -> Result<Name> {
    let trimmed = raw.trim();
    let valid = !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_alphanumeric() || c == ' ');
    if !valid {
        return Err(invalid(MESSAGE_NAME_CONSTRAINTS));
    }
    Ok(Name::new(trimmed))
}

pub fn parse_phone(raw: &str) -> Result<Phone> {
    let trimmed = raw.trim();
    if trimmed.len() < 3 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid(MESSAGE_PHONE_CONSTRAINTS));
    }
    Ok(Phone::new(trimmed))
}

pub fn parse_email(raw: &str) -> Result<Email> {
    let trimmed = raw.trim();
    if !is_valid_email(trimmed) {
        return Err(invalid(MESSAGE_EMAIL_CONSTRAINTS));
    }
    Ok(Email::new(trimmed))
}

pub fn parse_address(raw: &str) -> Result<Address> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid(MESSAGE_ADDRESS_CONSTRAINTS));
    }
    Ok(Address::new(trimmed))
}

/// An empty note is valid and means "no note".
pub fn parse_note(raw: &str) -> Result<Note> {
    let trimmed = raw.trim();
    if trimmed.chars().count() > MAX_NOTE_LENGTH {
        return Err(invalid(MESSAGE_NOTE_CONSTRAINTS));
    }
    Ok(Note::new(trimmed))
}

pub fn parse_tag(raw: &str) -> Result<Tag> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(char::is_alphanumeric) {
        return Err(invalid(MESSAGE_TAG_CONSTRAINTS));
    }
    Ok(Tag::new(trimmed))
}

pub fn parse_tags<S: AsRef<str>>(raw: &[S]) -> Result<HashSet<Tag>> {
    raw.iter().map(|t| parse_tag(t.as_ref())).collect()
}

pub fn parse_schedule(raw: &str) -> Result<Schedule> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid(MESSAGE_SCHEDULE_CONSTRAINTS));
    }
    Ok(Schedule::new(trimmed))
}

pub fn parse_cost(raw: &str) -> Result<Cost> {
    let trimmed = raw.trim();
    if !is_valid_cost(trimmed) {
        return Err(invalid(MESSAGE_COST_CONSTRAINTS));
    }
    Ok(Cost::new(trimmed))
}

pub fn parse_payment_status(raw: &str) -> Result<PaymentStatus> {
    raw.parse::<PaymentStatus>()
        .map_err(|_| invalid(MESSAGE_PAYMENT_CONSTRAINTS))
}

fn is_valid_cost(s: &str) -> bool {
    let (whole, fraction) = match s.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (s, None),
    };
    let whole_ok = !whole.is_empty() && whole.chars().all(|c| c.is_ascii_digit());
    let fraction_ok = match fraction {
        None => true,
        Some(f) => (1..=2).contains(&f.len()) && f.chars().all(|c| c.is_ascii_digit()),
    };
    whole_ok && fraction_ok
}

fn is_valid_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    const SPECIAL: &[char] = &['+', '_', '.', '-'];
    let (Some(first), Some(last)) = (local.chars().next(), local.chars().last()) else {
        return false;
    };
    first.is_ascii_alphanumeric()
        && last.is_ascii_alphanumeric()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || SPECIAL.contains(&c))
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    let last_ok = labels.last().is_some_and(|l| l.len() >= 2);
    labels_ok && last_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_parsing() {
        assert_eq!(parse_index(" 1 ").unwrap(), Index::from_one_based(1));
        let err = parse_index("a").unwrap_err();
        assert_eq!(err.to_string(), MESSAGE_INVALID_INDEX);
        assert!(parse_index("0").is_err());
    }

    #[test]
    fn name_rules() {
        assert_eq!(parse_name("  Amy Bee ").unwrap().as_str(), "Amy Bee");
        assert!(parse_name("").is_err());
        assert!(parse_name("   ").is_err());
        assert!(parse_name("Amy*").is_err());
    }

    #[test]
    fn phone_rules() {
        assert!(parse_phone("911").is_ok());
        assert!(parse_phone("91").is_err());
        assert!(parse_phone("9011p041").is_err());
    }

    #[test]
    fn email_rules() {
        assert!(parse_email("amy@example.com").is_ok());
        assert!(parse_email("a.b+c_d-e@mail-server.co").is_ok());
        assert!(parse_email("amy@ex").is_ok());

        assert!(parse_email("").is_err());
        assert!(parse_email("amyexample.com").is_err());
        assert!(parse_email("@example.com").is_err());
        assert!(parse_email(".amy@example.com").is_err());
        assert!(parse_email("amy@-example.com").is_err());
        assert!(parse_email("amy@example.c").is_err());
        assert!(parse_email("amy@example..com").is_err());
    }

    #[test]
    fn note_length_limit() {
        assert_eq!(parse_note("").unwrap().as_str(), "");
        assert!(parse_note(&"x".repeat(99)).is_ok());
        let err = parse_note(&"x".repeat(100)).unwrap_err();
        assert_eq!(err.to_string(), MESSAGE_NOTE_CONSTRAINTS);
    }

    #[test]
    fn tags_are_deduplicated() {
        let tags = parse_tags(&["math", "math", "physics"]).unwrap();
        assert_eq!(tags.len(), 2);
        assert!(parse_tags(&["no spaces"]).is_err());
        assert!(parse_tags::<&str>(&[]).unwrap().is_empty());
    }

    #[test]
    fn cost_rules() {
        assert!(parse_cost("50").is_ok());
        assert!(parse_cost("42.5").is_ok());
        assert!(parse_cost("42.50").is_ok());

        assert!(parse_cost("").is_err());
        assert!(parse_cost("-5").is_err());
        assert!(parse_cost("4.555").is_err());
        assert!(parse_cost("4.").is_err());
        assert!(parse_cost("$50").is_err());
    }

    #[test]
    fn schedule_and_payment_rules() {
        assert!(parse_schedule("Mon 1500-1700").is_ok());
        assert!(parse_schedule(" ").is_err());
        assert_eq!(parse_payment_status("PAID").unwrap(), PaymentStatus::Paid);
        assert!(parse_payment_status("").is_err());
    }
}
