use super::syntax::{
    Prefix, PREFIX_ADDRESS, PREFIX_COST, PREFIX_EMAIL, PREFIX_NAME, PREFIX_NOTE, PREFIX_PAYMENT,
    PREFIX_PHONE, PREFIX_SCHEDULE, PREFIX_TAG,
};
use super::tokenizer::{tokenize, ArgumentMultimap};
use super::util::{
    parse_address, parse_cost, parse_email, parse_name, parse_note, parse_payment_status,
    parse_phone, parse_schedule, parse_tags,
};
use crate::commands::add::{AddCommand, MESSAGE_USAGE};
use crate::commands::invalid_command_format;
use crate::error::{Result, TutorbookError};
use crate::model::{Parent, PaymentStatus, Person, PersonType, Student};

const ALL_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_NOTE,
    PREFIX_TAG,
    PREFIX_SCHEDULE,
    PREFIX_COST,
    PREFIX_PAYMENT,
];

const SINGLE_VALUED: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_NOTE,
    PREFIX_SCHEDULE,
    PREFIX_COST,
    PREFIX_PAYMENT,
];

const STUDENT_REQUIRED: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_SCHEDULE,
    PREFIX_COST,
];

const PARENT_REQUIRED: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_COST,
];

pub const MESSAGE_PARENT_SCHEDULE: &str = "Parents do not have a schedule";

/// `add student|parent n/NAME p/PHONE e/EMAIL a/ADDRESS [s/SCHEDULE] c/COST
/// [pay/STATUS] [nt/NOTE] [t/TAG]...`
pub fn parse(args: &str) -> Result<AddCommand> {
    let map = tokenize(args, ALL_PREFIXES);
    let invalid_format = || TutorbookError::Parse(invalid_command_format(MESSAGE_USAGE));

    let role = match map.preamble().to_lowercase().as_str() {
        "student" => PersonType::Student,
        "parent" => PersonType::Parent,
        _ => return Err(invalid_format()),
    };
    let required = match role {
        PersonType::Student => STUDENT_REQUIRED,
        PersonType::Parent => PARENT_REQUIRED,
    };
    if !required.iter().all(|p| map.is_present(*p)) {
        return Err(invalid_format());
    }
    map.verify_no_duplicate_prefixes(SINGLE_VALUED)?;

    let person = match role {
        PersonType::Student => Person::Student(student_from(&map)?),
        PersonType::Parent => {
            if map.is_present(PREFIX_SCHEDULE) {
                return Err(TutorbookError::Parse(MESSAGE_PARENT_SCHEDULE.to_string()));
            }
            Person::Parent(parent_from(&map)?)
        }
    };
    Ok(AddCommand::new(person))
}

fn required_value(map: &ArgumentMultimap, prefix: Prefix) -> &str {
    // Presence is checked by `parse` before any field is read.
    map.value(prefix).unwrap_or_default()
}

fn payment_status(map: &ArgumentMultimap) -> Result<PaymentStatus> {
    match map.value(PREFIX_PAYMENT) {
        Some(raw) => parse_payment_status(raw),
        None => Ok(PaymentStatus::default()),
    }
}

fn student_from(map: &ArgumentMultimap) -> Result<Student> {
    Ok(Student::new(
        parse_name(required_value(map, PREFIX_NAME))?,
        parse_phone(required_value(map, PREFIX_PHONE))?,
        parse_email(required_value(map, PREFIX_EMAIL))?,
        parse_address(required_value(map, PREFIX_ADDRESS))?,
        parse_note(map.value(PREFIX_NOTE).unwrap_or(""))?,
        parse_schedule(required_value(map, PREFIX_SCHEDULE))?,
        parse_cost(required_value(map, PREFIX_COST))?,
        payment_status(map)?,
        parse_tags(map.all_values(PREFIX_TAG))?,
    ))
}

fn parent_from(map: &ArgumentMultimap) -> Result<Parent> {
    Ok(Parent::new(
        parse_name(required_value(map, PREFIX_NAME))?,
        parse_phone(required_value(map, PREFIX_PHONE))?,
        parse_email(required_value(map, PREFIX_EMAIL))?,
        parse_address(required_value(map, PREFIX_ADDRESS))?,
        parse_note(map.value(PREFIX_NOTE).unwrap_or(""))?,
        parse_cost(required_value(map, PREFIX_COST))?,
        payment_status(map)?,
        parse_tags(map.all_values(PREFIX_TAG))?,
    ))
}
