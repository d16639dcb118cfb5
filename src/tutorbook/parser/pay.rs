use super::syntax::PREFIX_PAYMENT;
use super::tokenizer::tokenize;
use super::util::{parse_index, parse_payment_status};
use crate::commands::invalid_command_format;
use crate::commands::pay::{PayCommand, MESSAGE_USAGE};
use crate::error::{Result, TutorbookError};

/// `pay INDEX pay/STATUS`. Unlike a note, the status cannot be cleared, so
/// the prefix is required.
pub fn parse(args: &str) -> Result<PayCommand> {
    let map = tokenize(args, &[PREFIX_PAYMENT]);
    let invalid_format = || TutorbookError::Parse(invalid_command_format(MESSAGE_USAGE));

    let index = parse_index(map.preamble()).map_err(|_| invalid_format())?;
    map.verify_no_duplicate_prefixes(&[PREFIX_PAYMENT])?;

    let raw_status = map.value(PREFIX_PAYMENT).ok_or_else(invalid_format)?;
    let status = parse_payment_status(raw_status)?;
    Ok(PayCommand::new(index, status))
}
